//! Quill typechecker `switch` exhaustiveness module. This module decides
//! whether the set of patterns of a `switch` statement covers every value of
//! the subject type and, when it does not, computes the minimal missing
//! patterns in a form that can be pasted back into the program as new cases.
//!
//! The analysis operates on an algebra of [space::Space]s, sets of values
//! derived from types and patterns, based on the algebra described by
//! Fengyun Liu:
//!
//! <https://infoscience.epfl.ch/record/225497>
//!
//! Exhaustiveness reduces to a subtraction: project every unguarded case
//! pattern into the space of values it covers, subtract the union of those
//! spaces from the space of the whole subject type, and simplify. An empty
//! residual means the `switch` is exhaustive; a non-empty residual is
//! flattened into a list of concrete witnesses, for example:
//!
//! ```ignore
//! x := pair(maybe(true), none); // ty: (Maybe<Bool>, Maybe<Bool>)
//! switch x {
//!     case (.some(_), .some(_)): ...
//!     case (.none, .none): ...
//! }
//! ```
//!
//! is missing exactly `(.none, .some(_))` and `(.some(_), .none)`, which is
//! what the generated diagnostic suggests.
//!
//! The three operations of the algebra (`is_subspace`, `intersect` and
//! `minus`) decompose types into their constructors lazily, only when a
//! whole-type space meets a more refined shape. Eager expansion is never
//! performed since it would diverge on recursive enumerations.

use std::cell::RefCell;

use fnv::FnvHashSet;
use quill_source::location::Span;
use quill_tir::{data::AdtId, env::TirEnv, tys::TyId};

pub mod algebra;
pub mod check;
pub mod decompose;
pub mod diagnostics;
pub mod lower;
pub mod space;

use diagnostics::ExhaustivenessDiagnostics;
use quill_tir::control::SwitchStmt;

/// Settings that control how missing cases are reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustivenessSettings {
    /// When enabled, non-exhaustive diagnostics carry a paste-able fix-it
    /// block with one `case` per missing pattern, mirroring what an editor
    /// integration would insert. Otherwise each missing pattern is listed
    /// as a separate note.
    pub fix_its: bool,
}

pub struct ExhaustivenessChecker<'tc> {
    /// The span of the subject that is being checked for exhaustiveness.
    subject_span: Span,

    /// A reference to the typed IR environment, used to look up types,
    /// data definitions and patterns.
    env: &'tc TirEnv,

    /// Settings controlling how missing cases are reported.
    settings: ExhaustivenessSettings,

    /// The types currently being decomposed on the active path of an
    /// algebra operation. Decomposition of a type that already occurs on
    /// this stack too many times is refused, which bounds the recursion of
    /// the algebra on recursive enumerations.
    decomposing: RefCell<Vec<TyId>>,

    /// Malformed variants that have already been reported, so that repeated
    /// decompositions of one enumeration warn only once.
    warned_variants: RefCell<FnvHashSet<(AdtId, usize)>>,

    /// Any diagnostics that are generated during the check.
    diagnostics: ExhaustivenessDiagnostics,
}

impl<'tc> ExhaustivenessChecker<'tc> {
    /// Create a new checker for a `switch` subject at the given span.
    pub fn new(subject_span: Span, env: &'tc TirEnv) -> Self {
        Self {
            subject_span,
            env,
            settings: ExhaustivenessSettings::default(),
            decomposing: RefCell::new(Vec::new()),
            warned_variants: RefCell::new(FnvHashSet::default()),
            diagnostics: ExhaustivenessDiagnostics::new(),
        }
    }

    /// Set the [ExhaustivenessSettings] of the checker.
    pub fn with_settings(mut self, settings: ExhaustivenessSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Convert the [ExhaustivenessChecker] into its
    /// [ExhaustivenessDiagnostics].
    pub fn into_diagnostics(self) -> ExhaustivenessDiagnostics {
        self.diagnostics
    }
}

/// Check the exhaustiveness of a single `switch` statement, returning the
/// diagnostics that were generated.
///
/// In `limited` mode, used when the subject failed to type-check, only
/// entirely empty statements are rejected.
pub fn check_switch_exhaustiveness(
    env: &TirEnv,
    switch: &SwitchStmt,
    limited: bool,
) -> ExhaustivenessDiagnostics {
    let checker = ExhaustivenessChecker::new(switch.span, env);
    checker.check_switch_exhaustiveness(switch, limited);
    checker.into_diagnostics()
}
