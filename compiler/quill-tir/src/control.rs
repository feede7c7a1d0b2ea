//! The `switch` construct of the Quill typed IR, as consumed by the
//! exhaustiveness analysis.
use quill_source::location::Span;
use quill_utils::thin_vec::ThinVec;

use crate::{pats::PatId, tys::TyId};

/// A `switch` statement over a subject of a known type.
#[derive(Debug, Clone)]
pub struct SwitchStmt {
    /// The type of the subject expression being switched over.
    pub subject_ty: TyId,

    /// The location of the whole statement.
    pub span: Span,

    /// The case blocks of the statement, in source order.
    pub cases: ThinVec<SwitchCase>,
}

impl SwitchStmt {
    /// Iterate over all case-label items of the statement, in source order.
    pub fn case_items(&self) -> impl Iterator<Item = &CaseItem> {
        self.cases.iter().flat_map(|case| case.items.iter())
    }
}

/// A single case block of a [SwitchStmt]. One block can carry several
/// case-label items, e.g. `case .a, .b:`.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    /// The case-label items of the block, in source order.
    pub items: ThinVec<CaseItem>,
}

/// A single case-label item: a pattern, plus whether the label carries a
/// guard expression and whether it is the `default` label.
#[derive(Debug, Clone)]
pub struct CaseItem {
    /// The pattern of the label.
    pub pat: PatId,

    /// Whether the label has a `where`-style guard attached. Guarded labels
    /// do not contribute to coverage.
    pub has_guard: bool,

    /// Whether the label is the `default` label.
    pub is_default: bool,
}

impl CaseItem {
    /// Create a plain case-label item with no guard.
    pub fn new(pat: PatId) -> Self {
        Self { pat, has_guard: false, is_default: false }
    }

    /// Create a case-label item that carries a guard expression.
    pub fn guarded(pat: PatId) -> Self {
        Self { pat, has_guard: true, is_default: false }
    }

    /// Create the `default` case-label item.
    pub fn default_item(pat: PatId) -> Self {
        Self { pat, has_guard: false, is_default: true }
    }
}
