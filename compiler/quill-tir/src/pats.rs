//! Definitions of typed patterns within the Quill typed IR.
use quill_source::{identifier::Identifier, location::Span};
use quill_utils::{
    index_vec::{define_index_type, IndexVec},
    thin_vec::ThinVec,
};

use crate::tys::TyId;

define_index_type! {
    /// Id of a [Pat] stored in the [crate::env::TirEnv].
    pub struct PatId = u32;

    MAX_INDEX = u32::max_value() as usize;
    DISABLE_MAX_INDEX_CHECK = cfg!(not(debug_assertions));
}

pub type PatStore = IndexVec<PatId, Pat>;

/// A typed pattern: the pattern kind, the type the pattern matches against,
/// and its location in the source.
#[derive(Debug, Clone)]
pub struct Pat {
    pub kind: PatKind,
    pub ty: TyId,
    pub span: Span,
}

/// All of the kinds of pattern that can appear within a `switch` case label.
#[derive(Debug, Clone)]
pub enum PatKind {
    /// The wildcard pattern `_`, matching any value.
    Wild,

    /// A binding pattern, e.g. `x`, matching any value and binding it.
    Binding(Identifier),

    /// A boolean literal pattern, `true` or `false`.
    Bool(bool),

    /// A pattern with an explicit type ascription. Opaque to the
    /// exhaustiveness analysis.
    Typed(PatId),

    /// A runtime type test. Opaque to the exhaustiveness analysis.
    TypeTest(TyId),

    /// An arbitrary expression pattern, e.g. a literal compared with `==`.
    /// Opaque to the exhaustiveness analysis.
    Expr,

    /// A `var` binding wrapper around a sub-pattern.
    Var(PatId),

    /// A parenthesised pattern.
    Paren(PatId),

    /// Sugar for matching the `some` variant of an optional.
    Some(PatId),

    /// An enum variant pattern, e.g. `.none` or `.cons(head, tail)`, with an
    /// optional payload pattern.
    Variant { name: Identifier, payload: Option<PatId> },

    /// A tuple pattern.
    Tuple(ThinVec<PatId>),
}
