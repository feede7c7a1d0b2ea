//! Definitions of types within the Quill typed IR.
use quill_source::identifier::Identifier;
use quill_utils::{
    index_vec::{define_index_type, IndexVec},
    thin_vec::ThinVec,
};

use crate::data::AdtId;

define_index_type! {
    /// Id of a [Ty] stored in the [crate::env::TirEnv].
    pub struct TyId = u32;

    MAX_INDEX = u32::max_value() as usize;
    DISABLE_MAX_INDEX_CHECK = cfg!(not(debug_assertions));
}

pub type TyStore = IndexVec<TyId, Ty>;

/// A type within the Quill typed IR. The exhaustiveness analysis only needs
/// to distinguish the three decomposable kinds of type from everything else,
/// so all remaining nominal types are folded into [Ty::Opaque].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    /// The boolean type.
    Bool,

    /// A tuple type with the given element types.
    Tuple(ThinVec<TyId>),

    /// An enumeration type, referencing its definition.
    Data(AdtId),

    /// A nominal type whose values the analysis cannot enumerate, e.g.
    /// `Int` or `Str`.
    Opaque(Identifier),

    /// A type that failed to resolve during type checking.
    Error,
}

impl Ty {
    /// Check whether the type is one of the decomposable kinds: a tuple,
    /// the boolean type, or an enumeration.
    pub fn is_decomposable(&self) -> bool {
        matches!(self, Ty::Bool | Ty::Tuple(_) | Ty::Data(_))
    }
}
