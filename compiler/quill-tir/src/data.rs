//! Definitions of enumeration data types within the Quill typed IR.
use quill_source::identifier::Identifier;
use quill_utils::{
    index_vec::{define_index_type, IndexVec},
    thin_vec::ThinVec,
};

use crate::tys::TyId;

define_index_type! {
    /// Id of an [AdtDef] stored in the [crate::env::TirEnv].
    pub struct AdtId = u32;

    MAX_INDEX = u32::max_value() as usize;
    DISABLE_MAX_INDEX_CHECK = cfg!(not(debug_assertions));
}

pub type AdtStore = IndexVec<AdtId, AdtDef>;

/// The definition of an enumeration type: a name and an ordered sequence of
/// variants. An enumeration with no variants is uninhabited.
#[derive(Debug, Clone)]
pub struct AdtDef {
    /// The name of the enumeration.
    pub name: Identifier,

    /// All of the variants of the enumeration, in declaration order.
    pub variants: ThinVec<VariantDef>,
}

/// A single variant of an [AdtDef].
///
/// The payload is a single type: a variant that carries several values
/// declares a tuple payload, which the analyses spread into one component
/// per element. A payload of [crate::tys::Ty::Error] marks a variant whose
/// type information failed to resolve.
#[derive(Debug, Clone)]
pub struct VariantDef {
    /// The name of the variant.
    pub name: Identifier,

    /// The type of the variant payload, if any.
    pub payload: Option<TyId>,
}
