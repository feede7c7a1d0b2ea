//! The [TirEnv] stores all items of the typed IR and answers the structural
//! questions the analyses ask about types: whether a type is decomposable
//! into enumerable constructors, whether it is boolean, and whether two
//! types are structurally equal.
use quill_source::identifier::Identifier;
use quill_utils::thin_vec::ThinVec;

use crate::{
    data::{AdtDef, AdtId, AdtStore, VariantDef},
    pats::{Pat, PatId, PatStore},
    tys::{Ty, TyId, TyStore},
};

/// The environment holding the stores of the typed IR. The host type checker
/// populates the environment; analyses access it behind a shared reference.
#[derive(Debug)]
pub struct TirEnv {
    tys: TyStore,
    adts: AdtStore,
    pats: PatStore,
    bool_ty: TyId,
}

impl Default for TirEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TirEnv {
    /// Create a new empty environment.
    pub fn new() -> Self {
        let mut tys = TyStore::new();
        let bool_ty = tys.push(Ty::Bool);

        Self { tys, adts: AdtStore::new(), pats: PatStore::new(), bool_ty }
    }

    /// The canonical boolean type of the environment.
    pub fn bool_ty(&self) -> TyId {
        self.bool_ty
    }

    /// Add a [Ty] to the environment.
    pub fn create_ty(&mut self, ty: Ty) -> TyId {
        self.tys.push(ty)
    }

    /// Add an [AdtDef] to the environment.
    pub fn create_adt(&mut self, def: AdtDef) -> AdtId {
        self.adts.push(def)
    }

    /// Add a [Pat] to the environment.
    pub fn create_pat(&mut self, pat: Pat) -> PatId {
        self.pats.push(pat)
    }

    /// Declare an enumeration from `(variant-name, payload)` pairs,
    /// returning the [TyId] of the resulting data type.
    pub fn declare_enum(
        &mut self,
        name: impl Into<Identifier>,
        variants: impl IntoIterator<Item = (Identifier, Option<TyId>)>,
    ) -> TyId {
        let variants = variants
            .into_iter()
            .map(|(name, payload)| VariantDef { name, payload })
            .collect::<ThinVec<_>>();
        let adt = self.create_adt(AdtDef { name: name.into(), variants });

        self.create_ty(Ty::Data(adt))
    }

    /// Declare a tuple type from its element types.
    pub fn declare_tuple(&mut self, elements: impl IntoIterator<Item = TyId>) -> TyId {
        let elements = elements.into_iter().collect::<ThinVec<_>>();
        self.create_ty(Ty::Tuple(elements))
    }

    /// Get the [Ty] behind the given id.
    pub fn ty(&self, id: TyId) -> &Ty {
        &self.tys[id]
    }

    /// Get the [AdtDef] behind the given id.
    pub fn adt(&self, id: AdtId) -> &AdtDef {
        &self.adts[id]
    }

    /// Get a mutable reference to the [AdtDef] behind the given id. Used by
    /// hosts to tie the knot of self-referential enumerations.
    pub fn adt_mut(&mut self, id: AdtId) -> &mut AdtDef {
        &mut self.adts[id]
    }

    /// Get the [Pat] behind the given id.
    pub fn pat(&self, id: PatId) -> &Pat {
        &self.pats[id]
    }

    /// Check whether the given type is the boolean type.
    pub fn is_bool(&self, ty: TyId) -> bool {
        matches!(self.ty(ty), Ty::Bool)
    }

    /// Check whether the given type is decomposable: a tuple, the boolean
    /// type, or an enumeration.
    pub fn is_decomposable(&self, ty: TyId) -> bool {
        self.ty(ty).is_decomposable()
    }

    /// Check whether the given type has no values, i.e. it is an
    /// enumeration with no variants.
    pub fn is_uninhabited(&self, ty: TyId) -> bool {
        match self.ty(ty) {
            Ty::Data(adt) => self.adt(*adt).variants.is_empty(),
            _ => false,
        }
    }

    /// Structural equality on types. [Ty::Error] compares unequal to
    /// everything, including itself, so that no conclusion is drawn from a
    /// type that failed to resolve.
    pub fn tys_equal(&self, left: TyId, right: TyId) -> bool {
        if left == right {
            return !matches!(self.ty(left), Ty::Error);
        }

        match (self.ty(left), self.ty(right)) {
            (Ty::Bool, Ty::Bool) => true,
            (Ty::Tuple(xs), Ty::Tuple(ys)) => {
                xs.len() == ys.len()
                    && xs.iter().zip(ys.iter()).all(|(x, y)| self.tys_equal(*x, *y))
            }
            (Ty::Data(x), Ty::Data(y)) => x == y,
            (Ty::Opaque(x), Ty::Opaque(y)) => x == y,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality_on_tuples() {
        let mut env = TirEnv::new();
        let int = env.create_ty(Ty::Opaque(Identifier::from("Int")));
        let pair_a = env.declare_tuple([env.bool_ty(), int]);
        let pair_b = env.declare_tuple([env.bool_ty(), int]);
        let other = env.declare_tuple([int, int]);

        assert!(env.tys_equal(pair_a, pair_b));
        assert!(!env.tys_equal(pair_a, other));
    }

    #[test]
    fn error_types_are_never_equal() {
        let mut env = TirEnv::new();
        let error = env.create_ty(Ty::Error);

        assert!(!env.tys_equal(error, error));
        assert!(env.tys_equal(env.bool_ty(), env.bool_ty()));
    }

    #[test]
    fn uninhabited_enums_are_recognised() {
        let mut env = TirEnv::new();
        let never = env.declare_enum("Never", []);
        let maybe =
            env.declare_enum("Maybe", [(Identifier::from("none"), None)]);

        assert!(env.is_uninhabited(never));
        assert!(!env.is_uninhabited(maybe));
        assert!(env.is_decomposable(never));
    }
}
