//! Lazy decomposition of types into their component spaces. Decomposition
//! rewrites the space of a whole type into the disjunction of its
//! enumerable constructors: `true` and `false` for the boolean type, one
//! constructor per variant for an enumeration, and a single head-less
//! constructor for a tuple.
//!
//! Decomposition is only ever invoked from inside the algebra operations,
//! when a whole-type space meets a more refined shape. The checker keeps a
//! stack of the types being decomposed on the active path so that recursive
//! enumerations cannot drive the algebra into unbounded expansion.
use quill_tir::{
    data::{AdtId, VariantDef},
    tys::{Ty, TyId},
};
use quill_utils::{
    log,
    thin_vec::{thin_vec, ThinVec},
};

use crate::{diagnostics::ExhaustivenessWarning, space::Space, ExhaustivenessChecker};

/// How many times one type may be decomposed on a single recursion path.
///
/// Recursive enumerations legitimately re-decompose at every level of
/// pattern nesting, so the bound has to sit well above any pattern depth
/// that occurs in practice. Beyond the bound the type is treated as opaque,
/// which degrades precision but keeps the algebra terminating.
pub(crate) const DECOMPOSE_LIMIT: usize = 32;

impl ExhaustivenessChecker<'_> {
    /// Check whether the given type can be decomposed here: it must be one
    /// of the decomposable kinds, and must not have exhausted its
    /// [DECOMPOSE_LIMIT] on the active path.
    pub fn can_decompose(&self, ty: TyId) -> bool {
        self.env.is_decomposable(ty)
            && self
                .decomposing
                .borrow()
                .iter()
                .filter(|seen| self.env.tys_equal(**seen, ty))
                .count()
                < DECOMPOSE_LIMIT
    }

    /// Decompose a type into its component spaces.
    pub fn decompose(&self, ty: TyId) -> ThinVec<Space> {
        match self.env.ty(ty) {
            Ty::Bool => thin_vec![Space::Bool(true), Space::Bool(false)],
            Ty::Tuple(elements) => {
                let spaces = elements.iter().map(|element| Space::Ty(*element)).collect();
                thin_vec![Space::tuple(ty, spaces)]
            }
            Ty::Data(adt) => {
                let def = self.env.adt(*adt);

                def.variants
                    .iter()
                    .enumerate()
                    .map(|(index, variant)| {
                        if self.variant_is_malformed(variant) {
                            self.warn_malformed_variant(*adt, index, variant);
                            return Space::Empty;
                        }

                        Space::ctor(ty, variant.name, self.variant_payload_spaces(variant))
                    })
                    .collect()
            }
            ty => panic!("attempt to decompose `{ty:?}`"),
        }
    }

    /// Decompose `ty` and run `f` with the resulting disjunction, keeping
    /// the type on the decomposition stack for the duration of the call.
    pub(crate) fn with_decomposition<R>(
        &self,
        ty: TyId,
        f: impl FnOnce(&Self, &Space) -> R,
    ) -> R {
        debug_assert!(self.can_decompose(ty), "decomposition was not admissible");

        self.decomposing.borrow_mut().push(ty);
        let decomposition = Space::disjunct(self.decompose(ty));
        let result = f(self, &decomposition);
        self.decomposing.borrow_mut().pop();

        result
    }

    /// The component spaces of one enumeration variant. A tuple payload is
    /// spread into one component per element, a single payload becomes one
    /// component, and a nullary variant has no components.
    fn variant_payload_spaces(&self, variant: &VariantDef) -> ThinVec<Space> {
        match variant.payload {
            None => thin_vec![],
            Some(payload) => match self.env.ty(payload) {
                Ty::Tuple(elements) => {
                    elements.iter().map(|element| Space::Ty(*element)).collect()
                }
                _ => thin_vec![Space::Ty(payload)],
            },
        }
    }

    /// A variant is malformed when its declared payload type failed to
    /// resolve. Such a variant contributes nothing to the decomposition and
    /// the analysis proceeds, possibly under-reporting missing cases.
    fn variant_is_malformed(&self, variant: &VariantDef) -> bool {
        matches!(variant.payload, Some(payload) if matches!(self.env.ty(payload), Ty::Error))
    }

    fn warn_malformed_variant(&self, adt: AdtId, index: usize, variant: &VariantDef) {
        if self.warned_variants.borrow_mut().insert((adt, index)) {
            log::warn!(
                "variant `{}` of `{}` has no resolved payload type; treating it as uninhabited",
                variant.name,
                self.env.adt(adt).name
            );

            self.diagnostics.add_warning(ExhaustivenessWarning::MalformedVariant {
                adt: self.env.adt(adt).name,
                variant: variant.name,
                location: self.subject_span,
            });
        }
    }
}
