//! Projection of source patterns into the [Space]s of values they cover.
//!
//! Wildcards and bindings cover the whole of their type; boolean literals
//! cover one constant; tuple and variant patterns project into constructor
//! spaces component by component. Type ascriptions, type tests and
//! expression patterns are opaque to the analysis: they project to the
//! empty space and so contribute no coverage.
use quill_source::identifier::Identifier;
use quill_tir::{
    pats::{PatId, PatKind},
    tys::Ty,
};
use quill_utils::thin_vec::{thin_vec, ThinVec};

use crate::{space::Space, ExhaustivenessChecker};

impl ExhaustivenessChecker<'_> {
    /// Recursively project a pattern into the [Space] of values it covers.
    pub(crate) fn project_pat(&self, pat_id: PatId) -> Space {
        let pat = self.env.pat(pat_id);

        match &pat.kind {
            PatKind::Wild | PatKind::Binding(_) => Space::Ty(pat.ty),
            PatKind::Bool(value) => Space::Bool(*value),
            PatKind::Typed(_) | PatKind::TypeTest(_) | PatKind::Expr => Space::Empty,
            PatKind::Var(inner) | PatKind::Paren(inner) => self.project_pat(*inner),
            PatKind::Some(inner) => Space::ctor(
                pat.ty,
                Identifier::from("some"),
                thin_vec![self.project_pat(*inner)],
            ),
            PatKind::Variant { name, payload } => {
                let spaces = match payload {
                    // No payload pattern means there is no further
                    // recursive structure here: yield the head alone.
                    None => thin_vec![],
                    Some(payload) => self.project_variant_payload(*payload),
                };

                Space::ctor(pat.ty, *name, spaces)
            }
            PatKind::Tuple(elements) => {
                let spaces =
                    elements.iter().map(|element| self.project_pat(*element)).collect();
                Space::tuple(pat.ty, spaces)
            }
        }
    }

    /// Project the payload pattern of a variant pattern into the component
    /// spaces of its constructor.
    ///
    /// The "spread" rule is load-bearing: a single binding matched against
    /// a tuple-typed payload must take the N-ary shape of the constructor,
    /// one whole-type component per tuple element. Without it, intersecting
    /// the projection against the decomposed form of the enumeration would
    /// spuriously fail on arity.
    fn project_variant_payload(&self, payload: PatId) -> ThinVec<Space> {
        let pat = self.env.pat(payload);

        match &pat.kind {
            // A tuple payload pattern projects component-wise.
            PatKind::Tuple(elements) => {
                elements.iter().map(|element| self.project_pat(*element)).collect()
            }
            PatKind::Paren(inner) => {
                let semantic = self.semantic_pat(*inner);
                let inner_pat = self.env.pat(semantic);

                if matches!(
                    inner_pat.kind,
                    PatKind::Binding(_) | PatKind::Wild | PatKind::Tuple(_)
                ) {
                    // The whole payload is matched by a single pattern:
                    // project it like the tuple it really is.
                    if let Ty::Tuple(elements) = self.env.ty(inner_pat.ty) {
                        return elements.iter().map(|element| Space::Ty(*element)).collect();
                    }
                }

                thin_vec![self.project_pat(semantic)]
            }
            // An unparenthesised binding against a tuple payload spreads
            // the same way.
            PatKind::Wild | PatKind::Binding(_) => {
                if let Ty::Tuple(elements) = self.env.ty(pat.ty) {
                    return elements.iter().map(|element| Space::Ty(*element)).collect();
                }

                thin_vec![self.project_pat(payload)]
            }
            _ => thin_vec![self.project_pat(payload)],
        }
    }

    /// Strip parentheses and `var` wrappers down to the pattern that gives
    /// the payload its shape.
    fn semantic_pat(&self, pat_id: PatId) -> PatId {
        match self.env.pat(pat_id).kind {
            PatKind::Paren(inner) | PatKind::Var(inner) => self.semantic_pat(inner),
            _ => pat_id,
        }
    }
}
