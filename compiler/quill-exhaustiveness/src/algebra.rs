//! The three operations of the space algebra: subspace inclusion,
//! intersection and subtraction, together with the simplifier that keeps
//! intermediate results compact.
//!
//! Each operation is total on a pair of spaces and dispatches on the pair
//! of variants. Only a small constant number of pair shapes is meaningful;
//! reaching the final arm of any of the dispatches is an invariant
//! violation, not a runtime condition, and aborts.
//!
//! Types are decomposed lazily, via [crate::decompose], whenever a
//! whole-type space meets a more refined shape on the other side. Every
//! recursive call is either on a strict structural sub-component of one of
//! the operands or on a freshly decomposed disjunction, so the operations
//! terminate: the fan-out of constructor subtraction is bounded by the
//! (finite) depth of the projected patterns.
use quill_utils::thin_vec::ThinVec;

use crate::{space::Space, ExhaustivenessChecker};

impl ExhaustivenessChecker<'_> {
    /// Check whether `space` is a subspace of `other`: every value
    /// contained in `space` is also contained in `other`. This is an
    /// optimisation for computing whether `space − other` is empty without
    /// materialising the difference.
    pub fn is_subspace(&self, space: &Space, other: &Space) -> bool {
        if space.is_empty() {
            return true;
        }
        if other.is_empty() {
            return false;
        }

        match (space, other) {
            // (S1 | ... | Sn) <= S iff S1 <= S && ... && Sn <= S
            (Space::Disjunct(spaces), _) => {
                spaces.iter().all(|space| self.is_subspace(space, other))
            }
            (Space::Ty(left), Space::Ty(right)) => {
                // Fast path: equal types cover one another.
                if self.env.tys_equal(*left, *right) {
                    return true;
                }

                // (_ : T1) <= (_ : T2) iff D(T1) <= (_ : T2)
                if self.can_decompose(*left)
                    && self.with_decomposition(*left, |this, decomposition| {
                        this.is_subspace(decomposition, other)
                    })
                {
                    return true;
                }

                if self.can_decompose(*right) {
                    return self.with_decomposition(*right, |this, decomposition| {
                        this.is_subspace(space, decomposition)
                    });
                }

                // Neither side can be enumerated; the type checker has
                // already proven that the two types relate.
                true
            }
            (Space::Ty(ty), Space::Disjunct(others)) => {
                // (_ : T) <= (S1 | ... | Sn) iff some Si covers the type
                // on its own...
                if others.iter().any(|other| self.is_subspace(space, other)) {
                    return true;
                }

                // ...or the decomposition of the type is covered.
                self.can_decompose(*ty)
                    && self.with_decomposition(*ty, |this, decomposition| {
                        this.is_subspace(decomposition, other)
                    })
            }
            (Space::Ty(ty), Space::Ctor { .. }) => {
                // An undecomposable type is always larger than its
                // constructor space.
                self.can_decompose(*ty)
                    && self.with_decomposition(*ty, |this, decomposition| {
                        this.is_subspace(decomposition, other)
                    })
            }
            // Typechecking guaranteed that a constructor is a subspace of
            // its own type.
            (Space::Ctor { .. }, Space::Ty(_)) => true,
            (
                Space::Ctor { head: left_head, spaces: left_spaces, .. },
                Space::Ctor { head: right_head, spaces: right_spaces, .. },
            ) => {
                // Constructors with differing heads are disjoint.
                if left_head != right_head {
                    return false;
                }

                // A constructor pattern may include the head but not the
                // payload patterns. In that case the space is covered.
                if right_spaces.is_empty() {
                    return true;
                }

                // H(a1, ..., an) <= H(b1, ..., bn) iff ai <= bi for all i
                left_spaces
                    .iter()
                    .zip(right_spaces.iter())
                    .all(|(left, right)| self.is_subspace(left, right))
            }
            // S <= (S1 | ... | Sn) iff (S <= S1) || ... || (S <= Sn)
            (Space::Ctor { .. } | Space::Bool(_), Space::Disjunct(others)) => {
                others.iter().any(|other| self.is_subspace(space, other))
            }
            (Space::Bool(_), Space::Ty(ty)) => self.env.is_bool(*ty),
            (Space::Bool(left), Space::Bool(right)) => left == right,
            (Space::Bool(_), Space::Ctor { .. }) => false,
            (Space::Ty(_) | Space::Ctor { .. }, Space::Bool(_)) => false,
            pair => panic!("uncovered pair {pair:?} while computing subspace"),
        }
    }

    /// The intersection of `space` with `other`: the largest shared
    /// subspace occupied by both arguments.
    pub fn intersect(&self, space: &Space, other: &Space) -> Space {
        // The intersection with an empty space is empty.
        if space.is_empty() || other.is_empty() {
            return Space::Empty;
        }

        match (space, other) {
            // S & (S1 | ... | Sn) = (S & S1) | ... | (S & Sn)
            (_, Space::Disjunct(others)) => {
                let intersections = others
                    .iter()
                    .map(|other| self.intersect(space, other))
                    .filter(|space| !space.is_empty())
                    .collect();
                Space::disjunct(intersections)
            }
            (Space::Disjunct(spaces), _) => {
                let intersections = spaces
                    .iter()
                    .map(|space| self.intersect(space, other))
                    .filter(|space| !space.is_empty())
                    .collect();
                Space::disjunct(intersections)
            }
            (Space::Ty(left), Space::Ty(right)) => {
                // The intersection of equal types is that type.
                if self.env.tys_equal(*left, *right) {
                    other.clone()
                } else if self.can_decompose(*left) {
                    self.with_decomposition(*left, |this, decomposition| {
                        this.intersect(decomposition, other)
                    })
                } else if self.can_decompose(*right) {
                    self.with_decomposition(*right, |this, decomposition| {
                        this.intersect(space, decomposition)
                    })
                } else {
                    other.clone()
                }
            }
            (Space::Ty(ty), Space::Ctor { .. }) => {
                if self.can_decompose(*ty) {
                    self.with_decomposition(*ty, |this, decomposition| {
                        this.intersect(decomposition, other)
                    })
                } else {
                    // The constructor is a refinement of the type.
                    other.clone()
                }
            }
            (Space::Ctor { .. }, Space::Ty(_)) => space.clone(),
            (
                Space::Ctor { ty, head: left_head, spaces: left_spaces },
                Space::Ctor { head: right_head, spaces: right_spaces, .. },
            ) => {
                // If the heads don't match, the intersection of the
                // constructor spaces is empty.
                if left_head != right_head {
                    return Space::Empty;
                }

                // A head-only pattern intersects as the whole space on the
                // other side.
                if right_spaces.is_empty() {
                    return space.clone();
                }
                if left_spaces.is_empty() {
                    return other.clone();
                }

                let mut param_spaces = ThinVec::with_capacity(left_spaces.len());
                for (left, right) in left_spaces.iter().zip(right_spaces.iter()) {
                    let intersection = self.intersect(left, right);
                    // An empty component annihilates the whole constructor.
                    if self.simplify(&intersection).is_empty() {
                        return Space::Empty;
                    }
                    param_spaces.push(intersection);
                }

                Space::Ctor { ty: *ty, head: *left_head, spaces: param_spaces }
            }
            (Space::Bool(left), Space::Bool(right)) => {
                if left == right {
                    space.clone()
                } else {
                    Space::Empty
                }
            }
            (Space::Bool(_), Space::Ty(ty)) => {
                if self.env.is_bool(*ty) {
                    space.clone()
                } else if self.can_decompose(*ty) {
                    self.with_decomposition(*ty, |this, decomposition| {
                        this.intersect(space, decomposition)
                    })
                } else {
                    Space::Empty
                }
            }
            (Space::Bool(_), Space::Ctor { .. }) => Space::Empty,
            (Space::Ty(ty), Space::Bool(_)) => {
                if self.can_decompose(*ty) {
                    self.with_decomposition(*ty, |this, decomposition| {
                        this.intersect(decomposition, other)
                    })
                } else {
                    Space::Empty
                }
            }
            (Space::Ctor { .. }, Space::Bool(_)) => Space::Empty,
            pair => panic!("uncovered pair {pair:?} while computing intersection"),
        }
    }

    /// Subtract `other` from `space`: the set of values in `space` that are
    /// not in `other`. The result is empty iff `other` completely covers
    /// `space`; otherwise it is the smallest uncovered set of cases.
    pub fn minus(&self, space: &Space, other: &Space) -> Space {
        if space.is_empty() {
            return Space::Empty;
        }
        if other.is_empty() {
            return space.clone();
        }

        match (space, other) {
            (Space::Ty(left), Space::Ty(right)) => {
                // Equal types cover one another entirely.
                if self.env.tys_equal(*left, *right) {
                    Space::Empty
                } else if self.can_decompose(*left) {
                    self.with_decomposition(*left, |this, decomposition| {
                        this.minus(decomposition, other)
                    })
                } else if self.can_decompose(*right) {
                    self.with_decomposition(*right, |this, decomposition| {
                        this.minus(space, decomposition)
                    })
                } else {
                    // Unrelated, undecomposable types: conservatively
                    // assume the type is covered.
                    Space::Empty
                }
            }
            (Space::Ty(ty), Space::Ctor { .. }) => {
                if self.can_decompose(*ty) {
                    self.with_decomposition(*ty, |this, decomposition| {
                        this.minus(decomposition, other)
                    })
                } else {
                    space.clone()
                }
            }
            // X − (S1 | ... | Sn) = ((X − S1) − ...) − Sn
            (_, Space::Disjunct(others)) => {
                others.iter().fold(space.clone(), |remainder, other| self.minus(&remainder, other))
            }
            // (S1 | ... | Sn) − X = (S1 − X) | ... | (Sn − X)
            (Space::Disjunct(spaces), _) => {
                let remainders = spaces
                    .iter()
                    .map(|space| self.minus(space, other))
                    .filter(|space| !space.is_empty())
                    .collect();
                Space::disjunct(remainders)
            }
            // The type space covers all of its constructors.
            (Space::Ctor { .. }, Space::Ty(_)) => Space::Empty,
            (
                Space::Ctor { ty, head: left_head, spaces: left_spaces },
                Space::Ctor { head: right_head, spaces: right_spaces, .. },
            ) => {
                // If the heads of the constructors don't match then the two
                // are disjoint and the difference is the whole first space.
                if left_head != right_head {
                    return space.clone();
                }

                // A constructor pattern may include the head but not the
                // payload patterns. Because the heads match, it covers the
                // whole space.
                if right_spaces.is_empty() {
                    return Space::Empty;
                }

                let mut ctor_spaces = ThinVec::new();
                let mut found_uncovered = false;

                for (index, (left, right)) in
                    left_spaces.iter().zip(right_spaces.iter()).enumerate()
                {
                    // If any pair of components is disjoint then so are the
                    // two constructors, and the difference is the whole
                    // first space.
                    if self.simplify(&self.intersect(left, right)).is_empty() {
                        return space.clone();
                    }

                    if !self.is_subspace(left, right) {
                        found_uncovered = true;
                    }

                    // Unpack the subtraction one component at a time: each
                    // reconstruction differs from the original constructor
                    // in exactly the component at `index`. This is what
                    // keeps the missing-case report one dimension at a time
                    // rather than a cartesian product of differences.
                    let mut params = left_spaces.clone();
                    params[index] = self.minus(left, right);
                    ctor_spaces.push(Space::Ctor { ty: *ty, head: *left_head, spaces: params });
                }

                if found_uncovered {
                    Space::disjunct(ctor_spaces)
                } else {
                    Space::Empty
                }
            }
            (Space::Bool(left), Space::Bool(right)) => {
                if left == right {
                    Space::Empty
                } else {
                    space.clone()
                }
            }
            (Space::Bool(_), Space::Ty(ty)) => {
                if self.env.is_bool(*ty) {
                    Space::Empty
                } else if self.can_decompose(*ty) {
                    self.with_decomposition(*ty, |this, decomposition| {
                        this.minus(space, decomposition)
                    })
                } else {
                    space.clone()
                }
            }
            (Space::Bool(_), Space::Ctor { .. }) => space.clone(),
            (Space::Ty(ty), Space::Bool(_)) => {
                if self.can_decompose(*ty) {
                    self.with_decomposition(*ty, |this, decomposition| {
                        this.minus(decomposition, other)
                    })
                } else {
                    space.clone()
                }
            }
            (Space::Ctor { .. }, Space::Bool(_)) => Space::Empty,
            pair => panic!("uncovered pair {pair:?} while computing difference"),
        }
    }

    /// Simplify a space bottom-up: remove empty components, unpack empty
    /// and singular disjunctions, and erase types that have no values.
    /// Called after every subtraction to keep the residual compact.
    pub fn simplify(&self, space: &Space) -> Space {
        match space {
            Space::Ctor { ty, head, spaces } => {
                // A constructor with no component spaces is a variant
                // without a payload and cannot be simplified further.
                if spaces.is_empty() {
                    return space.clone();
                }

                // If any component simplifies to empty, the whole space is
                // empty.
                let simplified: ThinVec<Space> =
                    spaces.iter().map(|space| self.simplify(space)).collect();
                if simplified.iter().any(|space| space.is_empty()) {
                    return Space::Empty;
                }

                Space::Ctor { ty: *ty, head: *head, spaces: simplified }
            }
            Space::Ty(ty) => {
                // If the decomposition of the type is empty, the space is
                // empty.
                if self.env.is_uninhabited(*ty) {
                    Space::Empty
                } else {
                    space.clone()
                }
            }
            Space::Disjunct(spaces) => {
                let simplified: ThinVec<Space> =
                    spaces.iter().map(|space| self.simplify(space)).collect();

                // If the disjunct is singular, unpack it into its component.
                if simplified.len() == 1 {
                    return simplified.into_iter().next().unwrap();
                }

                // Otherwise remove the empties, collapsing an all-empty
                // disjunction to the empty space.
                let compacted: ThinVec<Space> =
                    simplified.into_iter().filter(|space| !space.is_empty()).collect();
                Space::disjunct(compacted)
            }
            _ => space.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_source::{identifier::Identifier, location::Span};
    use quill_tir::{
        env::TirEnv,
        tys::{Ty, TyId},
    };
    use quill_utils::thin_vec::thin_vec;

    use super::*;

    /// An environment with a `Maybe<Bool>` enumeration and an opaque `Int`.
    fn maybe_bool_env() -> (TirEnv, TyId, TyId) {
        let mut env = TirEnv::new();
        let int = env.create_ty(Ty::Opaque(Identifier::from("Int")));
        let maybe = env.declare_enum(
            "Maybe",
            [
                (Identifier::from("none"), None),
                (Identifier::from("some"), Some(env.bool_ty())),
            ],
        );

        (env, maybe, int)
    }

    fn some(maybe: TyId, inner: Space) -> Space {
        Space::ctor(maybe, Identifier::from("some"), thin_vec![inner])
    }

    fn none(maybe: TyId) -> Space {
        Space::ctor(maybe, Identifier::from("none"), thin_vec![])
    }

    #[test]
    fn boolean_subtraction_finds_the_other_constant() {
        let env = TirEnv::new();
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        let residual = checker.minus(&Space::Ty(env.bool_ty()), &Space::Bool(true));
        assert_eq!(checker.simplify(&residual), Space::Bool(false));
    }

    #[test]
    fn subtracting_both_constants_covers_the_booleans() {
        let env = TirEnv::new();
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        let cases = Space::Disjunct(thin_vec![Space::Bool(true), Space::Bool(false)]);
        let residual = checker.minus(&Space::Ty(env.bool_ty()), &cases);
        assert!(checker.simplify(&residual).is_empty());
    }

    #[test]
    fn variant_subtraction_refines_the_payload() {
        let (env, maybe, _) = maybe_bool_env();
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        let cases = Space::Disjunct(thin_vec![
            none(maybe),
            some(maybe, Space::Bool(true)),
        ]);
        let residual = checker.simplify(&checker.minus(&Space::Ty(maybe), &cases));

        assert_eq!(residual, some(maybe, Space::Bool(false)));
    }

    #[test]
    fn head_only_patterns_cover_their_whole_constructor() {
        let (env, maybe, _) = maybe_bool_env();
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        let refined = some(maybe, Space::Bool(true));
        let head_only = Space::ctor(maybe, Identifier::from("some"), thin_vec![]);

        assert!(checker.is_subspace(&refined, &head_only));
        assert!(checker.minus(&refined, &head_only).is_empty());
    }

    #[test]
    fn constructor_subtraction_unpacks_one_component_at_a_time() {
        let (mut env, maybe, _) = maybe_bool_env();
        let pair_ty = env.declare_tuple([maybe, maybe]);
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        let subject = Space::tuple(pair_ty, thin_vec![Space::Ty(maybe), Space::Ty(maybe)]);
        let both_some = Space::tuple(
            pair_ty,
            thin_vec![some(maybe, Space::Ty(env.bool_ty())), some(maybe, Space::Ty(env.bool_ty()))],
        );

        let residual = checker.simplify(&checker.minus(&subject, &both_some));

        // One reconstruction per component, not a cartesian product.
        let Space::Disjunct(members) = residual else {
            panic!("expected a disjunction of reconstructions");
        };
        assert_eq!(members.len(), 2);
        assert_eq!(members[0], Space::tuple(pair_ty, thin_vec![none(maybe), Space::Ty(maybe)]));
        assert_eq!(members[1], Space::tuple(pair_ty, thin_vec![Space::Ty(maybe), none(maybe)]));
    }

    #[test]
    fn a_single_differing_component_yields_a_single_reconstruction() {
        let (mut env, _, _) = maybe_bool_env();
        let pair_ty = env.declare_tuple([env.bool_ty(), env.bool_ty()]);
        let checker = ExhaustivenessChecker::new(Span::null(), &env);
        let bool_ty = env.bool_ty();

        let subject = Space::tuple(pair_ty, thin_vec![Space::Ty(bool_ty), Space::Ty(bool_ty)]);
        let refined = Space::tuple(pair_ty, thin_vec![Space::Ty(bool_ty), Space::Bool(false)]);

        // The reconstruction at the unchanged component becomes empty and
        // simplifies away, leaving one constructor rather than two.
        let residual = checker.simplify(&checker.minus(&subject, &refined));
        assert_eq!(
            residual,
            Space::tuple(pair_ty, thin_vec![Space::Ty(bool_ty), Space::Bool(true)])
        );
    }

    #[test]
    fn subtracting_an_identical_constructor_is_empty() {
        let (env, maybe, _) = maybe_bool_env();
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        let refined = some(maybe, Space::Bool(true));
        assert!(checker.minus(&refined, &refined).is_empty());
    }

    #[test]
    fn subtracting_a_disjoint_constructor_changes_nothing() {
        let (env, maybe, _) = maybe_bool_env();
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        let left = some(maybe, Space::Bool(true));
        let right = some(maybe, Space::Bool(false));

        assert_eq!(checker.minus(&left, &right), left);
        assert!(checker.intersect(&left, &right).is_empty());
    }

    #[test]
    fn unrelated_opaque_types_subtract_to_empty() {
        // The conservative semantics of the source: subtracting one
        // undecomposable type from another assumes the subject is covered.
        let mut env = TirEnv::new();
        let int = env.create_ty(Ty::Opaque(Identifier::from("Int")));
        let str_ty = env.create_ty(Ty::Opaque(Identifier::from("Str")));
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        assert!(checker.minus(&Space::Ty(int), &Space::Ty(str_ty)).is_empty());
    }

    #[test]
    fn uninhabited_types_simplify_to_empty() {
        let mut env = TirEnv::new();
        let never = env.declare_enum("Never", []);
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        assert!(checker.simplify(&Space::Ty(never)).is_empty());
    }

    #[test]
    fn recursive_enumerations_terminate() {
        // A self-referential `List` enumeration: subtraction against nested
        // constructor patterns must refine, not diverge.
        let mut env = TirEnv::new();
        let list_adt = env.create_adt(quill_tir::data::AdtDef {
            name: Identifier::from("List"),
            variants: thin_vec![],
        });
        let list = env.create_ty(Ty::Data(list_adt));
        let payload = env.declare_tuple([env.bool_ty(), list]);

        // Tie the knot after the payload tuple exists.
        let nil = Identifier::from("nil");
        let cons = Identifier::from("cons");
        env.adt_mut(list_adt).variants = thin_vec![
            quill_tir::data::VariantDef { name: nil, payload: None },
            quill_tir::data::VariantDef { name: cons, payload: Some(payload) },
        ];

        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        // switch xs { case .nil: ...; case .cons(_, _): ... } is exhaustive.
        let cases = Space::Disjunct(thin_vec![
            Space::ctor(list, nil, thin_vec![]),
            Space::ctor(list, cons, thin_vec![Space::Ty(env.bool_ty()), Space::Ty(list)]),
        ]);
        let residual = checker.simplify(&checker.minus(&Space::Ty(list), &cases));
        assert!(residual.is_empty());

        // Dropping the `.nil` case leaves exactly `.nil` uncovered.
        let cases = Space::Disjunct(thin_vec![Space::ctor(
            list,
            cons,
            thin_vec![Space::Ty(env.bool_ty()), Space::Ty(list)]
        )]);
        let residual = checker.simplify(&checker.minus(&Space::Ty(list), &cases));
        assert_eq!(residual, Space::ctor(list, nil, thin_vec![]));
    }

    #[test]
    fn simplify_is_idempotent_on_nested_disjunctions() {
        let (env, maybe, _) = maybe_bool_env();
        let checker = ExhaustivenessChecker::new(Span::null(), &env);

        let space = Space::Disjunct(thin_vec![
            Space::Disjunct(thin_vec![Space::Empty, none(maybe)]),
            Space::Ctor {
                ty: maybe,
                head: Some(Identifier::from("some")),
                spaces: thin_vec![Space::Empty],
            },
        ]);

        let once = checker.simplify(&space);
        assert_eq!(checker.simplify(&once), once);
        assert_eq!(once, none(maybe));
    }
}
