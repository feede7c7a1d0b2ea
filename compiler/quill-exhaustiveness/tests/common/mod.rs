//! Shared helpers for driving the exhaustiveness checker over hand-built
//! `switch` statements.
use quill_exhaustiveness::{
    check_switch_exhaustiveness,
    diagnostics::{ExhaustivenessError, ExhaustivenessWarning},
};
use quill_source::{identifier::Identifier, location::Span};
use quill_tir::{
    control::{CaseItem, SwitchCase, SwitchStmt},
    env::TirEnv,
    pats::{Pat, PatId, PatKind},
    tys::TyId,
};

/// Declare `Maybe<inner> { none, some(inner) }` under the given name.
pub fn declare_maybe(env: &mut TirEnv, name: &str, inner: TyId) -> TyId {
    env.declare_enum(
        name,
        [(Identifier::from("none"), None), (Identifier::from("some"), Some(inner))],
    )
}

/// Create a pattern of the given kind and type.
pub fn pat(env: &mut TirEnv, kind: PatKind, ty: TyId) -> PatId {
    env.create_pat(Pat { kind, ty, span: Span::null() })
}

/// Create a head-only variant pattern, e.g. `.none`.
pub fn variant(env: &mut TirEnv, ty: TyId, name: &str) -> PatId {
    pat(env, PatKind::Variant { name: Identifier::from(name), payload: None }, ty)
}

/// Create a variant pattern with a payload, e.g. `.some(true)`.
pub fn variant_with(env: &mut TirEnv, ty: TyId, name: &str, payload: PatId) -> PatId {
    pat(env, PatKind::Variant { name: Identifier::from(name), payload: Some(payload) }, ty)
}

/// Assemble a `switch` statement with one case block per pattern.
pub fn switch_stmt(subject_ty: TyId, pats: impl IntoIterator<Item = PatId>) -> SwitchStmt {
    SwitchStmt {
        subject_ty,
        span: Span::null(),
        cases: pats
            .into_iter()
            .map(|pat| SwitchCase { items: [CaseItem::new(pat)].into_iter().collect() })
            .collect(),
    }
}

/// Run the checker over the statement and return the collected diagnostics.
pub fn check(
    env: &TirEnv,
    switch: &SwitchStmt,
) -> (Vec<ExhaustivenessError>, Vec<ExhaustivenessWarning>) {
    check_switch_exhaustiveness(env, switch, false).into_diagnostics()
}

/// The rendered missing-pattern witnesses of the sole expected
/// non-exhaustiveness error.
pub fn missing_cases(errors: &[ExhaustivenessError]) -> Vec<String> {
    assert_eq!(errors.len(), 1, "expected exactly one diagnostic: {errors:?}");

    match &errors[0] {
        ExhaustivenessError::NonExhaustiveSwitch { uncovered, .. } => {
            uncovered.iter().map(|witness| witness.to_string()).collect()
        }
        error => panic!("expected a non-exhaustive diagnostic, got {error:?}"),
    }
}
