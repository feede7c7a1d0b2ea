//! The exhaustiveness driver: projects the case patterns of a `switch`
//! statement, subtracts their union from the space of the subject type,
//! classifies the residual and emits the appropriate diagnostics.
use quill_tir::control::SwitchStmt;
use quill_utils::{
    log,
    thin_vec::{thin_vec, ThinVec},
};

use crate::{diagnostics::ExhaustivenessError, space::Space, ExhaustivenessChecker};

/// The placeholder inserted into fix-it suggestions where the body of a new
/// case belongs.
const CODE_PLACEHOLDER: &str = "<#code#>";

impl ExhaustivenessChecker<'_> {
    /// Check whether the given `switch` statement covers every value of its
    /// subject type, reporting the missing cases when it does not.
    ///
    /// In `limited` mode, used when the subject expression failed to
    /// type-check, only entirely empty statements are rejected: anything
    /// else is given the benefit of the doubt.
    pub fn check_switch_exhaustiveness(&self, switch: &SwitchStmt, limited: bool) {
        if limited {
            if switch.cases.is_empty() {
                self.diagnose_missing_cases(switch, true, Space::Empty);
            }
            return;
        }

        let mut spaces = ThinVec::new();
        for item in switch.case_items() {
            // A guard on a case means the case does not contribute to the
            // coverage of the statement.
            if item.has_guard {
                continue;
            }

            let projection = self.project_pat(item.pat);

            // The whole space is trivially covered with a `default` label.
            if item.is_default {
                return;
            }
            spaces.push(projection);
        }

        let total = Space::Ty(switch.subject_ty);
        let covered = Space::Disjunct(spaces);
        let uncovered = self.simplify(&self.minus(&total, &covered));

        if uncovered.is_empty() {
            return;
        }

        log::debug!("`switch` residual: {}", uncovered.dump());

        // If the entire subject space is left uncovered there are two
        // choices: decompose the type and offer its cases, or simply offer
        // to insert a `default` label.
        if let Space::Ty(ty) = uncovered {
            if self.can_decompose(ty) {
                let spaces = self.decompose(ty);
                self.diagnose_missing_cases(switch, false, Space::Disjunct(spaces));
            } else {
                self.diagnose_missing_cases(switch, true, Space::Empty);
            }
            return;
        }

        // If the residual isn't a disjunction already, make it one.
        let uncovered = match uncovered {
            uncovered @ Space::Disjunct(_) => uncovered,
            uncovered => Space::Disjunct(thin_vec![uncovered]),
        };

        self.diagnose_missing_cases(switch, false, uncovered);
    }

    /// Turn the classified residual into a diagnostic. With
    /// `just_needs_default`, the statement is either empty or switches over
    /// a subject that cannot be enumerated, and the only suggestion is a
    /// `default` label; otherwise every member of `uncovered` is flattened
    /// into concrete missing-pattern witnesses, in projection order.
    fn diagnose_missing_cases(
        &self,
        switch: &SwitchStmt,
        just_needs_default: bool,
        uncovered: Space,
    ) {
        if just_needs_default {
            let fix_it =
                self.settings.fix_its.then(|| format!("default: {CODE_PLACEHOLDER}\n"));

            if switch.cases.is_empty() {
                self.diagnostics.add_error(ExhaustivenessError::EmptySwitch {
                    location: switch.span,
                    fix_it,
                });
            } else {
                self.diagnostics.add_error(ExhaustivenessError::NonExhaustiveSwitch {
                    location: switch.span,
                    uncovered: vec![],
                    fix_it,
                });
            }
            return;
        }

        let members = match &uncovered {
            Space::Disjunct(members) => &members[..],
            uncovered => std::slice::from_ref(uncovered),
        };

        let mut witnesses = Vec::new();
        for member in members {
            let flats = member.flatten();
            if flats.is_empty() {
                witnesses.push(member.clone());
            } else {
                witnesses.extend(flats);
            }
        }

        // Nothing left to diagnose.
        if witnesses.is_empty() {
            return;
        }

        let fix_it = self.settings.fix_its.then(|| {
            witnesses
                .iter()
                .map(|witness| format!("case {witness}: {CODE_PLACEHOLDER}\n"))
                .collect::<String>()
        });

        self.diagnostics.add_error(ExhaustivenessError::NonExhaustiveSwitch {
            location: switch.span,
            uncovered: witnesses,
            fix_it,
        });
    }
}

#[cfg(test)]
mod tests {
    use quill_source::location::Span;
    use quill_tir::{
        control::{CaseItem, SwitchCase},
        env::TirEnv,
        pats::{Pat, PatKind},
    };

    use super::*;
    use crate::ExhaustivenessSettings;

    fn switch_over_bool(env: &mut TirEnv, items: Vec<CaseItem>) -> SwitchStmt {
        SwitchStmt {
            subject_ty: env.bool_ty(),
            span: Span::null(),
            cases: items
                .into_iter()
                .map(|item| SwitchCase { items: thin_vec![item] })
                .collect(),
        }
    }

    fn bool_pat(env: &mut TirEnv, value: bool) -> CaseItem {
        let ty = env.bool_ty();
        CaseItem::new(env.create_pat(Pat { kind: PatKind::Bool(value), ty, span: Span::null() }))
    }

    #[test]
    fn limited_mode_only_rejects_empty_statements() {
        let mut env = TirEnv::new();
        let empty = switch_over_bool(&mut env, vec![]);
        let item = bool_pat(&mut env, true);
        let nonempty = switch_over_bool(&mut env, vec![item]);

        let checker = ExhaustivenessChecker::new(Span::null(), &env);
        checker.check_switch_exhaustiveness(&nonempty, true);
        assert!(!checker.diagnostics.has_errors());

        checker.check_switch_exhaustiveness(&empty, true);
        assert!(checker.diagnostics.has_errors());
    }

    #[test]
    fn default_labels_make_any_statement_exhaustive() {
        let mut env = TirEnv::new();
        let ty = env.bool_ty();
        let wild = env.create_pat(Pat { kind: PatKind::Wild, ty, span: Span::null() });
        let switch = switch_over_bool(&mut env, vec![CaseItem::default_item(wild)]);

        let checker = ExhaustivenessChecker::new(Span::null(), &env);
        checker.check_switch_exhaustiveness(&switch, false);
        assert!(!checker.diagnostics.has_errors());
    }

    #[test]
    fn guarded_cases_contribute_no_coverage() {
        let mut env = TirEnv::new();
        let t = bool_pat(&mut env, true);
        let f = bool_pat(&mut env, false);
        let switch = switch_over_bool(&mut env, vec![t, CaseItem::guarded(f.pat)]);

        let checker = ExhaustivenessChecker::new(Span::null(), &env);
        checker.check_switch_exhaustiveness(&switch, false);
        assert!(checker.diagnostics.has_errors());
    }

    #[test]
    fn fix_its_assemble_one_case_per_witness() {
        let mut env = TirEnv::new();
        let item = bool_pat(&mut env, true);
        let switch = switch_over_bool(&mut env, vec![item]);

        let checker = ExhaustivenessChecker::new(Span::null(), &env)
            .with_settings(ExhaustivenessSettings { fix_its: true });
        checker.check_switch_exhaustiveness(&switch, false);

        let (errors, _) = checker.into_diagnostics().into_diagnostics();
        let ExhaustivenessError::NonExhaustiveSwitch { fix_it: Some(fix_it), .. } = &errors[0]
        else {
            panic!("expected a non-exhaustive diagnostic with a fix-it");
        };
        assert_eq!(fix_it, "case false: <#code#>\n");
    }
}
