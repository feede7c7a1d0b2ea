//! All diagnostics that are emitted by the exhaustiveness checker.
use quill_reporting::{
    diagnostic::{DiagnosticCellStore, Reportable},
    error_codes::QuillErrorCode,
    reporter::Reporter,
};
use quill_source::{identifier::Identifier, location::Span};
use quill_utils::{
    itertools::Itertools,
    pluralise,
    printing::{SequenceDisplay, SequenceDisplayOptions, SequenceJoinMode},
};

use crate::space::Space;

pub type ExhaustivenessDiagnostics =
    DiagnosticCellStore<ExhaustivenessError, ExhaustivenessWarning>;

/// Errors that can be emitted during exhaustiveness checking.
#[derive(Debug, Clone)]
pub enum ExhaustivenessError {
    /// A `switch` statement with no cases at all.
    EmptySwitch {
        /// The location of the statement.
        location: Span,

        /// A paste-able suggestion inserting a `default` label, when fix-its
        /// are enabled.
        fix_it: Option<String>,
    },

    /// A `switch` statement that does not cover its subject type.
    NonExhaustiveSwitch {
        /// The location of the statement.
        location: Span,

        /// The flattened missing-pattern witnesses, in projection order.
        /// Empty when the subject type cannot be enumerated, in which case
        /// the only suggestion is a `default` label.
        uncovered: Vec<Space>,

        /// A paste-able suggestion block with one `case` per witness (or a
        /// `default` label), when fix-its are enabled.
        fix_it: Option<String>,
    },
}

impl Reportable for ExhaustivenessError {
    fn add_to_reports(&self, reporter: &mut Reporter) {
        match self {
            ExhaustivenessError::EmptySwitch { location, fix_it } => {
                let report = reporter
                    .error()
                    .code(QuillErrorCode::EmptySwitch)
                    .title("`switch` statement must have at least one case")
                    .add_labelled_span(*location, "empty `switch` statement");

                match fix_it {
                    Some(fix_it) => report.add_help(format!("insert:\n{fix_it}")),
                    None => report.add_help("add a `default` case"),
                };
            }
            ExhaustivenessError::NonExhaustiveSwitch { location, uncovered, fix_it }
                if uncovered.is_empty() =>
            {
                let report = reporter
                    .error()
                    .code(QuillErrorCode::NonExhaustiveSwitch)
                    .title("`switch` must be exhaustive")
                    .add_labelled_span(
                        *location,
                        "the values of the subject type cannot be enumerated",
                    );

                match fix_it {
                    Some(fix_it) => report.add_help(format!("insert:\n{fix_it}")),
                    None => report.add_help("add a `default` case"),
                };
            }
            ExhaustivenessError::NonExhaustiveSwitch { location, uncovered, fix_it } => {
                let rendered =
                    uncovered.iter().map(|witness| witness.to_string()).collect_vec();
                let pats = SequenceDisplay::new(
                    &rendered,
                    SequenceDisplayOptions::with_limit(SequenceJoinMode::All, 3),
                );

                let report = reporter
                    .error()
                    .code(QuillErrorCode::NonExhaustiveSwitch)
                    .title(format!("non-exhaustive `switch`: {pats} not covered"))
                    .add_labelled_span(
                        *location,
                        format!("pattern{} {pats} not covered", pluralise!(rendered.len())),
                    );

                match fix_it {
                    Some(fix_it) => {
                        report.add_help(format!("add the missing cases:\n{fix_it}"));
                    }
                    None => {
                        for witness in &rendered {
                            report.add_note(format!("missing case `{witness}`"));
                        }
                    }
                }
            }
        }
    }
}

/// Warnings that can be emitted by the exhaustiveness checker.
#[derive(Debug, Clone)]
pub enum ExhaustivenessWarning {
    /// An enumeration variant whose declared payload type failed to
    /// resolve. The analysis treats the variant as impossible to match and
    /// proceeds, possibly under-reporting missing cases.
    MalformedVariant {
        /// The name of the enumeration the variant belongs to.
        adt: Identifier,

        /// The name of the malformed variant.
        variant: Identifier,

        /// The location of the `switch` subject being checked.
        location: Span,
    },
}

impl Reportable for ExhaustivenessWarning {
    fn add_to_reports(&self, reporter: &mut Reporter) {
        match self {
            ExhaustivenessWarning::MalformedVariant { adt, variant, location } => {
                reporter
                    .warning()
                    .title(format!("variant `{adt}.{variant}` is missing type information"))
                    .add_labelled_span(*location, "while checking this `switch` subject")
                    .add_note("the variant is treated as impossible to match");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_reporting::render::ReportWriter;

    use super::*;

    #[test]
    fn witnesses_are_listed_in_the_report() {
        let error = ExhaustivenessError::NonExhaustiveSwitch {
            location: Span::null(),
            uncovered: vec![Space::Bool(false)],
            fix_it: None,
        };

        let mut reporter = Reporter::new();
        error.add_to_reports(&mut reporter);
        let reports = reporter.into_reports();

        assert_eq!(reports.len(), 1);
        let rendered = ReportWriter::new(&reports[0]).to_string();
        assert!(rendered.contains("`false` not covered"));
        assert!(rendered.contains("missing case `false`"));
    }

    #[test]
    fn needs_default_reports_suggest_a_default_case() {
        let error = ExhaustivenessError::NonExhaustiveSwitch {
            location: Span::null(),
            uncovered: vec![],
            fix_it: None,
        };

        let mut reporter = Reporter::new();
        error.add_to_reports(&mut reporter);
        let rendered = ReportWriter::new(&reporter.into_reports()[0]).to_string();

        assert!(rendered.contains("must be exhaustive"));
        assert!(rendered.contains("add a `default` case"));
    }

    #[test]
    fn long_witness_lists_are_elided_in_the_title() {
        let witnesses = vec![
            Space::Bool(true),
            Space::Bool(false),
            Space::Bool(true),
            Space::Bool(false),
            Space::Bool(true),
        ];
        let error = ExhaustivenessError::NonExhaustiveSwitch {
            location: Span::null(),
            uncovered: witnesses,
            fix_it: None,
        };

        let mut reporter = Reporter::new();
        error.add_to_reports(&mut reporter);
        let rendered = ReportWriter::new(&reporter.into_reports()[0]).to_string();

        assert!(rendered.contains("and 2 more"));
    }
}
