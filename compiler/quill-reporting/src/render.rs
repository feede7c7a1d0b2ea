//! Rendering of [Report]s into human readable text. The renderer prints the
//! report kind and title, followed by any labelled spans and notes:
//!
//! ```text
//! error[E0002]: non-exhaustive `switch`: `.some(false)` not covered
//!  --> 0:10:42: pattern `.some(false)` not covered
//!   = help: consider adding the missing cases
//! ```
use std::{fmt, io::Write};

use quill_utils::highlight::{highlight, Colour, Modifier};

use crate::{
    errors::ReportingError,
    report::{Report, ReportElement},
};

/// Wrapper around a [Report] implementing [fmt::Display].
pub struct ReportWriter<'a> {
    report: &'a Report,
}

impl<'a> ReportWriter<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }
}

impl fmt::Display for ReportWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The header of the report: `error[E0002]: <title>`
        match self.report.error_code {
            Some(code) => writeln!(
                f,
                "{}{}: {}",
                self.report.kind,
                highlight(self.report.kind.as_colour() | Modifier::Bold, format!("[{code}]")),
                highlight(Modifier::Bold, &self.report.title)
            )?,
            None => writeln!(
                f,
                "{}: {}",
                self.report.kind,
                highlight(Modifier::Bold, &self.report.title)
            )?,
        }

        for element in &self.report.contents {
            match element {
                ReportElement::Label(label) => {
                    writeln!(
                        f,
                        " {} {}: {}",
                        highlight(Colour::Blue, "-->"),
                        label.span,
                        label.message
                    )?;
                }
                ReportElement::Note(note) => {
                    writeln!(f, "  {} {}: {}", highlight(Colour::Blue, "="), note.label, note.message)?;
                }
            }
        }

        Ok(())
    }
}

/// Render the given reports to the provided output stream.
pub fn write_reports(reports: &[Report], out: &mut impl Write) -> Result<(), ReportingError> {
    for report in reports {
        writeln!(out, "{}", ReportWriter::new(report))?;
    }

    Ok(())
}
