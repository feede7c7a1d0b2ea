//! Process-level errors that can occur while emitting reports.
use std::io;

use thiserror::Error;

/// Errors that might occur when writing rendered [crate::report::Report]s to
/// an output stream.
#[derive(Debug, Error)]
pub enum ReportingError {
    /// Generic IO error.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}
