//! Data structures representing a single diagnostic report and its
//! constituent elements.
use std::fmt;

use quill_source::location::Span;
use quill_utils::highlight::{highlight, Colour, Modifier};

use crate::error_codes::QuillErrorCode;

/// Enumeration describing the kind of [Report]: either a warning, an info
/// message or an error.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum ReportKind {
    /// The report is an error.
    Error,
    /// The report is an informational diagnostic, likely for internal
    /// purposes.
    Info,
    /// The report is a warning.
    Warning,
}

impl ReportKind {
    /// Get the [Colour] of the label associated with the [ReportKind].
    pub(crate) fn as_colour(&self) -> Colour {
        match self {
            ReportKind::Error => Colour::Red,
            ReportKind::Info => Colour::Blue,
            ReportKind::Warning => Colour::Yellow,
        }
    }

    /// Get the string label associated with the [ReportKind].
    pub(crate) fn message(&self) -> &'static str {
        match self {
            ReportKind::Error => "error",
            ReportKind::Info => "info",
            ReportKind::Warning => "warn",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", highlight(self.as_colour() | Modifier::Bold, self.message()))
    }
}

/// The kind of a [ReportNote], primarily used for rendering the label of the
/// note.
#[derive(Debug, Clone, Copy)]
pub enum ReportNoteKind {
    /// A help message or a suggestion.
    Help,
    /// Additional information about the diagnostic.
    Note,
}

impl fmt::Display for ReportNoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportNoteKind::Note => write!(f, "note"),
            ReportNoteKind::Help => write!(f, "{}", highlight(Colour::Cyan, "help")),
        }
    }
}

/// A note attached to a [Report], consisting of a label kind and the message.
#[derive(Debug, Clone)]
pub struct ReportNote {
    pub label: ReportNoteKind,
    pub message: String,
}

impl ReportNote {
    pub fn new(label: ReportNoteKind, message: impl ToString) -> Self {
        Self { label, message: message.to_string() }
    }
}

/// A labelled location within a source, pointing the reader of the [Report]
/// at the item the message is about.
#[derive(Debug, Clone)]
pub struct ReportLabel {
    pub span: Span,
    pub message: String,
}

impl ReportLabel {
    pub fn new(span: Span, message: impl ToString) -> Self {
        Self { span, message: message.to_string() }
    }
}

/// A component of a [Report]: either a labelled source location or a note.
#[derive(Debug, Clone)]
pub enum ReportElement {
    Label(ReportLabel),
    Note(ReportNote),
}

/// A single diagnostic report, made up of a [ReportKind], a title, an
/// optional error code and any number of [ReportElement]s adding context.
#[derive(Debug, Clone)]
pub struct Report {
    /// The general kind of the report.
    pub kind: ReportKind,
    /// The general message of the report.
    pub title: String,
    /// An optional associated error code.
    pub error_code: Option<QuillErrorCode>,
    /// Additional [ReportElement]s adding context to the report.
    pub contents: Vec<ReportElement>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    /// Create a new empty [Report] of [ReportKind::Error].
    pub fn new() -> Self {
        Self { kind: ReportKind::Error, title: String::new(), error_code: None, contents: vec![] }
    }

    /// Check if the report denotes an occurred error.
    pub fn is_error(&self) -> bool {
        self.kind == ReportKind::Error
    }

    /// Check if the report denotes an occurred warning.
    pub fn is_warning(&self) -> bool {
        self.kind == ReportKind::Warning
    }

    /// Set the [ReportKind] of the report.
    pub fn kind(&mut self, kind: ReportKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Set the title of the report.
    pub fn title(&mut self, title: impl ToString) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set the [QuillErrorCode] of the report.
    pub fn code(&mut self, code: QuillErrorCode) -> &mut Self {
        self.error_code = Some(code);
        self
    }

    /// Add a labelled [Span] to the report.
    pub fn add_labelled_span(&mut self, span: Span, message: impl ToString) -> &mut Self {
        self.contents.push(ReportElement::Label(ReportLabel::new(span, message)));
        self
    }

    /// Add a note with the given message to the report.
    pub fn add_note(&mut self, message: impl ToString) -> &mut Self {
        self.contents.push(ReportElement::Note(ReportNote::new(ReportNoteKind::Note, message)));
        self
    }

    /// Add a help note with the given message to the report.
    pub fn add_help(&mut self, message: impl ToString) -> &mut Self {
        self.contents.push(ReportElement::Note(ReportNote::new(ReportNoteKind::Help, message)));
        self
    }
}
