//! Quill compiler source utilities: locations of items within sources, and
//! interned identifiers.

pub mod identifier;
pub mod location;

/// An id pointing to a source within the current workspace. The actual
/// mapping from ids to sources is maintained by the host driver; the
/// analyses only thread the id through [location::Span]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceId(pub u32);
