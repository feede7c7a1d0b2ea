//! Quill compiler source location utilities and definitions.
use std::fmt;

use derive_more::Constructor;

use crate::SourceId;

/// [ByteRange] represents a location of a range of bytes within a source.
/// The range is inclusive of both its start and its end.
#[derive(Debug, Eq, Hash, Clone, Copy, PartialEq)]
pub struct ByteRange(u32, u32);

impl ByteRange {
    /// Create a [ByteRange] by providing a start and end byte position.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(end >= start, "invalid range, start={start} end={end}");
        ByteRange(start as u32, end as u32)
    }

    /// Join a [ByteRange] with another [ByteRange] that ends after it. If the
    /// other range does not end after this one, `self` is returned.
    #[must_use]
    pub fn join(&self, other: Self) -> Self {
        if self.end() <= other.start() {
            return ByteRange::new(self.start(), other.end());
        }

        *self
    }

    /// Get the start of the [ByteRange].
    pub fn start(&self) -> usize {
        self.0 as usize
    }

    /// Get the end of the [ByteRange].
    pub fn end(&self) -> usize {
        self.1 as usize
    }

    /// Compute the size of the [ByteRange].
    pub fn len(&self) -> usize {
        (self.end() + 1) - self.start()
    }

    /// Check if the [ByteRange] is empty.
    pub fn is_empty(&self) -> bool {
        self.start() == self.end()
    }
}

impl Default for ByteRange {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}

/// A [Span] describes the location of something relative to a source within
/// the workspace, an associated [ByteRange] and the id of the source it
/// refers to.
#[derive(Debug, Clone, Copy, Constructor, PartialEq, Eq, Hash)]
pub struct Span {
    /// The associated [ByteRange] with the [Span].
    pub range: ByteRange,

    /// The id of the source that the span is referencing.
    pub id: SourceId,
}

impl Span {
    /// Create a null-[Span], setting the range to be `0:0` and pointing at
    /// the default source.
    pub fn null() -> Self {
        Self::new(ByteRange::default(), SourceId::default())
    }

    /// Join the span of a [Span] with another [Span].
    ///
    /// *Note*: the `id` of both [Span]s must be the same.
    pub fn join(self, other: Self) -> Self {
        debug_assert!(self.id == other.id);

        Self { id: self.id, range: self.range.join(other.range) }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.id.0, self.range)
    }
}
