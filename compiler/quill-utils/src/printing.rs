//! Utilities for printing sequences of items within human readable error
//! messages.
use std::fmt;

/// The [SequenceJoinMode] affects how the items of a [SequenceDisplay] are
/// phrased in relation to one another: whether any one of the items is
/// acceptable, or whether all of them are required.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SequenceJoinMode {
    /// Items within a [SequenceDisplay] are phrased as all being options.
    Either,
    /// Items within a [SequenceDisplay] are phrased as all being required.
    All,
}

impl SequenceJoinMode {
    pub fn as_conjunctive(&self) -> &str {
        match self {
            SequenceJoinMode::Either => "or",
            SequenceJoinMode::All => "and",
        }
    }
}

/// Options for a [SequenceDisplay], namely the [SequenceJoinMode] and an
/// optional limit on how many items are shown before the remainder is
/// elided into a count.
#[derive(Debug, Clone, Copy)]
pub struct SequenceDisplayOptions {
    pub mode: SequenceJoinMode,
    pub limit: Option<usize>,
}

impl SequenceDisplayOptions {
    pub fn new(mode: SequenceJoinMode) -> Self {
        Self { mode, limit: None }
    }

    /// Create options with a limit on the number of displayed items.
    pub fn with_limit(mode: SequenceJoinMode, limit: usize) -> Self {
        Self { mode, limit: Some(limit) }
    }
}

/// Displays a sequence of items in a human readable way, gluing the items
/// together with conjunctives, e.g. "`a`, `b`, and `c`". Used when
/// constructing re-usable error messages that mention several items at once.
pub struct SequenceDisplay<'a, T> {
    pub items: &'a [T],
    options: SequenceDisplayOptions,
}

impl<'a, T> SequenceDisplay<'a, T> {
    /// Create a new [SequenceDisplay].
    pub fn new(items: &'a [T], options: SequenceDisplayOptions) -> Self {
        Self { items, options }
    }

    /// Create a [SequenceDisplay] with the join mode as
    /// [SequenceJoinMode::Either].
    pub fn either(items: &'a [T]) -> Self {
        Self::new(items, SequenceDisplayOptions::new(SequenceJoinMode::Either))
    }

    /// Create a [SequenceDisplay] with the join mode as
    /// [SequenceJoinMode::All].
    pub fn all(items: &'a [T]) -> Self {
        Self::new(items, SequenceDisplayOptions::new(SequenceJoinMode::All))
    }
}

impl<T: fmt::Display> fmt::Display for SequenceDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = match self.options.limit {
            Some(limit) => self.items.len().min(limit),
            None => self.items.len(),
        };
        let elided = self.items.len() - shown;

        match self.items.len() {
            0 => Ok(()),
            1 if self.options.mode == SequenceJoinMode::Either => {
                write!(f, "a `{}`", self.items[0])
            }
            1 => write!(f, "`{}`", self.items[0]),
            _ => {
                if self.options.mode == SequenceJoinMode::Either {
                    write!(f, "either a ")?;
                }

                for (index, item) in self.items[..shown].iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    // The conjunctive precedes the final item only when
                    // nothing is elided.
                    if elided == 0 && index == shown - 1 {
                        write!(f, "{} ", self.options.mode.as_conjunctive())?;
                    }
                    write!(f, "`{item}`")?;
                }

                if elided > 0 {
                    write!(f, ", and {elided} more")?;
                }

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_are_joined_with_conjunctives() {
        let items = ["a", "b", "c"];
        assert_eq!(SequenceDisplay::all(&items).to_string(), "`a`, `b`, and `c`");
        assert_eq!(
            SequenceDisplay::either(&items).to_string(),
            "either a `a`, `b`, or `c`"
        );
    }

    #[test]
    fn singleton_sequences_have_no_conjunctive() {
        let items = ["x"];
        assert_eq!(SequenceDisplay::all(&items).to_string(), "`x`");
        assert_eq!(SequenceDisplay::either(&items).to_string(), "a `x`");
    }

    #[test]
    fn limited_sequences_elide_the_remainder() {
        let items = ["a", "b", "c", "d", "e"];
        let display = SequenceDisplay::new(
            &items,
            SequenceDisplayOptions::with_limit(SequenceJoinMode::All, 3),
        );
        assert_eq!(display.to_string(), "`a`, `b`, `c`, and 2 more");
    }
}
