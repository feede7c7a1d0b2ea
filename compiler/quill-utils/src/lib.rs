//! Quill compiler general utilities.

pub mod highlight;
pub mod printing;

// Re-export commonly used vector packages
pub use index_vec;
pub use itertools;
// Re-export logging utility
pub use log;
pub use smallvec;
pub use thin_vec;

/// Produce a plural suffix for a given count, used when building
/// diagnostic messages that mention a variable number of items.
#[macro_export]
macro_rules! pluralise {
    ($count:expr) => {
        if $count == 1 { "" } else { "s" }
    };
}
