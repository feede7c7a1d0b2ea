//! Quill identifier storage utilities and wrappers. Identifiers are interned
//! in a global map so that they are cheap to copy and compare during
//! analysis.
use std::{
    fmt::{Debug, Display},
    sync::atomic::{AtomicU32, Ordering},
};

use dashmap::DashMap;
use fnv::FnvBuildHasher;
use lazy_static::lazy_static;

/// An interned identifier. Equality and hashing are on the interned index
/// rather than the underlying string.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Identifier(u32);

impl Identifier {
    /// Get the string that the [Identifier] points to.
    pub fn as_str(&self) -> &'static str {
        IDENTIFIER_MAP.get_ident(*self)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Identifier").field(&self.as_str()).field(&self.0).finish()
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        IDENTIFIER_MAP.create_ident(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        IDENTIFIER_MAP.create_ident(name.as_str())
    }
}

impl From<Identifier> for &str {
    fn from(ident: Identifier) -> Self {
        IDENTIFIER_MAP.get_ident(ident)
    }
}

impl From<Identifier> for String {
    fn from(ident: Identifier) -> Self {
        IDENTIFIER_MAP.get_ident(ident).to_owned()
    }
}

lazy_static! {
    pub static ref IDENTIFIER_MAP: IdentifierMap = IdentifierMap::new();
}

/// A globally accessible identifier map. The struct contains an identifier
/// map and another map for reverse lookups.
#[derive(Debug, Default)]
pub struct IdentifierMap {
    counter: AtomicU32,
    reverse_identifiers: DashMap<&'static str, Identifier, FnvBuildHasher>,
    identifiers: DashMap<Identifier, &'static str, FnvBuildHasher>,
}

impl IdentifierMap {
    /// Create a new identifier map instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an identifier in the identifier map.
    pub fn create_ident(&self, ident_str: &str) -> Identifier {
        if let Some(ident) = self.reverse_identifiers.get(ident_str) {
            return *ident;
        }

        // The string contents need to live for as long as the map itself,
        // which is the lifetime of the process.
        let ident_str_alloc: &'static str = Box::leak(ident_str.to_owned().into_boxed_str());
        *self.reverse_identifiers.entry(ident_str_alloc).or_insert_with(|| {
            let ident = Identifier(self.counter.fetch_add(1, Ordering::SeqCst));
            self.identifiers.insert(ident, ident_str_alloc);
            ident
        })
    }

    /// Lookup the string value of an [Identifier] in the identifier map.
    pub fn get_ident(&self, ident: Identifier) -> &'static str {
        *self.identifiers.get(&ident).unwrap().value()
    }
}
