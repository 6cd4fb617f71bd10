//! Name-to-constructor table used to resolve remote type names.
//!
//! The registry replaces runtime reflection: every type the translator may rebuild is
//! registered up front as a [`TypeEntry`] holding its family and a plain `fn` pointer that
//! constructs it from a message. Names missing from the table resolve to nothing, and the
//! translator then uses the registry's domain fallback.
//!
//! # Examples
//!
//! ```
//! use remote_rail::{remote_error_type, ErrorFamily, TypeRegistry};
//!
//! remote_error_type! {
//!     pub struct QueueFull: Domain = "scheduler.QueueFull";
//! }
//!
//! let registry = TypeRegistry::with_defaults()
//!     .register::<QueueFull>()
//!     .register_foreign("java.lang.OutOfMemoryError");
//!
//! assert_eq!(registry.resolve("scheduler.QueueFull").map(|e| e.family()), Some(ErrorFamily::Domain));
//! assert_eq!(
//!     registry.resolve("java.lang.OutOfMemoryError").map(|e| e.family()),
//!     Some(ErrorFamily::Unrecognized)
//! );
//! assert!(registry.resolve("scheduler.Unknown").is_none());
//! ```
use std::borrow::Cow;
use std::collections::HashMap;
use std::io;

use crate::traits::RemoteErrorType;
use crate::types::{CanonicalError, RuntimeFault};

mod construct_error;
mod type_entry;

pub use construct_error::ConstructError;
pub use type_entry::{Constructor, TypeEntry};

/// Table of locally known remote error types.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: HashMap<Cow<'static, str>, TypeEntry>,
    fallback: TypeEntry,
}

impl TypeRegistry {
    /// Creates a registry that knows only [`CanonicalError`], which is also the fallback.
    pub fn new() -> Self {
        let fallback = TypeEntry::of::<CanonicalError>();
        let mut entries = HashMap::new();
        entries.insert(fallback.name.clone(), fallback.clone());
        Self { entries, fallback }
    }

    /// Creates a registry with the crate's built-in types: [`CanonicalError`],
    /// [`RuntimeFault`] and [`std::io::Error`].
    pub fn with_defaults() -> Self {
        Self::new().register::<RuntimeFault>().register::<io::Error>()
    }

    /// Registers `T` under [`RemoteErrorType::TYPE_NAME`], replacing any previous entry.
    #[inline]
    pub fn register<T: RemoteErrorType>(self) -> Self {
        self.register_entry(TypeEntry::of::<T>())
    }

    /// Registers a hand-built entry, replacing any previous entry with the same name.
    pub fn register_entry(mut self, entry: TypeEntry) -> Self {
        self.entries.insert(entry.name.clone(), entry);
        self
    }

    /// Registers a name the translator must never impersonate.
    ///
    /// The name resolves (so no domain fallback happens), but its family is
    /// [`ErrorFamily::Unrecognized`](crate::ErrorFamily::Unrecognized) and the raw remote record is passed through.
    #[inline]
    pub fn register_foreign(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.register_entry(TypeEntry::foreign(name))
    }

    /// Uses `T` as the domain fallback for unresolvable names, and registers it.
    ///
    /// The fallback is only constructed when its family is [`ErrorFamily::Domain`](crate::ErrorFamily::Domain); any other
    /// family makes unresolvable names pass through as the raw remote record.
    pub fn with_fallback<T: RemoteErrorType>(self) -> Self {
        let entry = TypeEntry::of::<T>();
        let mut registry = self.register_entry(entry.clone());
        registry.fallback = entry;
        registry
    }

    /// Looks up a remote type name.
    #[inline]
    pub fn resolve(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    /// Entry used when a name does not resolve.
    #[inline]
    pub fn fallback(&self) -> &TypeEntry {
        &self.fallback
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|name| &**name)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
