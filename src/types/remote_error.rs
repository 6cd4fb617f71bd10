//! Deserialized record of a failure raised on a remote peer.
//!
//! # Examples
//!
//! ```
//! use remote_rail::RemoteError;
//!
//! let re = RemoteError::new("pkg.QuotaExceeded", "queue is full");
//! assert_eq!(re.type_name(), "pkg.QuotaExceeded");
//! assert_eq!(re.message(), "queue is full");
//! assert_eq!(re.to_string(), "pkg.QuotaExceeded: queue is full");
//! ```
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A server-side failure as seen by the client: the fully-qualified name of the
/// original error type and its message.
///
/// `RemoteError` is a complete error in its own right. When nothing more specific can be
/// rebuilt, the translator hands it back unchanged so the original name and message
/// always reach the caller.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteError {
    pub(crate) type_name: String,
    pub(crate) message: String,
}

impl RemoteError {
    /// Creates a remote error record.
    #[inline]
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), message: message.into() }
    }

    /// Name of the error type that was raised on the server.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Message the server attached to the error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the record, returning `(type_name, message)`.
    #[inline]
    pub fn into_parts(self) -> (String, String) {
        (self.type_name, self.message)
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            return f.write_str(&self.type_name);
        }
        write!(f, "{}: {}", self.type_name, self.message)
    }
}

impl core::error::Error for RemoteError {}
