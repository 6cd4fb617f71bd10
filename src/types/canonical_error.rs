//! The crate's generic domain error.
//!
//! [`CanonicalError`] is what this side raises when it has to signal a failure across the
//! RPC boundary, and it is the domain fallback the translator rebuilds when a remote type
//! name is unknown locally.
//!
//! # Examples
//!
//! ```
//! use remote_rail::CanonicalError;
//! use std::error::Error;
//!
//! let plain = CanonicalError::new("lease expired");
//! assert_eq!(plain.message(), "lease expired");
//! assert!(plain.source().is_none());
//!
//! let io = std::io::Error::other("disk unplugged");
//! let chained = CanonicalError::from_cause(io);
//! assert_eq!(chained.message(), "disk unplugged");
//! assert!(chained.source().is_some());
//! ```
use core::error::Error;
use core::fmt::{self, Display};

/// Boxed, thread-safe error used for chained causes throughout the crate.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Generic typed error carrying a message and an optional chained cause.
#[derive(Debug)]
pub struct CanonicalError {
    pub(crate) message: String,
    pub(crate) cause: Option<BoxError>,
}

impl CanonicalError {
    /// Name under which the canonical error is registered.
    pub const TYPE_NAME: &'static str = "remote_rail::CanonicalError";

    /// Creates a canonical error from a message, with no cause.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None }
    }

    /// Creates a canonical error that chains `cause`.
    ///
    /// The message is taken from the cause's `Display` output.
    #[inline]
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed_cause(Box::new(cause))
    }

    /// Same as [`from_cause`](Self::from_cause) for an already boxed cause.
    pub fn from_boxed_cause(cause: BoxError) -> Self {
        Self { message: cause.to_string(), cause: Some(cause) }
    }

    /// Replaces the message while keeping the cause.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The chained cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the error, returning its cause.
    #[inline]
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

impl Display for CanonicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CanonicalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
