//! Declaring local error types as reconstructible from a remote name.
//!
//! A type implementing [`RemoteErrorType`] can be registered in a
//! [`TypeRegistry`](crate::TypeRegistry). When a [`RemoteError`](crate::RemoteError) names it,
//! the translator builds an instance from the remote message alone.
//!
//! The [`remote_error_type!`](crate::remote_error_type) macro covers the common case of a
//! message-only error struct.
//!
//! # Examples
//!
//! ```
//! use remote_rail::{ConstructError, ErrorFamily, RemoteErrorType};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct LeaseExpired {
//!     message: String,
//! }
//!
//! impl fmt::Display for LeaseExpired {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "lease expired: {}", self.message)
//!     }
//! }
//!
//! impl std::error::Error for LeaseExpired {}
//!
//! impl RemoteErrorType for LeaseExpired {
//!     const TYPE_NAME: &'static str = "scheduler.LeaseExpired";
//!     const FAMILY: ErrorFamily = ErrorFamily::Domain;
//!
//!     fn from_message(message: &str) -> Result<Self, ConstructError> {
//!         Ok(Self { message: message.to_owned() })
//!     }
//! }
//!
//! let err = LeaseExpired::from_message("worker-7").unwrap();
//! assert_eq!(err.to_string(), "lease expired: worker-7");
//! ```
use core::error::Error;
use std::io;

use crate::registry::ConstructError;
use crate::types::{CanonicalError, ErrorFamily, RuntimeFault};

/// A local error type that can be rebuilt from a remote message.
pub trait RemoteErrorType: Error + Send + Sync + Sized + 'static {
    /// Fully-qualified name the server uses for this type.
    const TYPE_NAME: &'static str;

    /// Family the type belongs to.
    const FAMILY: ErrorFamily;

    /// Builds an instance from the remote message.
    ///
    /// Returning an error makes the translator fall back to the raw remote record.
    fn from_message(message: &str) -> Result<Self, ConstructError>;
}

impl RemoteErrorType for CanonicalError {
    const TYPE_NAME: &'static str = CanonicalError::TYPE_NAME;
    const FAMILY: ErrorFamily = ErrorFamily::Domain;

    #[inline]
    fn from_message(message: &str) -> Result<Self, ConstructError> {
        Ok(Self::new(message))
    }
}

impl RemoteErrorType for RuntimeFault {
    const TYPE_NAME: &'static str = RuntimeFault::TYPE_NAME;
    const FAMILY: ErrorFamily = ErrorFamily::Runtime;

    #[inline]
    fn from_message(message: &str) -> Result<Self, ConstructError> {
        Ok(Self::new(message))
    }
}

/// Remote I/O failures come back as [`io::ErrorKind::Other`].
impl RemoteErrorType for io::Error {
    const TYPE_NAME: &'static str = "std::io::Error";
    const FAMILY: ErrorFamily = ErrorFamily::Io;

    #[inline]
    fn from_message(message: &str) -> Result<Self, ConstructError> {
        Ok(io::Error::other(message.to_owned()))
    }
}
