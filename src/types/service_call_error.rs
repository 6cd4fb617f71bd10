//! Opaque failure produced by a transport when a remote call does not complete.
//!
//! # Examples
//!
//! ```
//! use remote_rail::{CallCause, RemoteError, ServiceCallError};
//!
//! // The transport gave up before anything came back from the server.
//! let refused = ServiceCallError::new("connection refused");
//! assert!(refused.cause().is_none());
//!
//! // The server answered with a serialized failure.
//! let remote = ServiceCallError::with_cause(
//!     "call failed",
//!     RemoteError::new("pkg.Conflict", "version mismatch"),
//! );
//! assert!(matches!(remote.cause(), Some(CallCause::Remote(_))));
//! ```
use core::error::Error;
use core::fmt::{self, Display};
use std::io;

use super::canonical_error::BoxError;
use super::remote_error::RemoteError;
use super::runtime_fault::RuntimeFault;

/// What a [`ServiceCallError`] wraps, when it wraps anything.
#[derive(Debug)]
pub enum CallCause {
    /// A failure deserialized from the remote peer.
    Remote(RemoteError),
    /// A local I/O failure raised by the client stack.
    Io(io::Error),
    /// A local runtime fault raised by the client stack.
    Runtime(RuntimeFault),
    /// Any other error. The translator never expects this shape.
    Other(BoxError),
}

impl CallCause {
    /// Wraps an arbitrary error, classifying it by its concrete type.
    ///
    /// A [`RemoteError`], [`io::Error`] or [`RuntimeFault`] lands in its own variant;
    /// everything else becomes [`CallCause::Other`].
    #[inline]
    pub fn other<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Classifies an already boxed error the same way as [`CallCause::other`].
    ///
    /// ```
    /// use remote_rail::{BoxError, CallCause};
    /// use std::io;
    ///
    /// let boxed: BoxError = Box::new(io::Error::from(io::ErrorKind::TimedOut));
    /// assert!(matches!(CallCause::from_boxed(boxed), CallCause::Io(_)));
    /// ```
    pub fn from_boxed(error: BoxError) -> Self {
        let error = match error.downcast::<RemoteError>() {
            Ok(re) => return Self::Remote(*re),
            Err(error) => error,
        };
        let error = match error.downcast::<io::Error>() {
            Ok(e) => return Self::Io(*e),
            Err(error) => error,
        };
        match error.downcast::<RuntimeFault>() {
            Ok(f) => Self::Runtime(*f),
            Err(error) => Self::Other(error),
        }
    }

    /// Re-classifies a [`CallCause::Other`] built directly from a box.
    #[inline]
    pub(crate) fn classified(self) -> Self {
        match self {
            Self::Other(error) => Self::from_boxed(error),
            cause => cause,
        }
    }

    /// Borrows the wrapped error as a trait object.
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Remote(re) => re,
            Self::Io(e) => e,
            Self::Runtime(f) => f,
            Self::Other(e) => &**e,
        }
    }
}

impl Display for CallCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_error(), f)
    }
}

impl From<RemoteError> for CallCause {
    #[inline]
    fn from(re: RemoteError) -> Self {
        Self::Remote(re)
    }
}

impl From<io::Error> for CallCause {
    #[inline]
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<RuntimeFault> for CallCause {
    #[inline]
    fn from(f: RuntimeFault) -> Self {
        Self::Runtime(f)
    }
}

/// Failure signaled by the call layer. A missing cause means the transport failed
/// before any remote error was deserialized.
#[derive(Debug)]
pub struct ServiceCallError {
    pub(crate) message: String,
    pub(crate) cause: Option<CallCause>,
}

impl ServiceCallError {
    /// A transport-level failure with no cause.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None }
    }

    #[inline]
    pub fn with_cause(message: impl Into<String>, cause: impl Into<CallCause>) -> Self {
        Self { message: message.into(), cause: Some(cause.into()) }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> Option<&CallCause> {
        self.cause.as_ref()
    }

    /// Consumes the error, returning `(message, cause)`.
    #[inline]
    pub fn into_parts(self) -> (String, Option<CallCause>) {
        (self.message, self.cause)
    }
}

impl Display for ServiceCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ServiceCallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(CallCause::as_error)
    }
}
