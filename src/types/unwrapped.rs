//! The single error produced by translating a [`ServiceCallError`].
use core::error::Error;
use core::fmt::{self, Display};
use std::borrow::Cow;
use std::io;

use super::error_family::ErrorFamily;
use super::reconstructed::Reconstructed;
use super::remote_error::RemoteError;
use super::runtime_fault::RuntimeFault;
use super::service_call_error::ServiceCallError;

/// The most specific error the translator could produce for a failed call.
///
/// `Display` and [`source`](Error::source) are transparent: they forward to the wrapped
/// error, so `Unwrapped` can be propagated with `?` without changing what callers see.
#[derive(Debug)]
pub enum Unwrapped {
    /// The transport failed before any remote error was deserialized, or it reported a
    /// cause of an unexpected shape. The I/O error wraps the original [`ServiceCallError`].
    Transport(io::Error),
    /// A remote failure rebuilt as a local domain, I/O or runtime type.
    Reconstructed(Reconstructed),
    /// The call layer already reported a local I/O error; it is passed through untouched.
    Io(io::Error),
    /// The call layer already reported a local runtime fault; it is passed through untouched.
    Runtime(RuntimeFault),
    /// The remote record itself, when no typed reconstruction was possible or allowed.
    Remote(RemoteError),
}

impl Unwrapped {
    /// Family of the error that will reach the caller.
    ///
    /// A raw [`RemoteError`] reports [`ErrorFamily::Unrecognized`].
    pub fn family(&self) -> ErrorFamily {
        match self {
            Self::Transport(_) | Self::Io(_) => ErrorFamily::Io,
            Self::Reconstructed(r) => r.family(),
            Self::Runtime(_) => ErrorFamily::Runtime,
            Self::Remote(_) => ErrorFamily::Unrecognized,
        }
    }

    /// Returns `true` for anything a caller would treat as an I/O failure.
    #[inline]
    pub fn is_io(&self) -> bool {
        self.family() == ErrorFamily::Io
    }

    /// Message of the error that will reach the caller.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Transport(e) | Self::Io(e) => Cow::Owned(e.to_string()),
            Self::Reconstructed(r) => Cow::Borrowed(r.message()),
            Self::Runtime(f) => Cow::Borrowed(f.message()),
            Self::Remote(re) => Cow::Borrowed(re.message()),
        }
    }

    /// The remote record, for reconstructed errors and raw pass-through alike.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Reconstructed(r) => Some(r.remote()),
            Self::Remote(re) => Some(re),
            _ => None,
        }
    }

    /// The original [`ServiceCallError`] behind a [`Transport`](Self::Transport) failure.
    pub fn service_call_error(&self) -> Option<&ServiceCallError> {
        match self {
            Self::Transport(e) => e.get_ref()?.downcast_ref::<ServiceCallError>(),
            _ => None,
        }
    }

    /// Downcasts a reconstructed error to its concrete type.
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        match self {
            Self::Reconstructed(r) => r.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Renders this error and every `source()` below it, most specific first.
    ///
    /// ```
    /// use remote_rail::{RemoteError, RemoteTranslator, ServiceCallError};
    ///
    /// let se = ServiceCallError::with_cause("call failed", RemoteError::new("pkg.Gone", "no such job"));
    /// let err = RemoteTranslator::new().translate(se);
    /// assert_eq!(err.error_chain(), "no such job -> pkg.Gone: no such job");
    /// ```
    pub fn error_chain(&self) -> String {
        let mut chain = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            chain.push_str(" -> ");
            chain.push_str(&err.to_string());
            source = err.source();
        }
        chain
    }

    fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Transport(e) | Self::Io(e) => e,
            Self::Reconstructed(r) => r,
            Self::Runtime(f) => f,
            Self::Remote(re) => re,
        }
    }
}

impl Display for Unwrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_error(), f)
    }
}

impl Error for Unwrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.as_error().source()
    }
}

impl From<Unwrapped> for io::Error {
    /// I/O variants convert back into themselves; everything else becomes
    /// [`io::ErrorKind::Other`] carrying the translated error.
    fn from(err: Unwrapped) -> Self {
        match err {
            Unwrapped::Transport(e) | Unwrapped::Io(e) => e,
            other => io::Error::other(other),
        }
    }
}
