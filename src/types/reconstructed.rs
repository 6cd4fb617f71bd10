//! A remote failure rebuilt as a local error type.
use core::error::Error;
use core::fmt::{self, Display};
use std::borrow::Cow;

use super::canonical_error::BoxError;
use super::error_family::ErrorFamily;
use super::remote_error::RemoteError;

/// Error instance rebuilt from a [`RemoteError`].
///
/// Holds the locally constructed error together with the remote record it was built from.
/// [`source`](Error::source) always returns that record, so the original type name and
/// message stay reachable even when the concrete type differs (the domain fallback case).
///
/// # Examples
///
/// ```
/// use remote_rail::{CanonicalError, RemoteError, RemoteTranslator, ServiceCallError, Unwrapped};
///
/// let se = ServiceCallError::with_cause("call failed", RemoteError::new("pkg.Unknown", "m"));
/// let Unwrapped::Reconstructed(rebuilt) = RemoteTranslator::new().translate(se) else {
///     panic!("expected a reconstructed error");
/// };
///
/// assert!(rebuilt.is::<CanonicalError>());
/// assert_eq!(rebuilt.message(), "m");
/// assert_eq!(rebuilt.remote().type_name(), "pkg.Unknown");
/// ```
#[derive(Debug)]
pub struct Reconstructed {
    pub(crate) type_name: Cow<'static, str>,
    pub(crate) family: ErrorFamily,
    pub(crate) message: String,
    pub(crate) error: BoxError,
    pub(crate) cause: RemoteError,
}

impl Reconstructed {
    pub(crate) fn new(
        type_name: Cow<'static, str>,
        family: ErrorFamily,
        error: BoxError,
        cause: RemoteError,
    ) -> Self {
        Self { type_name, family, message: cause.message.clone(), error, cause }
    }

    /// Registered name of the type that was actually constructed.
    ///
    /// Differs from `remote().type_name()` when the domain fallback was used.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn family(&self) -> ErrorFamily {
        self.family
    }

    /// Message passed to the constructor; always the remote message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The remote record this error was rebuilt from.
    #[inline]
    pub fn remote(&self) -> &RemoteError {
        &self.cause
    }

    /// The constructed error.
    #[inline]
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Returns `true` if the constructed error is a `T`.
    #[inline]
    pub fn is<T: Error + 'static>(&self) -> bool {
        self.error.is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        self.error.downcast_ref::<T>()
    }

    /// Takes the constructed error out as a `T`, together with its remote cause.
    ///
    /// Returns `self` unchanged if the constructed error is not a `T`.
    pub fn downcast<T: Error + 'static>(self) -> Result<(T, RemoteError), Self> {
        let Self { type_name, family, message, error, cause } = self;
        match error.downcast::<T>() {
            Ok(concrete) => Ok((*concrete, cause)),
            Err(error) => Err(Self { type_name, family, message, error, cause }),
        }
    }

    /// Drops the constructed error and returns the remote record.
    #[inline]
    pub fn into_remote(self) -> RemoteError {
        self.cause
    }
}

impl Display for Reconstructed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl Error for Reconstructed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}
