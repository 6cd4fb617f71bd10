//! The exception-translation boundary.
//!
//! [`RemoteTranslator`] does two things:
//!
//! - **outgoing**: [`wrap`](RemoteTranslator::wrap) / [`wrap_message`](RemoteTranslator::wrap_message)
//!   build the [`CanonicalError`] this side raises across the boundary
//! - **incoming**: [`translate`](RemoteTranslator::translate) /
//!   [`raise`](RemoteTranslator::raise) turn a [`ServiceCallError`] into the most specific
//!   error that can be rebuilt locally
//!
//! Incoming translation degrades in a fixed order: the same type rebuilt locally, then the
//! registry's domain fallback, then the raw [`RemoteError`], then an I/O error wrapping the
//! whole [`ServiceCallError`]. The message and remote record are kept at every step.
//!
//! The free functions at the bottom of this module use a process-wide translator built
//! from [`TypeRegistry::with_defaults`].
//!
//! # Examples
//!
//! ```
//! use remote_rail::{remote_error_type, RemoteError, RemoteTranslator, ServiceCallError, TypeRegistry};
//!
//! remote_error_type! {
//!     pub struct KnownDomainError: Domain = "pkg.KnownDomainError";
//! }
//!
//! let translator = RemoteTranslator::with_registry(
//!     TypeRegistry::with_defaults().register::<KnownDomainError>(),
//! );
//!
//! let se = ServiceCallError::with_cause("call failed", RemoteError::new("pkg.KnownDomainError", "bad state"));
//! let err = translator.translate(se);
//!
//! let known = err.downcast_ref::<KnownDomainError>().unwrap();
//! assert_eq!(known.message(), "bad state");
//! assert_eq!(err.remote().unwrap().type_name(), "pkg.KnownDomainError");
//! ```
use core::error::Error;
use std::io;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::registry::{ConstructError, TypeEntry, TypeRegistry};
use crate::types::{
    BoxError, CallCause, CanonicalError, ErrorFamily, Reconstructed, RemoteError, ServiceCallError,
    Unwrapped,
};

/// Stateless translator between transport failures and local error types.
///
/// Immutable after construction and `Send + Sync`; share it by reference or behind an
/// `Arc`.
#[derive(Debug, Clone, Default)]
pub struct RemoteTranslator {
    registry: TypeRegistry,
}

impl RemoteTranslator {
    /// Creates a translator over [`TypeRegistry::with_defaults`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Wraps an unexpected local failure as a [`CanonicalError`] chaining `cause`.
    #[inline]
    pub fn wrap<E>(&self, cause: E) -> CanonicalError
    where
        E: Error + Send + Sync + 'static,
    {
        CanonicalError::from_cause(cause)
    }

    /// Builds a [`CanonicalError`] from a plain message.
    #[inline]
    pub fn wrap_message(&self, message: impl Into<String>) -> CanonicalError {
        CanonicalError::new(message)
    }

    /// Translates a failed call into exactly one error.
    pub fn translate(&self, mut se: ServiceCallError) -> Unwrapped {
        match se.cause.take().map(CallCause::classified) {
            None => {
                debug!(reason = %se.message, "transport failed before a remote error was received");
                Unwrapped::Transport(io::Error::other(se))
            },
            Some(CallCause::Remote(re)) => self.reconstruct(re),
            Some(CallCause::Io(e)) => Unwrapped::Io(e),
            Some(CallCause::Runtime(f)) => Unwrapped::Runtime(f),
            Some(cause @ CallCause::Other(_)) => {
                se.cause = Some(cause);
                warn!(reason = %se.message, "unexpected cause shape in service call error");
                Unwrapped::Transport(io::Error::other(se))
            },
        }
    }

    /// Translates a failed call and returns it as the error of a `Result`.
    ///
    /// Always returns `Err`; the type parameter lets callers write
    /// `return translator.raise(se);` from any fallible function.
    ///
    /// ```
    /// use remote_rail::{RemoteTranslator, ServiceCallError, Unwrapped};
    ///
    /// fn fetch(translator: &RemoteTranslator) -> Result<String, Unwrapped> {
    ///     translator.raise(ServiceCallError::new("connection reset"))
    /// }
    ///
    /// assert!(fetch(&RemoteTranslator::new()).unwrap_err().is_io());
    /// ```
    #[inline]
    pub fn raise<T>(&self, se: ServiceCallError) -> Result<T, Unwrapped> {
        Err(self.translate(se))
    }

    fn reconstruct(&self, re: RemoteError) -> Unwrapped {
        let (entry, required) = match self.registry.resolve(re.type_name()) {
            Some(entry) if entry.family().is_reconstructible() => (entry, None),
            Some(entry) => {
                debug!(
                    remote_type = re.type_name(),
                    family = %entry.family(),
                    "remote type is not impersonated, passing it through"
                );
                return Unwrapped::Remote(re);
            },
            None => {
                debug!(
                    remote_type = re.type_name(),
                    fallback = self.registry.fallback().name(),
                    "remote type unknown locally, using domain fallback"
                );
                (self.registry.fallback(), Some(ErrorFamily::Domain))
            },
        };

        match instantiate(entry, required, re.message()) {
            Ok(error) => {
                debug!(remote_type = re.type_name(), local_type = entry.name(), "rebuilt remote error");
                Unwrapped::Reconstructed(Reconstructed::new(
                    entry.name.clone(),
                    entry.family(),
                    error,
                    re,
                ))
            },
            Err(reason) => {
                warn!(
                    remote_type = re.type_name(),
                    local_type = entry.name(),
                    %reason,
                    "could not rebuild remote error, passing it through"
                );
                Unwrapped::Remote(re)
            },
        }
    }
}

fn instantiate(
    entry: &TypeEntry,
    required: Option<ErrorFamily>,
    message: &str,
) -> Result<BoxError, ConstructError> {
    if let Some(expected) = required {
        if entry.family() != expected {
            return Err(ConstructError::FamilyMismatch { expected, found: entry.family() });
        }
    }
    entry.construct(message)
}

/// The process-wide translator, built from [`TypeRegistry::with_defaults`] on first use.
pub fn default_translator() -> &'static RemoteTranslator {
    static DEFAULT: OnceLock<RemoteTranslator> = OnceLock::new();
    DEFAULT.get_or_init(RemoteTranslator::new)
}

/// Wraps `cause` in a [`CanonicalError`].
///
/// ```
/// use remote_rail::wrap;
/// use std::error::Error;
///
/// let err = wrap(std::io::Error::other("disk full"));
/// assert_eq!(err.message(), "disk full");
/// assert!(err.source().unwrap().downcast_ref::<std::io::Error>().is_some());
/// ```
#[inline]
pub fn wrap<E>(cause: E) -> CanonicalError
where
    E: Error + Send + Sync + 'static,
{
    default_translator().wrap(cause)
}

/// Builds a [`CanonicalError`] from a message.
#[inline]
pub fn wrap_message(message: impl Into<String>) -> CanonicalError {
    default_translator().wrap_message(message)
}

/// Translates `se` with the default translator.
#[inline]
pub fn translate(se: ServiceCallError) -> Unwrapped {
    default_translator().translate(se)
}

/// Translates `se` with the default translator and returns it as `Err`.
///
/// ```
/// use remote_rail::{unwrap_and_raise, RemoteError, ServiceCallError, Unwrapped};
///
/// let se = ServiceCallError::with_cause("failed", RemoteError::new("pkg.NewerThanThisClient", "m"));
/// let err = unwrap_and_raise::<()>(se).unwrap_err();
/// assert!(matches!(err, Unwrapped::Reconstructed(_)));
/// assert_eq!(err.message(), "m");
/// ```
#[inline]
pub fn unwrap_and_raise<T>(se: ServiceCallError) -> Result<T, Unwrapped> {
    default_translator().raise(se)
}
