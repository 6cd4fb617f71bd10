//! Extension methods for results returned by a transport.
//!
//! # Examples
//!
//! ```
//! use remote_rail::{RemoteError, ServiceCallError, ServiceResultExt, Unwrapped};
//!
//! fn submit() -> Result<u64, ServiceCallError> {
//!     Err(ServiceCallError::with_cause("submit failed", RemoteError::new("pkg.Rejected", "queue closed")))
//! }
//!
//! let err = submit().unwrap_remote().unwrap_err();
//! assert!(matches!(err, Unwrapped::Reconstructed(_)));
//! assert_eq!(err.message(), "queue closed");
//! ```
use crate::translator::{default_translator, RemoteTranslator};
use crate::types::{ServiceCallError, Unwrapped};

/// Translates the error side of a `Result<T, ServiceCallError>`.
pub trait ServiceResultExt<T> {
    /// Translates a failure using the process-wide default translator.
    fn unwrap_remote(self) -> Result<T, Unwrapped>;

    /// Translates a failure using `translator`.
    fn unwrap_remote_with(self, translator: &RemoteTranslator) -> Result<T, Unwrapped>;
}

impl<T> ServiceResultExt<T> for Result<T, ServiceCallError> {
    #[inline]
    fn unwrap_remote(self) -> Result<T, Unwrapped> {
        self.unwrap_remote_with(default_translator())
    }

    #[inline]
    fn unwrap_remote_with(self, translator: &RemoteTranslator) -> Result<T, Unwrapped> {
        self.map_err(|se| translator.translate(se))
    }
}
