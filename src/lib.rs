//! RemoteRail rebuilds the most specific local error type for a failed remote call.
//!
//! An RPC transport reports failure as an opaque [`ServiceCallError`]. When the server's
//! failure made it across the wire, its cause is a [`RemoteError`] carrying the original
//! type name and message. [`RemoteTranslator`] resolves that name in a [`TypeRegistry`] and
//! rebuilds the matching local type, degrading gracefully when it cannot:
//!
//! 1. the same type, rebuilt from the remote message
//! 2. the registry's domain fallback ([`CanonicalError`] by default) for unknown names
//! 3. the raw [`RemoteError`] when construction fails or the type must not be impersonated
//! 4. an I/O error wrapping the [`ServiceCallError`] when no remote error was received
//!
//! The original message and remote record survive every step.
//!
//! # Examples
//!
//! ## Rebuilding a known domain error
//!
//! ```
//! use remote_rail::{remote_error_type, RemoteError, RemoteTranslator, ServiceCallError, TypeRegistry};
//! use std::error::Error;
//!
//! remote_error_type! {
//!     pub struct ApplicationNotFound: Domain = "scheduler.ApplicationNotFoundException";
//! }
//!
//! let translator = RemoteTranslator::with_registry(
//!     TypeRegistry::with_defaults().register::<ApplicationNotFound>(),
//! );
//!
//! let se = ServiceCallError::with_cause(
//!     "getApplicationReport failed",
//!     RemoteError::new("scheduler.ApplicationNotFoundException", "app_17 is unknown"),
//! );
//! let err = translator.translate(se);
//!
//! assert!(err.downcast_ref::<ApplicationNotFound>().is_some());
//! assert_eq!(err.message(), "app_17 is unknown");
//! assert!(err.source().unwrap().downcast_ref::<RemoteError>().is_some());
//! ```
//!
//! ## Signaling a failure across the boundary
//!
//! ```
//! use remote_rail::{wrap, wrap_message};
//!
//! let plain = wrap_message("queue is draining");
//! let chained = wrap(std::io::Error::other("state store unavailable"));
//!
//! assert_eq!(plain.message(), "queue is draining");
//! assert!(chained.cause().is_some());
//! ```

/// Macros for declaring reconstructible error types
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Name-to-constructor registry for remote error types
pub mod registry;
/// Core traits for remote error translation
pub mod traits;
/// The translator and its process-wide helpers
pub mod translator;
/// Error types that cross the RPC boundary
pub mod types;

/// Async extensions for error translation (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use registry::{ConstructError, Constructor, TypeEntry, TypeRegistry};
pub use traits::{RemoteErrorType, ServiceResultExt};
pub use translator::{
    default_translator, translate, unwrap_and_raise, wrap, wrap_message, RemoteTranslator,
};
pub use types::{
    BoxError, CallCause, CanonicalError, ErrorFamily, Reconstructed, RemoteError, RuntimeFault,
    ServiceCallError, Unwrapped,
};
