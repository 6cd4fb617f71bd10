//! Error types that cross the RPC boundary.
//!
//! - [`ServiceCallError`] / [`CallCause`]: what the transport hands back after a failed call
//! - [`RemoteError`]: the deserialized server-side failure
//! - [`CanonicalError`]: the crate's generic domain error and domain fallback
//! - [`RuntimeFault`]: a local runtime fault
//! - [`Reconstructed`] / [`Unwrapped`]: what the translator produces
//!
//! # Examples
//!
//! ```
//! use remote_rail::{ErrorFamily, RemoteError, RemoteTranslator, ServiceCallError};
//!
//! let se = ServiceCallError::with_cause("call failed", RemoteError::new("pkg.Missing", "gone"));
//! let err = RemoteTranslator::new().translate(se);
//!
//! assert_eq!(err.family(), ErrorFamily::Domain);
//! assert_eq!(err.message(), "gone");
//! ```
pub mod canonical_error;
pub mod error_family;
pub mod reconstructed;
pub mod remote_error;
pub mod runtime_fault;
pub mod service_call_error;
pub mod unwrapped;

pub use canonical_error::{BoxError, CanonicalError};
pub use error_family::ErrorFamily;
pub use reconstructed::Reconstructed;
pub use remote_error::RemoteError;
pub use runtime_fault::RuntimeFault;
pub use service_call_error::{CallCause, ServiceCallError};
pub use unwrapped::Unwrapped;
