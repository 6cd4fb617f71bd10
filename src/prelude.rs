//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use remote_rail::prelude::*;
//!
//! fn call() -> Result<(), ServiceCallError> {
//!     Err(ServiceCallError::with_cause("call failed", RemoteError::new("pkg.Busy", "try later")))
//! }
//!
//! let err = call().unwrap_remote().unwrap_err();
//! assert_eq!(err.family(), ErrorFamily::Domain);
//! ```

// Macros
pub use crate::remote_error_type;

// Core types
pub use crate::registry::TypeRegistry;
pub use crate::translator::RemoteTranslator;
pub use crate::types::{
    CallCause, CanonicalError, ErrorFamily, RemoteError, RuntimeFault, ServiceCallError, Unwrapped,
};

// Traits
pub use crate::traits::{RemoteErrorType, ServiceResultExt};
