//! Async prelude for remote-rail.
//!
//! Everything from [`crate::prelude`] plus the async extension trait.
//!
//! ```rust,no_run
//! use remote_rail::prelude_async::*;
//!
//! async fn call() -> Result<Vec<u8>, ServiceCallError> {
//!     Err(ServiceCallError::new("connection reset"))
//! }
//!
//! async fn fetch() -> Result<Vec<u8>, Unwrapped> {
//!     call().unwrap_remote().await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{FutureUnwrapExt, UnwrapFuture};

#[cfg(feature = "tower")]
pub use crate::tower::{ServiceUnwrapExt, UnwrapLayer, UnwrapService};
