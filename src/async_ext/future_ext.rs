//! Extension trait for `Future<Output = Result<T, ServiceCallError>>`.
//!
//! Mirrors the sync [`ServiceResultExt`](crate::ServiceResultExt) trait.

use core::future::Future;
use std::sync::Arc;

use crate::translator::RemoteTranslator;
use crate::types::ServiceCallError;

use super::unwrap_future::UnwrapFuture;

/// Extension trait translating the error of a pending RPC call.
///
/// # Examples
///
/// ```rust
/// use remote_rail::prelude_async::*;
///
/// async fn call() -> Result<u32, ServiceCallError> {
///     Err(ServiceCallError::new("connection refused"))
/// }
///
/// async fn fetch() -> Result<u32, Unwrapped> {
///     call().unwrap_remote().await
/// }
/// ```
pub trait FutureUnwrapExt<T>: Future<Output = Result<T, ServiceCallError>> + Sized {
    /// Translates a failure with the process-wide default translator.
    #[inline]
    fn unwrap_remote(self) -> UnwrapFuture<Self> {
        UnwrapFuture::new(self, None)
    }

    /// Translates a failure with `translator`.
    #[inline]
    fn unwrap_remote_with(self, translator: Arc<RemoteTranslator>) -> UnwrapFuture<Self> {
        UnwrapFuture::new(self, Some(translator))
    }
}

impl<F, T> FutureUnwrapExt<T> for F where F: Future<Output = Result<T, ServiceCallError>> {}
