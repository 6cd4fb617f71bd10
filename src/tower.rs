//! Tower integration for remote-rail.
//!
//! This module provides a Tower `Layer` and `Service` that translate the
//! [`ServiceCallError`]s of a client-side service into [`Unwrapped`] errors.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! remote-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use remote_rail::tower::UnwrapLayer;
//! use tower::ServiceBuilder;
//!
//! let client = ServiceBuilder::new()
//!     .layer(UnwrapLayer::new())
//!     .service(rpc_channel);
//! ```

use core::task::{Context, Poll};
use std::sync::Arc;

use tower::{Layer, Service};

use crate::async_ext::UnwrapFuture;
use crate::translator::{default_translator, RemoteTranslator};
use crate::types::{ServiceCallError, Unwrapped};

/// A Tower [`Layer`] that translates service errors with a [`RemoteTranslator`].
///
/// # Example
///
/// ```rust,ignore
/// use remote_rail::tower::UnwrapLayer;
/// use remote_rail::{RemoteTranslator, TypeRegistry};
/// use std::sync::Arc;
///
/// // Process-wide default translator
/// let layer = UnwrapLayer::new();
///
/// // Or a translator that knows the application's error types
/// let registry = TypeRegistry::with_defaults().register::<ApplicationNotFound>();
/// let layer = UnwrapLayer::with_translator(Arc::new(RemoteTranslator::with_registry(registry)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnwrapLayer {
    translator: Option<Arc<RemoteTranslator>>,
}

impl UnwrapLayer {
    /// Creates a layer using the process-wide default translator.
    #[inline]
    pub const fn new() -> Self {
        Self { translator: None }
    }

    #[inline]
    pub fn with_translator(translator: Arc<RemoteTranslator>) -> Self {
        Self { translator: Some(translator) }
    }
}

impl<S> Layer<S> for UnwrapLayer {
    type Service = UnwrapService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        UnwrapService { inner, translator: self.translator.clone() }
    }
}

/// A Tower [`Service`] whose errors are translated into [`Unwrapped`].
///
/// Created by [`UnwrapLayer`] or [`ServiceUnwrapExt::unwrap_remote_errors`].
#[derive(Clone, Debug)]
pub struct UnwrapService<S> {
    inner: S,
    translator: Option<Arc<RemoteTranslator>>,
}

impl<S> UnwrapService<S> {
    /// Wraps `inner`, using the process-wide default translator.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner, translator: None }
    }

    #[inline]
    pub fn with_translator(inner: S, translator: Arc<RemoteTranslator>) -> Self {
        Self { inner, translator: Some(translator) }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// The translator in use.
    #[inline]
    pub fn translator(&self) -> &RemoteTranslator {
        match self.translator.as_deref() {
            Some(translator) => translator,
            None => default_translator(),
        }
    }
}

impl<S, Request> Service<Request> for UnwrapService<S>
where
    S: Service<Request, Error = ServiceCallError>,
{
    type Response = S::Response;
    type Error = Unwrapped;
    type Future = UnwrapFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let translator = match self.translator.as_deref() {
            Some(translator) => translator,
            None => default_translator(),
        };
        self.inner.poll_ready(cx).map_err(|se| translator.translate(se))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        UnwrapFuture::new(self.inner.call(request), self.translator.clone())
    }
}

/// Extension trait for wrapping RPC services with error translation.
pub trait ServiceUnwrapExt<Request>: Service<Request, Error = ServiceCallError> + Sized {
    /// Wraps this service so its errors come out translated.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use remote_rail::tower::ServiceUnwrapExt;
    ///
    /// let client = rpc_channel.unwrap_remote_errors();
    /// ```
    #[inline]
    fn unwrap_remote_errors(self) -> UnwrapService<Self> {
        UnwrapService::new(self)
    }
}

impl<S, Request> ServiceUnwrapExt<Request> for S where S: Service<Request, Error = ServiceCallError> {}
