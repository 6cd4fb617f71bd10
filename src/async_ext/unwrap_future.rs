//! Future wrapper translating a [`ServiceCallError`] once the call completes.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::Arc;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::translator::{default_translator, RemoteTranslator};
use crate::types::{ServiceCallError, Unwrapped};

pin_project! {
    /// A future that translates the inner future's [`ServiceCallError`] into [`Unwrapped`].
    ///
    /// Translation only happens when the inner future resolves to an error; the success
    /// path is untouched.
    ///
    /// # Cancel Safety
    ///
    /// `UnwrapFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct UnwrapFuture<F> {
        #[pin]
        inner: F,
        translator: Option<Arc<RemoteTranslator>>,
    }
}

impl<F> UnwrapFuture<F> {
    /// Wraps `inner`. `None` selects the process-wide default translator.
    #[inline]
    pub(crate) fn new(inner: F, translator: Option<Arc<RemoteTranslator>>) -> Self {
        Self { inner, translator }
    }
}

impl<F, T> Future for UnwrapFuture<F>
where
    F: Future<Output = Result<T, ServiceCallError>>,
{
    type Output = Result<T, Unwrapped>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let translator = match this.translator.as_deref() {
            Some(translator) => translator,
            None => default_translator(),
        };

        this.inner.poll(cx).map(|res| res.map_err(|se| translator.translate(se)))
    }
}

impl<F, T> FusedFuture for UnwrapFuture<F>
where
    F: FusedFuture<Output = Result<T, ServiceCallError>>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}
