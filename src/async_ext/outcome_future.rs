//! Future adapter that moves a `Result`-returning future onto the rail.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::Outcome;

pin_project! {
    /// Resolves to the [`Outcome`] equivalent of the inner future's `Result`.
    ///
    /// Created by [`FutureResultExt::into_outcome`](super::FutureResultExt::into_outcome).
    ///
    /// # Cancel Safety
    ///
    /// `OutcomeFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> OutcomeFuture<Fut> {
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }
}

impl<Fut, T, E> Future for OutcomeFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Outcome<T, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Outcome::from)
    }
}

impl<Fut, T, E> FusedFuture for OutcomeFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}
