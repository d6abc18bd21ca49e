//! Extension traits that bring plain futures into an [`AsyncPipeline`].

use core::future::Future;

use crate::types::Outcome;

use super::outcome_future::OutcomeFuture;
use super::pipeline::AsyncPipeline;

/// Extension trait for futures that already resolve to an [`Outcome`].
///
/// # Examples
///
/// ```
/// use rop_rail::prelude_async::*;
///
/// async fn load(id: u32) -> Outcome<String, String> {
///     Outcome::success(format!("user-{id}"))
/// }
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let name = load(7).into_pipeline().map(|user| user.len()).await;
/// assert_eq!(name, Outcome::success(6));
/// # });
/// ```
pub trait FutureOutcomeExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Starts an [`AsyncPipeline`] from this future.
    #[inline]
    fn into_pipeline(self) -> AsyncPipeline<Self> {
        AsyncPipeline::from_future(self)
    }
}

impl<Fut, T, E> FutureOutcomeExt<T, E> for Fut where Fut: Future<Output = Outcome<T, E>> {}

/// Extension trait for futures that resolve to a `Result`.
///
/// # Examples
///
/// ```
/// use rop_rail::prelude_async::*;
///
/// async fn parse(raw: &str) -> Result<u8, std::num::ParseIntError> {
///     raw.parse()
/// }
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let age = parse("30")
///     .into_outcome()
///     .into_pipeline()
///     .map_failure(|e| e.to_string())
///     .filter(|age| *age >= 18, "underage".to_string())
///     .await;
/// assert_eq!(age, Outcome::success(30));
/// # });
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Resolves to an [`Outcome`] instead of a `Result`.
    #[inline]
    fn into_outcome(self) -> OutcomeFuture<Self> {
        OutcomeFuture::new(self)
    }
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}
