//! Async pipelines, parallel aggregation and runtime integrations.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (on by default). [`TokioExecutor`] and
//! [`spawn_in_parallel`] additionally need `async-tokio`, and
//! [`TracingLogger`] with the span extensions need `tracing`:
//!
//! ```toml
//! [dependencies]
//! rop-rail = { version = "0.3", features = ["ecosystem"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use rop_rail::prelude_async::*;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let outcome = AsyncPipeline::start::<_, String>(" Ana ")
//!     .map(|name| name.trim().to_string())
//!     .filter(|name| name.len() >= 3, "name is too short".to_string())
//!     .await;
//! assert_eq!(outcome, Outcome::success("Ana".to_string()));
//! # });
//! ```

mod future_ext;
mod outcome_future;
mod parallel;
mod pipeline;

#[cfg(feature = "async-tokio")]
mod tokio_ext;
#[cfg(feature = "tracing")]
mod tracing_ext;

pub use future_ext::{FutureOutcomeExt, FutureResultExt};
pub use outcome_future::OutcomeFuture;
pub use parallel::{
    erase, run_in_parallel, run_in_parallel_erased, AnyValue, BoxFuture, ErasedTask,
};
pub use pipeline::AsyncPipeline;

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{spawn_in_parallel, TokioExecutor};
#[cfg(feature = "tracing")]
pub use tracing_ext::{FutureOutcomeSpanExt, OutcomeSpanExt, OutcomeSpanFuture, TracingLogger};
