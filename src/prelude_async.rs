//! Async prelude: everything in [`prelude`](crate::prelude) plus the async
//! pipeline, parallel aggregation and effect boundary.
//!
//! ```
//! # #[cfg(feature = "async-tokio")]
//! # #[tokio::main]
//! # async fn main() {
//! use rop_rail::prelude_async::*;
//!
//! let effects = EffectExecutor::new(TokioExecutor::current());
//! let outcome = AsyncPipeline::start::<_, String>(3_u32)
//!     .flat_map_async(|n| {
//!         effects.run_transform(n, |n| Ok::<_, &str>(n * 2), |f| f.to_string(), "double", NoopLogger)
//!     })
//!     .await;
//! assert_eq!(outcome, Outcome::success(6));
//! # }
//! # #[cfg(not(feature = "async-tokio"))]
//! # fn main() {}
//! ```

// Re-export everything from sync prelude
pub use crate::prelude::*;

pub use crate::async_ext::{
    erase, run_in_parallel, run_in_parallel_erased, AsyncPipeline, FutureOutcomeExt,
    FutureResultExt,
};
pub use crate::effect::{
    EffectExecutor, Fault, InlineExecutor, LogContext, NoopLogger, StructuredLogger, TaskExecutor,
};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::{spawn_in_parallel, TokioExecutor};

#[cfg(feature = "tracing")]
pub use crate::async_ext::{FutureOutcomeSpanExt, OutcomeSpanExt, TracingLogger};
