//! The boundary where pipelines meet the outside world.
//!
//! Side-effects (sending mail, writing a row) and fallible transforms are run
//! through an [`EffectExecutor`], which submits them to a [`TaskExecutor`],
//! converts any error or panic into a domain failure with a caller-supplied
//! mapper, and emits one structured record per call.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "async-tokio")]
//! # #[tokio::main]
//! # async fn main() {
//! use std::sync::{Arc, Mutex};
//! use rop_rail::async_ext::TokioExecutor;
//! use rop_rail::effect::{EffectExecutor, FnLogger, LogContext, Status};
//! use rop_rail::Outcome;
//!
//! let records = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&records);
//! let logger = FnLogger::new(move |_: &str, context: &LogContext| {
//!     sink.lock().unwrap().push(context.clone());
//! });
//!
//! let effects = EffectExecutor::new(TokioExecutor::current());
//! let parsed = effects
//!     .run_transform("42".to_string(), |s| s.parse::<u32>(), |f| f.to_string(), "parse", logger)
//!     .await;
//!
//! assert_eq!(parsed, Outcome::success(42));
//! assert_eq!(records.lock().unwrap()[0].status(), Some(Status::Success));
//! # }
//! # #[cfg(not(feature = "async-tokio"))]
//! # fn main() {}
//! ```

mod executor;
mod fault;
mod logger;
mod runner;

pub use executor::{InlineExecutor, TaskExecutor, TaskHandle};
pub use fault::{BoxError, Fault, FaultKind};
pub use logger::{keys, FnLogger, LogContext, LogValue, NoopLogger, Status, StructuredLogger};
pub use runner::{EffectExecutor, EffectFuture};
