//! Railway-oriented result handling: values travel on a success rail and
//! errors on a failure rail, and each pipeline step only runs while the
//! value is still on the success rail.
//!
//! The crate is organised in layers:
//!
//! - [`Outcome`] is the two-variant value every step returns.
//! - [`validation::Validation`] accumulates every problem with a value
//!   instead of stopping at the first.
//! - [`Pipeline`] and [`async_ext::AsyncPipeline`] chain validation, mapping,
//!   side-effects and recovery over an `Outcome`.
//! - [`effect::EffectExecutor`] runs side-effects at the edge, times and logs
//!   them, and turns faults into domain failures.
//! - [`async_ext::run_in_parallel`] runs independent tasks concurrently and
//!   reports all of their failures at once.
//!
//! # Examples
//!
//! ## Sync Pipeline
//!
//! ```
//! use rop_rail::{Outcome, Pipeline};
//!
//! let outcome = Pipeline::<i32, String>::start(4)
//!     .map(|n| n * 10)
//!     .filter(|n| *n < 100, "too large".to_string())
//!     .build();
//!
//! assert_eq!(outcome, Outcome::success(40));
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use rop_rail::validation::Validation;
//!
//! let combined = Validation::<u8, &str>::combine([
//!     Validation::invalid("email is empty"),
//!     Validation::valid(30),
//!     Validation::invalid("password is too short"),
//! ])
//! .unwrap();
//!
//! assert_eq!(combined.into_errors().unwrap().to_string(), "email is empty, password is too short");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Validation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for standard types
pub mod traits;
/// Outcome, Pipeline and their error types
pub mod types;
/// Validation type and message lookup
pub mod validation;

/// Async pipeline and parallel aggregation (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Effect boundary: executors, faults and structured logging (requires `async` feature)
#[cfg(feature = "async")]
pub mod effect;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use traits::ResultExt;
pub use types::{ErrorVec, Outcome, Pipeline, StateError, Variant};
pub use validation::{Messages, Validation};
