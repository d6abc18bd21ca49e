//! Core value types: the [`Outcome`] rail, the synchronous [`Pipeline`] built
//! on it, and the [`StateError`] raised when either union is read on the
//! wrong side.
//!
//! # Examples
//!
//! ```
//! use rop_rail::{Outcome, Pipeline};
//!
//! let outcome: Outcome<u32, String> = Pipeline::start(" 42 ")
//!     .map(str::trim)
//!     .flat_map(|s| Outcome::from(s.parse::<u32>().map_err(|e| e.to_string())))
//!     .build();
//!
//! assert_eq!(outcome, Outcome::success(42));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod outcome;
pub mod pipeline;
pub mod state_error;

pub use outcome::*;
pub use pipeline::Pipeline;
pub use state_error::*;

/// SmallVec-backed collection used for accumulating validation messages.
///
/// Uses inline storage for one element, which covers the common case of a
/// single failing check without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
