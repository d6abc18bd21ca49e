//! Validation types and utilities for accumulating errors.
//!
//! This module provides the [`Validation`] type, which collects every message
//! from a set of independent checks instead of stopping at the first one, and
//! the [`MessageProvider`] seam field validators use to look their messages up.
//!
//! # Key Components
//!
//! - [`Validation`] - a valid value or a non-empty list of [`Messages`]
//! - [`Validation::combine`] - fail-slow accumulation over many checks
//! - [`StaticMessages`] - a small in-memory message bundle
//!
//! # Examples
//!
//! ```
//! use rop_rail::validation::Validation;
//!
//! fn min_len(value: &str, min: usize, message: &str) -> Validation<()> {
//!     if value.len() < min {
//!         Validation::invalid(message.to_string())
//!     } else {
//!         Validation::valid(())
//!     }
//! }
//!
//! let checked = Validation::combine([
//!     min_len("Jo", 3, "name is too short"),
//!     min_len("123", 8, "password is too short"),
//! ])
//! .unwrap();
//!
//! assert_eq!(checked.iter_messages().count(), 2);
//! ```
pub mod bundle;
pub mod core;
pub mod iter;
pub mod messages;

pub use self::bundle::*;
pub use self::core::*;
pub use self::messages::*;
