//! Allocation types resolved from `std` or `alloc`, so the rest of the crate
//! can use one set of paths in both builds.

#[cfg(feature = "std")]
pub use std::{borrow::Cow, boxed::Box, string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub use alloc::{borrow::Cow, boxed::Box, string::String, vec::Vec};
