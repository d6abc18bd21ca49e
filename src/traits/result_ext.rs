//! Extension trait for moving `Result` values onto the rail.
//!
//! # Examples
//!
//! ```
//! use rop_rail::traits::ResultExt;
//!
//! let age = "30".parse::<u8>()
//!     .into_pipeline()
//!     .map_failure(|e| e.to_string())
//!     .filter(|age| *age >= 18, "age must be at least 18".to_string())
//!     .build();
//!
//! assert_eq!(age.into_value(), Ok(30));
//! ```

use crate::types::{Outcome, Pipeline};

/// Extension methods for `Result<T, E>`.
pub trait ResultExt<T, E> {
    /// Converts into the equivalent [`Outcome`].
    fn into_outcome(self) -> Outcome<T, E>;

    /// Starts a [`Pipeline`] from this result.
    fn into_pipeline(self) -> Pipeline<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    #[inline]
    fn into_pipeline(self) -> Pipeline<T, E> {
        Pipeline::from_outcome(self.into_outcome())
    }
}
