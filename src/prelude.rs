//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rop_rail::prelude::*;
//!
//! let outcome = Pipeline::<&str, String>::start("ana@example.com")
//!     .validate(
//!         |email| {
//!             validate_all!(
//!                 if email.is_empty() { Validation::invalid("email is empty".to_string()) } else { Validation::valid(email) },
//!                 if email.contains('@') { Validation::valid(email) } else { Validation::invalid("email is invalid".to_string()) },
//!             )
//!         },
//!         |message| message,
//!     )
//!     .map(str::len)
//!     .build();
//!
//! assert_eq!(outcome, Outcome::success(15));
//! ```

// Macros
pub use crate::validate_all;

// Core types
pub use crate::types::{Outcome, Pipeline, StateError};
pub use crate::validation::{MessageProvider, Messages, StaticMessages, Validation};

// Traits
pub use crate::traits::ResultExt;
