//! Extension traits for standard types.

pub mod result_ext;

pub use result_ext::ResultExt;
