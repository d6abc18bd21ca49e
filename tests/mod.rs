

#[cfg(feature = "async")]
pub mod effect;
