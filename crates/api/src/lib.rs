//! Public error types for the aesvault library
//!
//! Every crate in the workspace reports failures through the single [`Error`]
//! enum defined here, so a caller only ever matches on one taxonomy no matter
//! which layer (block core, mode, envelope) rejected the input.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result, ResultExt};
