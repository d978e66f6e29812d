//! Internal utilities for the aesvault library
//!
//! Nothing here is part of the stable public surface; the helpers exist so the
//! algorithm and envelope crates share one audited set of constant-time
//! primitives.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;

pub use constant_time::{ct_byte_eq, ct_byte_lt, ct_eq};
