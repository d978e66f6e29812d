//! Constant values for aesvault cryptographic operations
//!
//! Kept in a dependency-free crate so that every layer agrees on the same
//! sizes without pulling in any implementation code.

#![no_std]

pub mod utils;
