//! Block cipher primitives
//!
//! The [`BlockCipher`] trait is the seam between the AES core and the modes of
//! operation: modes are generic over it and never see round keys.

pub mod aes;
pub mod modes;
pub mod padding;

pub use aes::{Aes, AesVariant};
pub use modes::{Cbc, Cfb, Ctr, Mode, Ofb, Pcbc};

use crate::Result;

/// Block size shared by every cipher in this crate
pub const BLOCK_SIZE: usize = params::utils::symmetric::AES_BLOCK_SIZE;

/// One 128-bit block
pub type Block = [u8; BLOCK_SIZE];

/// A 128-bit block cipher keyed at construction
///
/// Implementations must be immutable after construction so a single instance
/// can serve concurrent callers through a shared reference.
pub trait BlockCipher {
    /// Human-readable algorithm name, e.g. `"AES-256"`
    fn name(&self) -> &'static str;

    /// Encrypts exactly one block in place
    ///
    /// Fails with `InvalidBlockLength` unless `block.len() == BLOCK_SIZE`.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts exactly one block in place
    ///
    /// Fails with `InvalidBlockLength` unless `block.len() == BLOCK_SIZE`.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
