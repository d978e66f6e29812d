//! AES block cipher and modes of operation
//!
//! This crate provides a table-driven AES implementation (FIPS 197) for
//! 128-, 192- and 256-bit keys, PKCS#7 padding, and five confidentiality modes
//! built on the block core: CBC, PCBC, CFB, OFB and CTR.
//!
//! Data flows in one direction only:
//!
//! ```text
//! Galois tables -> key schedule -> block core -> modes
//! ```
//!
//! A constructed [`Aes`] owns its round-key schedule, never mutates it, and can
//! be shared by reference across threads. Every mode borrows the cipher and
//! threads its chaining value through a fold, so no call observes another
//! call's state.
//!
//! # Example
//!
//! ```
//! use aesvault_algorithms::Aes;
//!
//! let cipher = Aes::new(&[0x2b; 16])?;
//! let iv = [0x01; 16];
//! let ciphertext = cipher.encrypt_cbc(b"my message", &iv)?;
//! assert_eq!(cipher.decrypt_cbc(&ciphertext, &iv)?, b"my message");
//! # Ok::<(), aesvault_algorithms::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error re-exports
pub use api::error::{validate, Error, Result, ResultExt};

// Block cipher, padding and modes
pub mod block;
pub use block::aes::{new_cipher, Aes, AesVariant};
pub use block::modes::{generate_iv, Cbc, Cfb, Ctr, Mode, Ofb, Pcbc};
pub use block::padding;
pub use block::{Block, BlockCipher, BLOCK_SIZE};
