//! # aesvault
//!
//! A pure Rust AES implementation with five confidentiality modes and a
//! password-based authenticated envelope.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! aesvault = "0.3"
//! ```
//!
//! ## Features
//!
//! - `envelope` (default): password-based envelope (`encrypt` / `decrypt`)
//! - `serde`: `Serialize` / `Deserialize` for the envelope configuration
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `aesvault-api`: error type and validation helpers
//! - `aesvault-algorithms`: AES block cipher, PKCS#7 padding, CBC/PCBC/CFB/OFB/CTR
//! - `aesvault-symmetric`: PBKDF2 + HKDF key derivation, AES-CBC and HMAC-SHA256 envelope
//!
//! ## Example
//!
//! ```
//! let cipher = aesvault::new_cipher(&[0u8; 32])?;
//! let iv = [7u8; 16];
//! let ciphertext = cipher.encrypt_ctr(b"stream mode", &iv)?;
//! assert_eq!(ciphertext.len(), 11);
//!
//! # #[cfg(feature = "envelope")]
//! # {
//! let sealed = aesvault::encrypt(b"password", b"message", 1_000)?;
//! assert_eq!(aesvault::decrypt(b"password", &sealed, 1_000)?, b"message");
//! # }
//! # Ok::<(), aesvault::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use aesvault_algorithms as algorithms;
pub use aesvault_api as api;
pub use aesvault_internal as internal;
pub use aesvault_params as params;

// Feature-gated re-exports
#[cfg(feature = "envelope")]
pub use aesvault_symmetric as symmetric;

pub use aesvault_algorithms::{new_cipher, Aes, AesVariant, BlockCipher, Mode};
pub use aesvault_api::{Error, Result};

#[cfg(feature = "envelope")]
pub use aesvault_symmetric::{decrypt, encrypt};

/// Common imports for aesvault users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Block cipher and modes
    pub use crate::algorithms::{
        generate_iv, new_cipher, Aes, AesVariant, BlockCipher, Cbc, Cfb, Ctr, Mode, Ofb, Pcbc,
    };

    #[cfg(feature = "envelope")]
    pub use crate::symmetric::{
        decrypt, decrypt_with_config, encrypt, encrypt_with_config, encrypt_with_rng,
        Envelope, EnvelopeConfig, TagSize,
    };
}
