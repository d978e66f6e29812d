//! Password-based authenticated envelope for the aesvault library
//!
//! This crate composes the primitives of `aesvault-algorithms` into a single
//! self-describing byte string:
//!
//! ```text
//! salt (16) ‖ IV (16) ‖ HMAC-SHA256 tag (32, or 16 truncated) ‖ AES-128-CBC ciphertext
//! ```
//!
//! Keys are derived from the password and salt with PBKDF2-HMAC-SHA256 and split
//! into independent encryption and authentication keys with HKDF. The tag
//! covers the IV and ciphertext and is verified in constant time before any
//! decryption takes place.
//!
//! # Example
//!
//! ```
//! use aesvault_symmetric::envelope;
//!
//! let sealed = envelope::encrypt(b"hunter2", b"attack at dawn", 1_000)?;
//! let opened = envelope::decrypt(b"hunter2", &sealed, 1_000)?;
//! assert_eq!(opened, b"attack at dawn");
//! # Ok::<(), aesvault_symmetric::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod envelope;

pub use envelope::{
    decrypt, decrypt_with_config, derive_keys, encrypt, encrypt_with_config, encrypt_with_rng,
    DerivedKeys, Envelope, EnvelopeConfig, TagSize,
};

// Re-export the API error system
pub use api::error::{validate, Error, Result, ResultExt};
