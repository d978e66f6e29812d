//! Constants for the password-based envelope

/// Random salt length in bytes
pub const ENVELOPE_SALT_SIZE: usize = 16;

/// Random IV length in bytes (one AES block)
pub const ENVELOPE_IV_SIZE: usize = 16;

/// Full HMAC-SHA256 tag length in bytes
pub const ENVELOPE_TAG_SIZE_FULL: usize = 32;

/// Truncated HMAC-SHA256 tag length in bytes
pub const ENVELOPE_TAG_SIZE_TRUNCATED: usize = 16;

/// Length of the PBKDF2 master secret in bytes
pub const ENVELOPE_MASTER_SECRET_SIZE: usize = 32;

/// Derived AES key length in bytes (AES-128)
pub const ENVELOPE_AES_KEY_SIZE: usize = 16;

/// Derived HMAC key length in bytes
pub const ENVELOPE_HMAC_KEY_SIZE: usize = 32;

/// Default number of PBKDF2 iterations
pub const ENVELOPE_DEFAULT_WORKLOAD: u32 = 100_000;

/// HKDF info label for the encryption key
pub const ENVELOPE_AES_KEY_INFO: &[u8] = b"aesvault envelope v1 aes-128-cbc key";

/// HKDF info label for the authentication key
pub const ENVELOPE_HMAC_KEY_INFO: &[u8] = b"aesvault envelope v1 hmac-sha256 key";
