//! Constants for the AES block cipher

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Every key size AES accepts
pub const AES_KEY_SIZES: [usize; 3] = [AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of 32-bit words in an AES-128 key (Nk)
pub const AES128_KEY_WORDS: usize = 4;

/// Number of 32-bit words in an AES-192 key (Nk)
pub const AES192_KEY_WORDS: usize = 6;

/// Number of 32-bit words in an AES-256 key (Nk)
pub const AES256_KEY_WORDS: usize = 8;

/// AES-128 round count (Nr)
pub const AES128_ROUNDS: usize = 10;

/// AES-192 round count (Nr)
pub const AES192_ROUNDS: usize = 12;

/// AES-256 round count (Nr)
pub const AES256_ROUNDS: usize = 14;

