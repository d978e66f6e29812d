//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for aesvault operations
///
/// All variants are local validation failures: nothing in the library performs
/// I/O, so no variant is retryable.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key length is not one of 16, 24 or 32 bytes
    #[error("{context}: invalid key length {actual} (expected 16, 24 or 32)")]
    InvalidKeyLength {
        /// Where the key was rejected
        context: &'static str,
        /// Supplied key length in bytes
        actual: usize,
    },

    /// Block length differs from the cipher block size
    #[error("{context}: invalid block length (expected {expected}, got {actual})")]
    InvalidBlockLength {
        /// Where the block was rejected
        context: &'static str,
        /// Required block length
        expected: usize,
        /// Supplied block length
        actual: usize,
    },

    /// Initialization vector length differs from the cipher block size
    #[error("{context}: invalid IV length (expected {expected}, got {actual})")]
    InvalidIvLength {
        /// Where the IV was rejected
        context: &'static str,
        /// Required IV length
        expected: usize,
        /// Supplied IV length
        actual: usize,
    },

    /// PKCS#7 padding is malformed
    #[error("{context}: invalid padding")]
    InvalidPadding {
        /// Where the padding was rejected
        context: &'static str,
    },

    /// Envelope is shorter than its fixed-size header
    #[error("truncated envelope (need at least {minimum} bytes, got {actual})")]
    TruncatedEnvelope {
        /// Length of the salt, IV and tag prefix
        minimum: usize,
        /// Supplied envelope length
        actual: usize,
    },

    /// Authentication tag did not verify
    #[error("{context}: integrity check failed")]
    IntegrityError {
        /// Where the tag was rejected
        context: &'static str,
    },

    /// A parameter is outside its permitted range
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        context: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// The injected random source failed
    #[error("random generation error: {context}: {message}")]
    RandomGenerationError {
        /// What was being generated
        context: &'static str,
        /// Message reported by the generator
        message: String,
    },
}

/// Result type for aesvault operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the static context of an error, keeping its kind and payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyLength { actual, .. } => Self::InvalidKeyLength { context, actual },
            Self::InvalidBlockLength { expected, actual, .. } => Self::InvalidBlockLength {
                context,
                expected,
                actual,
            },
            Self::InvalidIvLength { expected, actual, .. } => Self::InvalidIvLength {
                context,
                expected,
                actual,
            },
            Self::InvalidPadding { .. } => Self::InvalidPadding { context },
            Self::TruncatedEnvelope { minimum, actual } => {
                Self::TruncatedEnvelope { minimum, actual }
            }
            Self::IntegrityError { .. } => Self::IntegrityError { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// True for the errors a decryptor must report as one opaque rejection.
    ///
    /// Padding and tag failures both mean "this ciphertext was not produced
    /// under this key"; callers should not expose which one occurred.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::IntegrityError { .. } | Self::InvalidPadding { .. })
    }
}
