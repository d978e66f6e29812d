//! Validation utilities run at every public boundary before any cryptographic work

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that a key length is one of the accepted sizes
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, accepted: &[usize]) -> Result<()> {
    if !accepted.contains(&actual) {
        return Err(Error::InvalidKeyLength { context, actual });
    }
    Ok(())
}

/// Validate an exact block length
#[inline(always)]
pub fn block_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidBlockLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an exact IV length
#[inline(always)]
pub fn iv_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that an envelope holds at least its fixed header
#[inline(always)]
pub fn min_length(actual: usize, minimum: usize) -> Result<()> {
    if actual < minimum {
        return Err(Error::TruncatedEnvelope { minimum, actual });
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn integrity(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::IntegrityError { context });
    }
    Ok(())
}
