//! PKCS#7 padding
//!
//! [`pad`] always appends between 1 and 16 bytes, so a block-aligned message
//! gains a full block and removal is never ambiguous. [`unpad`] checks every
//! candidate padding byte with `subtle` predicates and folds the results into a
//! single [`Choice`](subtle::Choice); there is no early exit on the first bad
//! byte, and a failure is reported the same way whichever check failed.

use subtle::ConstantTimeEq;

use internal::{ct_byte_eq, ct_byte_lt};

use super::BLOCK_SIZE;
use crate::{Error, Result};

/// Number of bytes [`pad`] appends to a message of `len` bytes
#[inline]
pub const fn padding_len(len: usize) -> usize {
    BLOCK_SIZE - len % BLOCK_SIZE
}

/// Returns `data` followed by `b` copies of the byte `b`
///
/// The output length is the smallest multiple of 16 strictly greater than
/// `data.len()`.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad = padding_len(data.len());
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad, pad as u8);
    padded
}

/// Strips PKCS#7 padding, returning the message prefix
///
/// Fails with `InvalidPadding` if `data` is empty, not block-aligned, or its
/// trailing bytes are not a valid padding run.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidPadding { context: "PKCS#7" });
    }

    let last_block = &data[data.len() - BLOCK_SIZE..];
    let pad = last_block[BLOCK_SIZE - 1];

    // 1 <= pad <= 16
    let mut valid = !pad.ct_eq(&0) & ct_byte_lt(pad, BLOCK_SIZE as u8 + 1);

    // The final `pad` bytes must all equal `pad`; bytes before them are ignored
    for (offset, &byte) in last_block.iter().rev().enumerate() {
        let in_padding = ct_byte_lt(offset as u8, pad);
        valid &= !in_padding | ct_byte_eq(byte, pad);
    }

    if !bool::from(valid) {
        return Err(Error::InvalidPadding { context: "PKCS#7" });
    }

    Ok(&data[..data.len() - pad as usize])
}
