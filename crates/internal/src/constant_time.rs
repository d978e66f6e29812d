//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Lengths are treated
/// as public: slices of different length return early.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Byte equality as a [`Choice`]
#[inline(always)]
pub fn ct_byte_eq(a: u8, b: u8) -> Choice {
    a.ct_eq(&b)
}

/// `a < b` on bytes as a [`Choice`]
#[inline(always)]
pub fn ct_byte_lt(a: u8, b: u8) -> Choice {
    a.ct_lt(&b)
}
