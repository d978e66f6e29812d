//! Galois-field lookup tables for AES
//!
//! Every table is evaluated by the compiler from the field arithmetic below and
//! embedded as immutable static data; nothing is computed or written at run time.

/// Round constants for key expansion, indexed from 1 (`RCON[0]` is unused)
pub(crate) const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000,
    0x10000000, 0x20000000, 0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Multiply by x in GF(2⁸) modulo x⁸ + x⁴ + x³ + x + 1
const fn xtime(b: u8) -> u8 {
    (b << 1) ^ (((b >> 7) & 1) * 0x1b)
}

/// Multiply two field elements
const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 == 1 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse as x²⁵⁴, with 0 mapping to 0
const fn gf_inv(x: u8) -> u8 {
    let mut result = 1u8;
    let mut square = x;
    let mut exponent = 254u8;
    while exponent != 0 {
        if exponent & 1 == 1 {
            result = gf_mul(result, square);
        }
        square = gf_mul(square, square);
        exponent >>= 1;
    }
    result
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        let i = gf_inv(x as u8);
        // affine map: inv(x) ⊕ ROTL¹..⁴(inv(x)) ⊕ 0x63
        table[x] = i
            ^ i.rotate_left(1)
            ^ i.rotate_left(2)
            ^ i.rotate_left(3)
            ^ i.rotate_left(4)
            ^ 0x63;
        x += 1;
    }
    table
}

const fn build_inv_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[sbox[x] as usize] = x as u8;
        x += 1;
    }
    table
}

const fn build_mul_table(factor: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[x] = gf_mul(x as u8, factor);
        x += 1;
    }
    table
}

const SBOX_TABLE: [u8; 256] = build_sbox();

/// Forward S-box
pub(crate) static SBOX: [u8; 256] = SBOX_TABLE;

/// Inverse S-box
pub(crate) static INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX_TABLE);

/// Multiplication tables for MixColumns
pub(crate) static MUL2: [u8; 256] = build_mul_table(2);
pub(crate) static MUL3: [u8; 256] = build_mul_table(3);

/// Multiplication tables for InvMixColumns
pub(crate) static MUL9: [u8; 256] = build_mul_table(9);
pub(crate) static MUL11: [u8; 256] = build_mul_table(11);
pub(crate) static MUL13: [u8; 256] = build_mul_table(13);
pub(crate) static MUL14: [u8; 256] = build_mul_table(14);
