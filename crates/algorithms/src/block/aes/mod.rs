//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128-, 192- and 256-bit keys.
//!
//! A single [`Aes`] type covers all three key sizes. The [`AesVariant`] is
//! resolved once from the key length at construction and fixes the word count
//! `Nk`, the round count `Nr` and the schedule length `Nr + 1`; the round
//! loops never branch on key size beyond that.
//!
//! ## Side channels
//!
//! SubBytes and MixColumns use static lookup tables, which
//! keeps the core small and bit-exact but means memory access patterns depend
//! on the state. Hosts that need cache-timing resistance should prefer a
//! hardware AES implementation.

mod key_schedule;
mod tables;

use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_KEY_WORDS, AES128_ROUNDS, AES192_KEY_SIZE, AES192_KEY_WORDS,
    AES192_ROUNDS, AES256_KEY_SIZE, AES256_KEY_WORDS, AES256_ROUNDS, AES_KEY_SIZES,
};

use self::tables::{INV_SBOX, MUL11, MUL13, MUL14, MUL2, MUL3, MUL9, SBOX};
use super::{Block, BlockCipher, BLOCK_SIZE};
use crate::{validate, Result};

/// Transient 4×4 byte state; byte `4 * column + row`
type State = Block;

/// AES key size, resolved once from the key length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AesVariant {
    /// 128-bit key, 10 rounds
    Aes128,
    /// 192-bit key, 12 rounds
    Aes192,
    /// 256-bit key, 14 rounds
    Aes256,
}

impl AesVariant {
    /// Every variant, smallest key first
    pub const ALL: [AesVariant; 3] = [Self::Aes128, Self::Aes192, Self::Aes256];

    /// Selects the variant matching a key length
    ///
    /// Fails with `InvalidKeyLength` unless `len` is 16, 24 or 32.
    pub fn from_key_len(len: usize) -> Result<Self> {
        validate::key_length("AES key", len, &AES_KEY_SIZES)?;
        Ok(match len {
            AES128_KEY_SIZE => Self::Aes128,
            AES192_KEY_SIZE => Self::Aes192,
            _ => Self::Aes256,
        })
    }

    /// Key length in bytes
    pub const fn key_size(self) -> usize {
        match self {
            Self::Aes128 => AES128_KEY_SIZE,
            Self::Aes192 => AES192_KEY_SIZE,
            Self::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Key length in 32-bit words (`Nk`)
    pub const fn key_words(self) -> usize {
        match self {
            Self::Aes128 => AES128_KEY_WORDS,
            Self::Aes192 => AES192_KEY_WORDS,
            Self::Aes256 => AES256_KEY_WORDS,
        }
    }

    /// Number of rounds (`Nr`)
    pub const fn rounds(self) -> usize {
        match self {
            Self::Aes128 => AES128_ROUNDS,
            Self::Aes192 => AES192_ROUNDS,
            Self::Aes256 => AES256_ROUNDS,
        }
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes128 => "AES-128",
            Self::Aes192 => "AES-192",
            Self::Aes256 => "AES-256",
        }
    }
}

impl fmt::Display for AesVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// AES block cipher keyed with a 128-, 192- or 256-bit key
///
/// The round-key schedule is computed once in [`Aes::new`], never mutated, and
/// zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    #[zeroize(skip)]
    variant: AesVariant,
    round_keys: Vec<Block>,
}

/// Constructs an AES cipher from raw key bytes
///
/// Equivalent to [`Aes::new`].
pub fn new_cipher(key: &[u8]) -> Result<Aes> {
    Aes::new(key)
}

impl Aes {
    /// Expands `key` into a cipher instance
    ///
    /// Fails with `InvalidKeyLength` unless `key.len()` is 16, 24 or 32.
    pub fn new(key: &[u8]) -> Result<Self> {
        let variant = AesVariant::from_key_len(key.len())?;
        let round_keys = key_schedule::expand_key(key, variant);
        debug_assert_eq!(round_keys.len(), variant.rounds() + 1);
        Ok(Self { variant, round_keys })
    }

    /// Generates a random key for `variant`
    pub fn generate_key<R: RngCore + CryptoRng>(
        variant: AesVariant,
        rng: &mut R,
    ) -> Zeroizing<Vec<u8>> {
        let mut key = Zeroizing::new(vec![0u8; variant.key_size()]);
        rng.fill_bytes(&mut key);
        key
    }

    /// Key size this instance was built for
    pub fn variant(&self) -> AesVariant {
        self.variant
    }

    /// Number of rounds (`Nr`)
    pub fn rounds(&self) -> usize {
        self.variant.rounds()
    }

    /// Read-only view of the `Nr + 1` round keys
    pub fn round_keys(&self) -> &[Block] {
        &self.round_keys
    }

    /// Runs the forward cipher on a state
    fn encrypt_state(&self, state: &mut State) {
        let nr = self.rounds();

        add_round_key(state, &self.round_keys[0]);

        for round_key in &self.round_keys[1..nr] {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, round_key);
        }

        // Final round omits MixColumns
        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, &self.round_keys[nr]);
    }

    /// Runs the inverse cipher on a state
    fn decrypt_state(&self, state: &mut State) {
        let nr = self.rounds();

        add_round_key(state, &self.round_keys[nr]);

        for round_key in self.round_keys[1..nr].iter().rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, round_key);
            inv_mix_columns(state);
        }

        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, &self.round_keys[0]);
    }
}

impl BlockCipher for Aes {
    fn name(&self) -> &'static str {
        self.variant.name()
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("AES block", block.len(), BLOCK_SIZE)?;

        let mut state = Zeroizing::new([0u8; BLOCK_SIZE]);
        state.copy_from_slice(block);
        self.encrypt_state(&mut state);
        block.copy_from_slice(&state[..]);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("AES block", block.len(), BLOCK_SIZE)?;

        let mut state = Zeroizing::new([0u8; BLOCK_SIZE]);
        state.copy_from_slice(block);
        self.decrypt_state(&mut state);
        block.copy_from_slice(&state[..]);
        Ok(())
    }
}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("variant", &self.variant)
            .field("round_keys", &"[REDACTED]")
            .finish()
    }
}

/* ---------------------------------------------------------------------- */
/*                            Round transforms                            */
/* ---------------------------------------------------------------------- */

#[inline(always)]
fn add_round_key(state: &mut State, round_key: &Block) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

#[inline(always)]
fn sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

#[inline(always)]
fn inv_sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

/// Row `r` rotates left by `r`
#[inline(always)]
fn shift_rows(state: &mut State) {
    let old = *state;
    for column in 0..4 {
        for row in 1..4 {
            state[4 * column + row] = old[4 * ((column + row) % 4) + row];
        }
    }
}

/// Row `r` rotates right by `r`
#[inline(always)]
fn inv_shift_rows(state: &mut State) {
    let old = *state;
    for column in 0..4 {
        for row in 1..4 {
            state[4 * column + row] = old[4 * ((column + 4 - row) % 4) + row];
        }
    }
}

#[inline(always)]
fn mix_columns(state: &mut State) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = MUL2[s0 as usize] ^ MUL3[s1 as usize] ^ s2 ^ s3;
        column[1] = s0 ^ MUL2[s1 as usize] ^ MUL3[s2 as usize] ^ s3;
        column[2] = s0 ^ s1 ^ MUL2[s2 as usize] ^ MUL3[s3 as usize];
        column[3] = MUL3[s0 as usize] ^ s1 ^ s2 ^ MUL2[s3 as usize];
    }
}

#[inline(always)]
fn inv_mix_columns(state: &mut State) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [
            column[0] as usize,
            column[1] as usize,
            column[2] as usize,
            column[3] as usize,
        ];
        column[0] = MUL14[s0] ^ MUL11[s1] ^ MUL13[s2] ^ MUL9[s3];
        column[1] = MUL9[s0] ^ MUL14[s1] ^ MUL11[s2] ^ MUL13[s3];
        column[2] = MUL13[s0] ^ MUL9[s1] ^ MUL14[s2] ^ MUL11[s3];
        column[3] = MUL11[s0] ^ MUL13[s1] ^ MUL9[s2] ^ MUL14[s3];
    }
}
