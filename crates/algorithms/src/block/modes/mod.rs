//! Block cipher modes of operation
//!
//! Five confidentiality modes over any [`BlockCipher`]: CBC and PCBC pad with
//! PKCS#7 and grow the message to the next block boundary, while CFB, OFB and
//! CTR run as stream modes and preserve the exact input length.
//!
//! Every mode value borrows the cipher and copies the IV. The chaining variable
//! is not stored on the mode: each `encrypt`/`decrypt` call threads it through
//! a fold over the block sequence, so one mode value can serve any number of
//! independent messages.

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ofb;
pub mod pcbc;

pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ofb::Ofb;
pub use pcbc::Pcbc;

use core::fmt;

use rand::{CryptoRng, RngCore};

use super::aes::Aes;
use super::padding::padding_len;
use super::{Block, BLOCK_SIZE};
use crate::{validate, Error, Result};

/// Mode of operation selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Cipher block chaining
    Cbc,
    /// Propagating cipher block chaining
    Pcbc,
    /// Full-block cipher feedback (CFB128)
    Cfb,
    /// Output feedback
    Ofb,
    /// Counter mode with a 128-bit big-endian counter
    Ctr,
}

impl Mode {
    /// Every supported mode
    pub const ALL: [Mode; 5] = [Self::Cbc, Self::Pcbc, Self::Cfb, Self::Ofb, Self::Ctr];

    /// Short upper-case name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cbc => "CBC",
            Self::Pcbc => "PCBC",
            Self::Cfb => "CFB",
            Self::Ofb => "OFB",
            Self::Ctr => "CTR",
        }
    }

    /// Whether the mode applies PKCS#7 padding
    pub const fn is_padded(self) -> bool {
        matches!(self, Self::Cbc | Self::Pcbc)
    }

    /// Ciphertext length produced for a plaintext of `plaintext_len` bytes
    pub const fn ciphertext_len(self, plaintext_len: usize) -> usize {
        if self.is_padded() {
            plaintext_len + padding_len(plaintext_len)
        } else {
            plaintext_len
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Draws a fresh 16-byte IV from `rng`
pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Block> {
    let mut iv = [0u8; BLOCK_SIZE];
    rng.try_fill_bytes(&mut iv)
        .map_err(|e| Error::RandomGenerationError {
            context: "IV",
            message: e.to_string(),
        })?;
    Ok(iv)
}

/// Copies a caller-supplied IV after checking its length
pub(crate) fn load_iv(context: &'static str, iv: &[u8]) -> Result<Block> {
    validate::iv_length(context, iv.len(), BLOCK_SIZE)?;
    Ok(to_block(iv))
}

/// Rejects a padded-mode ciphertext that is empty or not block-aligned
pub(crate) fn check_ciphertext_len(context: &'static str, len: usize) -> Result<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(Error::InvalidBlockLength {
            context,
            expected: (len / BLOCK_SIZE + 1) * BLOCK_SIZE,
            actual: len,
        });
    }
    Ok(())
}

/// Copies a slice of exactly `BLOCK_SIZE` bytes into a block
#[inline(always)]
pub(crate) fn to_block(bytes: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(bytes);
    block
}

#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut Block, src: &Block) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Appends `input XOR keystream`, truncating the keystream to `input.len()`
#[inline(always)]
pub(crate) fn xor_keystream(out: &mut Vec<u8>, input: &[u8], keystream: &Block) {
    out.extend(input.iter().zip(keystream).map(|(i, k)| i ^ k));
}

/// Single-call shortcuts for each mode under AES
impl Aes {
    /// CBC-encrypts `message` with PKCS#7 padding
    pub fn encrypt_cbc(&self, message: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Cbc::new(self, iv)?.encrypt(message)
    }

    /// Decrypts CBC ciphertext and strips its padding
    pub fn decrypt_cbc(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Cbc::new(self, iv)?.decrypt(ciphertext)
    }

    /// PCBC-encrypts `message` with PKCS#7 padding
    pub fn encrypt_pcbc(&self, message: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Pcbc::new(self, iv)?.encrypt(message)
    }

    /// Decrypts PCBC ciphertext and strips its padding
    pub fn decrypt_pcbc(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Pcbc::new(self, iv)?.decrypt(ciphertext)
    }

    /// CFB-encrypts `message`
    pub fn encrypt_cfb(&self, message: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Cfb::new(self, iv)?.encrypt(message)
    }

    /// CFB-decrypts `ciphertext`
    pub fn decrypt_cfb(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Cfb::new(self, iv)?.decrypt(ciphertext)
    }

    /// OFB-encrypts `message`
    pub fn encrypt_ofb(&self, message: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Ofb::new(self, iv)?.encrypt(message)
    }

    /// OFB-decrypts `ciphertext`
    pub fn decrypt_ofb(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Ofb::new(self, iv)?.decrypt(ciphertext)
    }

    /// CTR-encrypts `message`, using `iv` as the initial counter block
    pub fn encrypt_ctr(&self, message: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Ctr::new(self, iv)?.encrypt(message)
    }

    /// CTR-decrypts `ciphertext`
    pub fn decrypt_ctr(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Ctr::new(self, iv)?.decrypt(ciphertext)
    }

    /// Encrypts under a mode chosen at run time
    pub fn encrypt_with(&self, mode: Mode, message: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        match mode {
            Mode::Cbc => self.encrypt_cbc(message, iv),
            Mode::Pcbc => self.encrypt_pcbc(message, iv),
            Mode::Cfb => self.encrypt_cfb(message, iv),
            Mode::Ofb => self.encrypt_ofb(message, iv),
            Mode::Ctr => self.encrypt_ctr(message, iv),
        }
    }

    /// Decrypts under a mode chosen at run time
    pub fn decrypt_with(&self, mode: Mode, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        match mode {
            Mode::Cbc => self.decrypt_cbc(ciphertext, iv),
            Mode::Pcbc => self.decrypt_pcbc(ciphertext, iv),
            Mode::Cfb => self.decrypt_cfb(ciphertext, iv),
            Mode::Ofb => self.decrypt_ofb(ciphertext, iv),
            Mode::Ctr => self.decrypt_ctr(ciphertext, iv),
        }
    }
}
