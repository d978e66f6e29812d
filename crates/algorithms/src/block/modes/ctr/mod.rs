//! Counter (CTR) mode
//!
//! The whole 16-byte IV is the initial counter block, read as a big-endian
//! 128-bit integer. Block `i` is XORed with the encryption of `IV + i`, and the
//! counter wraps modulo 2¹²⁸. Encryption and decryption are the same operation,
//! and the output is always exactly as long as the input.
//!
//! The caller must never reuse an IV whose counter range overlaps a previous
//! message under the same key.

use byteorder::{BigEndian, ByteOrder};

use super::{load_iv, xor_keystream};
use crate::block::{BlockCipher, BLOCK_SIZE};
use crate::{Error, Result};

/// CTR mode over a borrowed block cipher
pub struct Ctr<'a, B: BlockCipher> {
    cipher: &'a B,
    initial_counter: u128,
}

impl<'a, B: BlockCipher> Ctr<'a, B> {
    /// Creates a CTR instance
    ///
    /// Fails with `InvalidIvLength` unless `iv` is exactly one block.
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        let counter_block = load_iv("CTR IV", iv)?;
        Ok(Self {
            cipher,
            initial_counter: BigEndian::read_u128(&counter_block),
        })
    }

    /// Encrypts `plaintext`
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(plaintext)
    }

    /// Decrypts `ciphertext`
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(ciphertext)
    }

    fn apply_keystream(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len());

        input
            .chunks(BLOCK_SIZE)
            .try_fold(self.initial_counter, |counter, chunk| {
                let mut keystream = [0u8; BLOCK_SIZE];
                BigEndian::write_u128(&mut keystream, counter);
                self.cipher.encrypt_block(&mut keystream)?;
                xor_keystream(&mut output, chunk, &keystream);
                Ok::<_, Error>(counter.wrapping_add(1))
            })?;

        Ok(output)
    }
}
