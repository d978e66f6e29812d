//! Output Feedback (OFB) mode
//!
//! The keystream is the forward cipher iterated on the IV and never depends on
//! the data, so encryption and decryption are the same operation. The output is
//! always exactly as long as the input.

use super::{load_iv, xor_keystream};
use crate::block::{Block, BlockCipher, BLOCK_SIZE};
use crate::{Error, Result};

/// OFB mode over a borrowed block cipher
pub struct Ofb<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
}

impl<'a, B: BlockCipher> Ofb<'a, B> {
    /// Creates an OFB instance
    ///
    /// Fails with `InvalidIvLength` unless `iv` is exactly one block.
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        Ok(Self {
            cipher,
            iv: load_iv("OFB IV", iv)?,
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
            .try_fold(self.iv, |previous, chunk| {
                let mut keystream = previous;
                self.cipher.encrypt_block(&mut keystream)?;
                xor_keystream(&mut output, chunk, &keystream);
                Ok::<_, Error>(keystream)
            })?;

        Ok(output)
    }
}
