//! Cipher Feedback (CFB) mode
//!
//! Full-block CFB (CFB128 in NIST SP 800-38A): the keystream for each block is
//! the forward cipher applied to the previous ciphertext block, starting from
//! the IV. Only the forward direction of the block cipher is used. A trailing
//! partial block consumes a truncated keystream block, so the output is always
//! exactly as long as the input.

use super::{load_iv, to_block, xor_keystream};
use crate::block::{Block, BlockCipher, BLOCK_SIZE};
use crate::{Error, Result};

/// CFB mode over a borrowed block cipher
pub struct Cfb<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
}

impl<'a, B: BlockCipher> Cfb<'a, B> {
    /// Creates a CFB instance
    ///
    /// Fails with `InvalidIvLength` unless `iv` is exactly one block.
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        Ok(Self {
            cipher,
            iv: load_iv("CFB IV", iv)?,
        })
    }

    /// Encrypts `plaintext`
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = Vec::with_capacity(plaintext.len());

        plaintext
            .chunks(BLOCK_SIZE)
            .try_fold(self.iv, |feedback, chunk| {
                let keystream = self.keystream(feedback)?;
                let start = ciphertext.len();
                xor_keystream(&mut ciphertext, chunk, &keystream);
                Ok::<_, Error>(next_feedback(&ciphertext[start..]))
            })?;

        Ok(ciphertext)
    }

    /// Decrypts `ciphertext`
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut plaintext = Vec::with_capacity(ciphertext.len());

        ciphertext
            .chunks(BLOCK_SIZE)
            .try_fold(self.iv, |feedback, chunk| {
                let keystream = self.keystream(feedback)?;
                xor_keystream(&mut plaintext, chunk, &keystream);
                Ok::<_, Error>(next_feedback(chunk))
            })?;

        Ok(plaintext)
    }

    fn keystream(&self, feedback: Block) -> Result<Block> {
        let mut block = feedback;
        self.cipher.encrypt_block(&mut block)?;
        Ok(block)
    }
}

/// Feedback for the next block; only a full block can be followed by another
#[inline(always)]
fn next_feedback(ciphertext_block: &[u8]) -> Block {
    if ciphertext_block.len() == BLOCK_SIZE {
        to_block(ciphertext_block)
    } else {
        [0u8; BLOCK_SIZE]
    }
}
