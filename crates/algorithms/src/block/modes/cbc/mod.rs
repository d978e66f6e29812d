//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV for
//! the first block) before encryption, following NIST SP 800-38A. Messages are
//! PKCS#7-padded, so the ciphertext is always a non-empty multiple of the block
//! size.

use zeroize::Zeroizing;

use super::{check_ciphertext_len, load_iv, to_block, xor_in_place};
use crate::block::{padding, Block, BlockCipher, BLOCK_SIZE};
use crate::{Error, Result, ResultExt};

/// CBC mode over a borrowed block cipher
pub struct Cbc<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
}

impl<'a, B: BlockCipher> Cbc<'a, B> {
    /// Creates a CBC instance
    ///
    /// Fails with `InvalidIvLength` unless `iv` is exactly one block.
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        Ok(Self {
            cipher,
            iv: load_iv("CBC IV", iv)?,
        })
    }

    /// Pads and encrypts `plaintext`
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padded = Zeroizing::new(padding::pad(plaintext));
        let mut ciphertext = Vec::with_capacity(padded.len());

        padded
            .chunks_exact(BLOCK_SIZE)
            .try_fold(self.iv, |previous, chunk| {
                let mut block = to_block(chunk);
                xor_in_place(&mut block, &previous);
                self.cipher.encrypt_block(&mut block)?;
                ciphertext.extend_from_slice(&block);
                Ok::<_, Error>(block)
            })?;

        Ok(ciphertext)
    }

    /// Decrypts `ciphertext` and removes its padding
    ///
    /// Fails with `InvalidBlockLength` if the ciphertext is empty or not
    /// block-aligned, and with `InvalidPadding` if the recovered padding is
    /// malformed. No plaintext is returned on failure.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_ciphertext_len("CBC ciphertext", ciphertext.len())?;
        let mut padded = Zeroizing::new(Vec::with_capacity(ciphertext.len()));

        ciphertext
            .chunks_exact(BLOCK_SIZE)
            .try_fold(self.iv, |previous, chunk| {
                let current = to_block(chunk);
                let mut block = current;
                self.cipher.decrypt_block(&mut block)?;
                xor_in_place(&mut block, &previous);
                padded.extend_from_slice(&block);
                Ok::<_, Error>(current)
            })?;

        let plaintext = padding::unpad(&padded).with_context("CBC padding")?;
        Ok(plaintext.to_vec())
    }
}
