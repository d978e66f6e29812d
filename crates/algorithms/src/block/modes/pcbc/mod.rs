//! Propagating Cipher Block Chaining (PCBC) mode
//!
//! Like CBC, but the chaining value after each block is the XOR of that block's
//! plaintext and ciphertext, so a change to any block disturbs every block after
//! it. Messages are PKCS#7-padded.

use zeroize::Zeroizing;

use super::{check_ciphertext_len, load_iv, to_block, xor_in_place};
use crate::block::{padding, Block, BlockCipher, BLOCK_SIZE};
use crate::{Error, Result, ResultExt};

/// PCBC mode over a borrowed block cipher
pub struct Pcbc<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
}

impl<'a, B: BlockCipher> Pcbc<'a, B> {
    /// Creates a PCBC instance
    ///
    /// Fails with `InvalidIvLength` unless `iv` is exactly one block.
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        Ok(Self {
            cipher,
            iv: load_iv("PCBC IV", iv)?,
        })
    }

    /// Pads and encrypts `plaintext`
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padded = Zeroizing::new(padding::pad(plaintext));
        let mut ciphertext = Vec::with_capacity(padded.len());

        padded
            .chunks_exact(BLOCK_SIZE)
            .try_fold(self.iv, |chain, chunk| {
                let plain = to_block(chunk);
                let mut block = plain;
                xor_in_place(&mut block, &chain);
                self.cipher.encrypt_block(&mut block)?;
                ciphertext.extend_from_slice(&block);

                xor_in_place(&mut block, &plain);
                Ok::<_, Error>(block)
            })?;

        Ok(ciphertext)
    }

    /// Decrypts `ciphertext` and removes its padding
    ///
    /// Fails with `InvalidBlockLength` if the ciphertext is empty or not
    /// block-aligned, and with `InvalidPadding` if the recovered padding is
    /// malformed.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_ciphertext_len("PCBC ciphertext", ciphertext.len())?;
        let mut padded = Zeroizing::new(Vec::with_capacity(ciphertext.len()));

        ciphertext
            .chunks_exact(BLOCK_SIZE)
            .try_fold(self.iv, |chain, chunk| {
                let cipher_block = to_block(chunk);
                let mut block = cipher_block;
                self.cipher.decrypt_block(&mut block)?;
                xor_in_place(&mut block, &chain);
                padded.extend_from_slice(&block);

                xor_in_place(&mut block, &cipher_block);
                Ok::<_, Error>(block)
            })?;

        let plaintext = padding::unpad(&padded).with_context("PCBC padding")?;
        Ok(plaintext.to_vec())
    }
}
