//! AES key expansion (FIPS 197 section 5.2)

use zeroize::Zeroizing;

use super::tables::{RCON, SBOX};
use super::AesVariant;
use crate::block::{Block, BLOCK_SIZE};

/// Rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Applies the S-box to each byte of a word
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let [a, b, c, d] = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[a as usize],
        SBOX[b as usize],
        SBOX[c as usize],
        SBOX[d as usize],
    ])
}

/// Expands `key` into `Nr + 1` round keys laid out column-major
///
/// The caller guarantees `key.len() == variant.key_size()`.
pub(crate) fn expand_key(key: &[u8], variant: AesVariant) -> Vec<Block> {
    debug_assert_eq!(key.len(), variant.key_size());

    let nk = variant.key_words();
    let total_words = 4 * (variant.rounds() + 1);

    let mut words: Zeroizing<Vec<u32>> = Zeroizing::new(Vec::with_capacity(total_words));
    words.extend(
        key.chunks_exact(4)
            .map(|w| u32::from_be_bytes([w[0], w[1], w[2], w[3]])),
    );

    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            // 256-bit keys only
            temp = sub_word(temp);
        }
        let next = words[i - nk] ^ temp;
        words.push(next);
    }

    words
        .chunks_exact(4)
        .map(|round_words| {
            let mut round_key = [0u8; BLOCK_SIZE];
            for (column, word) in round_words.iter().enumerate() {
                round_key[column * 4..column * 4 + 4].copy_from_slice(&word.to_be_bytes());
            }
            round_key
        })
        .collect()
}
