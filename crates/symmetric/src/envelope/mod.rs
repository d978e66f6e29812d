//! Password-based authenticated envelope
//!
//! ## Wire format
//!
//! | Offset | Length | Field |
//! |---|---|---|
//! | 0 | 16 | PBKDF2 salt |
//! | 16 | 16 | CBC initialization vector |
//! | 32 | 32 or 16 | HMAC-SHA256 tag over `IV ‖ ciphertext` |
//! | 64 or 48 | rest | AES-128-CBC ciphertext, PKCS#7-padded |
//!
//! The module-level [`encrypt`] and [`decrypt`] always use the full 32-byte
//! tag. A deployment that needs the shorter tag selects it through
//! [`EnvelopeConfig`] on both sides.
//!
//! ## Failure behavior
//!
//! [`decrypt`] recomputes the tag and compares it in constant time before the
//! ciphertext is touched. Any mismatch yields `IntegrityError` and no
//! plaintext. Envelopes shorter than the fixed header yield
//! `TruncatedEnvelope`.

mod config;
mod kdf;

pub use config::{EnvelopeConfig, TagSize};
pub use kdf::{derive_keys, DerivedKeys};

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;

use algorithms::{generate_iv, Aes, Block};
use params::utils::envelope::{ENVELOPE_IV_SIZE, ENVELOPE_SALT_SIZE};

use crate::{validate, Error, Result, ResultExt};

/// A parsed envelope
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Salt fed to the key derivation
    pub salt: [u8; ENVELOPE_SALT_SIZE],
    /// CBC initialization vector
    pub iv: Block,
    /// HMAC-SHA256 tag, possibly truncated
    pub tag: Vec<u8>,
    /// Padded CBC ciphertext
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Length of the salt, IV and tag prefix
    pub const fn header_len(tag_size: TagSize) -> usize {
        ENVELOPE_SALT_SIZE + ENVELOPE_IV_SIZE + tag_size.size()
    }

    /// Splits raw bytes into the four envelope fields
    ///
    /// Fails with `TruncatedEnvelope` if `bytes` is shorter than the header.
    /// The ciphertext may be empty or unaligned here; such envelopes fail
    /// authentication later.
    pub fn parse(bytes: &[u8], tag_size: TagSize) -> Result<Self> {
        validate::min_length(bytes.len(), Self::header_len(tag_size))?;

        let (salt, rest) = bytes.split_at(ENVELOPE_SALT_SIZE);
        let (iv, rest) = rest.split_at(ENVELOPE_IV_SIZE);
        let (tag, ciphertext) = rest.split_at(tag_size.size());

        let mut envelope = Self {
            salt: [0u8; ENVELOPE_SALT_SIZE],
            iv: [0u8; ENVELOPE_IV_SIZE],
            tag: tag.to_vec(),
            ciphertext: ciphertext.to_vec(),
        };
        envelope.salt.copy_from_slice(salt);
        envelope.iv.copy_from_slice(iv);
        Ok(envelope)
    }

    /// Serializes the envelope as `salt ‖ iv ‖ tag ‖ ciphertext`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            ENVELOPE_SALT_SIZE + ENVELOPE_IV_SIZE + self.tag.len() + self.ciphertext.len(),
        );
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }
}

/// Encrypts `plaintext` under `password` with a full-width tag
///
/// Salt and IV are drawn from the operating system's CSPRNG.
pub fn encrypt(password: &[u8], plaintext: &[u8], workload_factor: u32) -> Result<Vec<u8>> {
    encrypt_with_rng(password, plaintext, workload_factor, &mut OsRng)
}

/// Decrypts an envelope produced by [`encrypt`]
pub fn decrypt(password: &[u8], envelope: &[u8], workload_factor: u32) -> Result<Vec<u8>> {
    decrypt_with_config(password, envelope, &EnvelopeConfig::new(workload_factor))
}

/// Like [`encrypt`], drawing salt and IV from `rng`
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    password: &[u8],
    plaintext: &[u8],
    workload_factor: u32,
    rng: &mut R,
) -> Result<Vec<u8>> {
    encrypt_with_config(password, plaintext, &EnvelopeConfig::new(workload_factor), rng)
}

/// Encrypts `plaintext` under `password` with explicit configuration
pub fn encrypt_with_config<R: RngCore + CryptoRng>(
    password: &[u8],
    plaintext: &[u8],
    config: &EnvelopeConfig,
    rng: &mut R,
) -> Result<Vec<u8>> {
    config.validate()?;

    let mut salt = [0u8; ENVELOPE_SALT_SIZE];
    rng.try_fill_bytes(&mut salt)
        .map_err(|e| Error::RandomGenerationError {
            context: "envelope salt",
            message: e.to_string(),
        })?;
    let iv = generate_iv(rng)?;

    let keys = derive_keys(password, &salt, config.workload_factor)?;
    let cipher = Aes::new(keys.aes_key())?;
    let ciphertext = cipher.encrypt_cbc(plaintext, &iv)?;
    let tag = compute_tag(keys.hmac_key(), &iv, &ciphertext, config.tag_size)?;

    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        workload_factor = config.workload_factor,
        tag_size = config.tag_size.size(),
        "sealed envelope"
    );

    Ok(Envelope {
        salt,
        iv,
        tag,
        ciphertext,
    }
    .to_bytes())
}

/// Decrypts an envelope with explicit configuration
///
/// The configuration must match the one used to encrypt.
pub fn decrypt_with_config(
    password: &[u8],
    envelope: &[u8],
    config: &EnvelopeConfig,
) -> Result<Vec<u8>> {
    config.validate()?;
    let envelope = Envelope::parse(envelope, config.tag_size)?;

    let keys = derive_keys(password, &envelope.salt, config.workload_factor)?;
    let expected = compute_tag(
        keys.hmac_key(),
        &envelope.iv,
        &envelope.ciphertext,
        config.tag_size,
    )?;

    validate::integrity(internal::ct_eq(&expected, &envelope.tag), "envelope").map_err(|e| {
        tracing::warn!(
            envelope_len = Envelope::header_len(config.tag_size) + envelope.ciphertext.len(),
            "envelope failed authentication"
        );
        e
    })?;

    let cipher = Aes::new(keys.aes_key())?;
    let plaintext = cipher
        .decrypt_cbc(&envelope.ciphertext, &envelope.iv)
        .with_context("envelope")?;

    tracing::debug!(
        ciphertext_len = envelope.ciphertext.len(),
        plaintext_len = plaintext.len(),
        workload_factor = config.workload_factor,
        "opened envelope"
    );

    Ok(plaintext)
}

/// HMAC-SHA256 over `iv ‖ ciphertext`, cut to the configured width
fn compute_tag(
    hmac_key: &[u8],
    iv: &Block,
    ciphertext: &[u8],
    tag_size: TagSize,
) -> Result<Vec<u8>> {
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(hmac_key)
        .map_err(|_| Error::param("HMAC key", "invalid key length"))?;
    mac.update(iv);
    mac.update(ciphertext);
    let full = mac.finalize().into_bytes();
    Ok(full[..tag_size.size()].to_vec())
}
