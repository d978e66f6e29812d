//! Password stretching and key separation
//!
//! PBKDF2-HMAC-SHA256 turns the password and salt into a 32-byte master
//! secret; HKDF-SHA256 then expands that secret under two distinct labels, so
//! the encryption key and the authentication key never share bits.

use core::fmt;

use hkdf::Hkdf;
use hmac::Hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use params::utils::envelope::{
    ENVELOPE_AES_KEY_INFO, ENVELOPE_AES_KEY_SIZE, ENVELOPE_HMAC_KEY_INFO,
    ENVELOPE_HMAC_KEY_SIZE, ENVELOPE_MASTER_SECRET_SIZE,
};

use crate::{validate, Error, Result};

/// Encryption and authentication keys for one envelope
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    aes_key: [u8; ENVELOPE_AES_KEY_SIZE],
    hmac_key: [u8; ENVELOPE_HMAC_KEY_SIZE],
}

impl DerivedKeys {
    /// AES-128 key for CBC encryption
    pub fn aes_key(&self) -> &[u8; ENVELOPE_AES_KEY_SIZE] {
        &self.aes_key
    }

    /// HMAC-SHA256 key for the integrity tag
    pub fn hmac_key(&self) -> &[u8; ENVELOPE_HMAC_KEY_SIZE] {
        &self.hmac_key
    }
}

impl fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKeys")
            .field("aes_key", &"[REDACTED]")
            .field("hmac_key", &"[REDACTED]")
            .finish()
    }
}

/// Derives the envelope keys from `password` and `salt`
///
/// `workload_factor` is the PBKDF2 iteration count and must be at least 1.
pub fn derive_keys(password: &[u8], salt: &[u8], workload_factor: u32) -> Result<DerivedKeys> {
    validate::parameter(
        workload_factor >= 1,
        "workload_factor",
        "workload factor must be at least 1",
    )?;

    let mut master = Zeroizing::new([0u8; ENVELOPE_MASTER_SECRET_SIZE]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, workload_factor, &mut master[..]);

    let hkdf = Hkdf::<Sha256>::new(None, &master[..]);
    let mut keys = DerivedKeys {
        aes_key: [0u8; ENVELOPE_AES_KEY_SIZE],
        hmac_key: [0u8; ENVELOPE_HMAC_KEY_SIZE],
    };

    hkdf.expand(ENVELOPE_AES_KEY_INFO, &mut keys.aes_key)
        .map_err(|_| Error::param("HKDF", "output length too large"))?;
    hkdf.expand(ENVELOPE_HMAC_KEY_INFO, &mut keys.hmac_key)
        .map_err(|_| Error::param("HKDF", "output length too large"))?;

    Ok(keys)
}
