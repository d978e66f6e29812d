//! Per-deployment envelope parameters

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use params::utils::envelope::{
    ENVELOPE_DEFAULT_WORKLOAD, ENVELOPE_TAG_SIZE_FULL, ENVELOPE_TAG_SIZE_TRUNCATED,
};

use crate::{validate, Result};

/// Width of the HMAC-SHA256 tag carried in the envelope
///
/// The width is not recorded in the envelope itself, so sender and receiver
/// must agree on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TagSize {
    /// The complete 32-byte HMAC-SHA256 output
    #[default]
    Full,
    /// The leftmost 16 bytes of the HMAC-SHA256 output
    Truncated,
}

impl TagSize {
    /// Tag length in bytes
    pub const fn size(self) -> usize {
        match self {
            Self::Full => ENVELOPE_TAG_SIZE_FULL,
            Self::Truncated => ENVELOPE_TAG_SIZE_TRUNCATED,
        }
    }
}

/// Envelope configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvelopeConfig {
    /// PBKDF2 iteration count
    pub workload_factor: u32,
    /// Tag width written and expected
    pub tag_size: TagSize,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            workload_factor: ENVELOPE_DEFAULT_WORKLOAD,
            tag_size: TagSize::Full,
        }
    }
}

impl EnvelopeConfig {
    /// Creates a configuration with the given workload and a full-width tag
    pub fn new(workload_factor: u32) -> Self {
        Self {
            workload_factor,
            ..Self::default()
        }
    }

    /// Sets the PBKDF2 iteration count
    pub fn with_workload_factor(mut self, workload_factor: u32) -> Self {
        self.workload_factor = workload_factor;
        self
    }

    /// Sets the tag width
    pub fn with_tag_size(mut self, tag_size: TagSize) -> Self {
        self.tag_size = tag_size;
        self
    }

    /// Checks that the configuration is usable
    ///
    /// Fails with `InvalidParameter` when the workload factor is zero.
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            self.workload_factor >= 1,
            "workload_factor",
            "workload factor must be at least 1",
        )
    }
}
