//! Result combinators shared by the aesvault crates

use super::types::{Error, Result};

/// Relabels the failure site of a `Result` without changing the error kind
///
/// Lower layers report where they rejected input ("PKCS#7"); callers that wrap
/// them can rename that site ("CBC padding") so the final error points at the
/// operation the user actually invoked.
pub trait ResultExt<T> {
    /// Replace the static context of the error, if any
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
