//! Size and parameter constants grouped by concern

pub mod envelope;
pub mod symmetric;
