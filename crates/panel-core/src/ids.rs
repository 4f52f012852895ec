//! ID prefix constants.
//!
//! IDs are generated by the store as `{prefix}-{8 hex chars}`.

pub const PREFIX_INTERVIEW: &str = "ivw";
