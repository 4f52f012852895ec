//! Epoch-millisecond timestamps.

use chrono::Utc;

/// Current time as milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
