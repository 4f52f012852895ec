//! Interview status values.
//!
//! Status is free text. Any value may follow any other; entering
//! [`STATUS_COMPLETED`] is the only transition with a side effect (it stamps
//! `end_time`). Deployments may restrict the accepted values with a
//! [`StatusPolicy`] allow-list.

use crate::errors::CoreError;

pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_COMPLETED: &str = "completed";

/// Whether entering `status` stamps the record's `end_time`.
///
/// Exact match: `"Completed"` does not count.
#[must_use]
pub fn stamps_end_time(status: &str) -> bool {
    status == STATUS_COMPLETED
}

/// Optional allow-list of accepted status values. Empty means any value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPolicy {
    allowed: Vec<String>,
}

impl StatusPolicy {
    /// Accept every status value.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            allowed: Vec::new(),
        }
    }

    /// Accept only the given values. An empty iterator yields a permissive policy.
    #[must_use]
    pub fn allow_list<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_permissive(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Check a status value against the policy.
    ///
    /// Blank values are always rejected.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the status is blank or not allowed.
    pub fn check(&self, status: &str) -> Result<(), CoreError> {
        if status.trim().is_empty() {
            return Err(CoreError::Validation("status must not be empty".into()));
        }
        if self.is_permissive() || self.allowed.iter().any(|s| s == status) {
            return Ok(());
        }
        Err(CoreError::Validation(format!(
            "status '{status}' is not allowed (allowed: {})",
            self.allowed.join(", ")
        )))
    }
}
