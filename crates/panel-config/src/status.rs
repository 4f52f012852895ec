//! Status allow-list configuration.

use panel_core::status::StatusPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatusConfig {
    /// Accepted status values. Empty accepts anything.
    #[serde(default)]
    pub allowed: Vec<String>,
}

impl StatusConfig {
    #[must_use]
    pub fn policy(&self) -> StatusPolicy {
        StatusPolicy::allow_list(self.allowed.iter().cloned())
    }
}
