//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_log_filter() -> String {
    String::from("warn")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Tracing filter used when neither `PANEL_LOG` nor `--verbose`/`--quiet` is given.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}
