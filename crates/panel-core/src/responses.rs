//! CLI response types returned as JSON by `panel` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Interview;

/// Response from `panel list` and `panel mine`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InterviewListResponse {
    pub interviews: Vec<Interview>,
    pub total: u32,
}

impl InterviewListResponse {
    #[must_use]
    pub fn new(interviews: Vec<Interview>) -> Self {
        let total = u32::try_from(interviews.len()).unwrap_or(u32::MAX);
        Self { interviews, total }
    }
}

/// Response from `panel call`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InterviewLookupResponse {
    pub stream_call_id: String,
    pub interview: Option<Interview>,
}

/// Response from `panel create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InterviewCreateResponse {
    pub id: String,
    pub interview: Option<Interview>,
}

/// Response from `panel status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusUpdateResponse {
    pub interview: Interview,
    pub end_time_stamped: bool,
}

/// Response from `panel auth whoami`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WhoAmIResponse {
    pub authenticated: bool,
    /// True only for identities read from a signature-verified token.
    pub verified: bool,
    pub subject: Option<String>,
    pub email: Option<String>,
    /// Where the identity came from: `override`, `env`, `file`, `config`.
    pub source: Option<String>,
}
