use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A scheduled video interview between one candidate and one or more interviewers.
///
/// Only `status` and `end_time` change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Interview {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Scheduled start, epoch milliseconds.
    pub start_time: i64,
    pub status: String,
    pub stream_call_id: String,
    pub candidate_id: String,
    /// Kept in input order, duplicates included.
    pub interviewer_ids: Vec<String>,
    /// Epoch milliseconds of the latest transition into "completed".
    pub end_time: Option<i64>,
}

impl Interview {
    /// Whether `token` appears anywhere in the interviewer list.
    #[must_use]
    pub fn has_interviewer(&self, token: &str) -> bool {
        self.interviewer_ids.iter().any(|id| id == token)
    }
}

/// Fields supplied by the caller when creating an interview.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewInterview {
    pub title: String,
    pub description: Option<String>,
    pub start_time: i64,
    pub status: String,
    /// Pre-generated by the video-call backend.
    pub stream_call_id: String,
    pub candidate_id: String,
    pub interviewer_ids: Vec<String>,
}

impl NewInterview {
    /// Whether `token` is the candidate or one of the interviewers.
    #[must_use]
    pub fn is_participant(&self, token: &str) -> bool {
        self.candidate_id == token || self.interviewer_ids.iter().any(|id| id == token)
    }

    /// Reject blank required fields and an empty interviewer list.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("status", &self.status)?;
        require_text("stream_call_id", &self.stream_call_id)?;
        require_text("candidate_id", &self.candidate_id)?;
        if self.interviewer_ids.is_empty() {
            return Err(CoreError::Validation(
                "interviewer_ids must contain at least one interviewer".into(),
            ));
        }
        for (idx, id) in self.interviewer_ids.iter().enumerate() {
            require_text(&format!("interviewer_ids[{idx}]"), id)?;
        }
        Ok(())
    }

    /// Materialize the stored record once the store has assigned an ID.
    #[must_use]
    pub fn into_interview(self, id: String) -> Interview {
        Interview {
            id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            status: self.status,
            stream_call_id: self.stream_call_id,
            candidate_id: self.candidate_id,
            interviewer_ids: self.interviewer_ids,
            end_time: None,
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_interview() -> NewInterview {
        NewInterview {
            title: "Backend loop".into(),
            description: None,
            start_time: 1_760_000_000_000,
            status: "scheduled".into(),
            stream_call_id: "call-1".into(),
            candidate_id: "a@x.com".into(),
            interviewer_ids: vec!["b@x.com".into(), "c@x.com".into(), "b@x.com".into()],
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(new_interview().validate().is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        let input = NewInterview {
            title: "   ".into(),
            ..new_interview()
        };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("title"), "{err}");
    }

    #[test]
    fn empty_interviewers_rejected() {
        let input = NewInterview {
            interviewer_ids: Vec::new(),
            ..new_interview()
        };
        assert!(matches!(input.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn blank_interviewer_entry_rejected() {
        let input = NewInterview {
            interviewer_ids: vec!["b@x.com".into(), String::new()],
            ..new_interview()
        };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("interviewer_ids[1]"), "{err}");
    }

    #[test]
    fn participant_check_covers_candidate_and_interviewers() {
        let input = new_interview();
        assert!(input.is_participant("a@x.com"));
        assert!(input.is_participant("c@x.com"));
        assert!(!input.is_participant("d@x.com"));
        assert!(!input.is_participant("A@X.COM"));
    }

    #[test]
    fn into_interview_keeps_order_and_duplicates() {
        let interview = new_interview().into_interview("ivw-00000001".into());
        assert_eq!(interview.interviewer_ids, vec!["b@x.com", "c@x.com", "b@x.com"]);
        assert_eq!(interview.end_time, None);
        assert!(interview.has_interviewer("c@x.com"));
        assert!(!interview.has_interviewer("a@x.com"));
    }
}
