//! Shared test utilities for panel-db unit tests.

pub(crate) mod helpers {
    use panel_core::entities::NewInterview;
    use panel_core::identity::AuthIdentity;
    use panel_core::status::StatusPolicy;

    use crate::PanelDb;
    use crate::service::PanelService;

    /// In-memory service accepting any status.
    pub async fn test_service() -> PanelService {
        test_service_with_policy(StatusPolicy::permissive()).await
    }

    /// In-memory service with a specific status allow-list.
    pub async fn test_service_with_policy(policy: StatusPolicy) -> PanelService {
        let db = PanelDb::open_local(":memory:").await.unwrap();
        PanelService::from_db(db, policy)
    }

    pub fn caller(email: &str) -> AuthIdentity {
        AuthIdentity::from_email(email)
    }

    pub fn new_interview(stream_call_id: &str, candidate: &str, interviewers: &[&str]) -> NewInterview {
        NewInterview {
            title: "Technical interview".into(),
            description: None,
            start_time: 1_760_000_000_000,
            status: "scheduled".into(),
            stream_call_id: stream_call_id.into(),
            candidate_id: candidate.into(),
            interviewer_ids: interviewers.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
