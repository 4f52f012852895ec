//! Serde roundtrip and JsonSchema validation for entity and response types.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use panel_core::entities::{Interview, NewInterview};
use panel_core::identity::AuthIdentity;
use panel_core::responses::{InterviewListResponse, StatusUpdateResponse};

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn completed_interview() -> Interview {
    Interview {
        id: "ivw-a3f8b2c1".into(),
        title: "Final round".into(),
        description: Some("Bar raiser".into()),
        start_time: 1_760_000_000_000,
        status: "completed".into(),
        stream_call_id: "call-9f2".into(),
        candidate_id: "a@x.com".into(),
        interviewer_ids: vec!["b@x.com".into(), "b@x.com".into(), "c@x.com".into()],
        end_time: Some(1_760_000_360_000),
    }
}

roundtrip_and_validate!(interview_roundtrip, Interview, completed_interview());

roundtrip_and_validate!(
    new_interview_roundtrip,
    NewInterview,
    NewInterview {
        title: "Screen".into(),
        description: None,
        start_time: 0,
        status: "scheduled".into(),
        stream_call_id: "call-1".into(),
        candidate_id: "a@x.com".into(),
        interviewer_ids: vec!["b@x.com".into()],
    }
);

roundtrip_and_validate!(
    identity_without_email_roundtrip,
    AuthIdentity,
    AuthIdentity {
        subject: "user_123".into(),
        email: None,
    }
);

roundtrip_and_validate!(
    list_response_roundtrip,
    InterviewListResponse,
    InterviewListResponse::new(vec![completed_interview()])
);

roundtrip_and_validate!(
    status_response_roundtrip,
    StatusUpdateResponse,
    StatusUpdateResponse {
        interview: completed_interview(),
        end_time_stamped: true,
    }
);

#[test]
fn interviewer_order_and_duplicates_survive_json() {
    let json = serde_json::to_value(completed_interview()).unwrap();
    assert_eq!(
        json["interviewer_ids"],
        serde_json::json!(["b@x.com", "b@x.com", "c@x.com"])
    );
}

#[test]
fn list_response_counts_interviews() {
    let response = InterviewListResponse::new(vec![completed_interview(), completed_interview()]);
    assert_eq!(response.total, 2);
}
