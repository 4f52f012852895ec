//! Participant-based access rules.
//!
//! Pure functions over the caller identity and the record in question. The
//! storage layer calls these before touching the database; nothing here does
//! I/O. Tokens are compared byte for byte, with no case folding.

use crate::entities::{Interview, NewInterview};
use crate::identity::AuthIdentity;

/// Why a caller was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No verified identity where one is required.
    Unauthenticated,
    /// Identity present but not a participant the rule accepts.
    NotPermitted,
}

/// Outcome of the candidate-listing rule when the caller is not refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateListing {
    /// Unauthenticated caller: answer with an empty list, not an error.
    Empty,
    /// Caller is the requested candidate: run the lookup.
    Owner,
}

/// Require a present identity.
///
/// # Errors
///
/// Returns `Denial::Unauthenticated` when `caller` is `None`.
pub const fn require_identity(caller: Option<&AuthIdentity>) -> Result<&AuthIdentity, Denial> {
    match caller {
        Some(identity) => Ok(identity),
        None => Err(Denial::Unauthenticated),
    }
}

/// Listing every interview: any authenticated caller.
///
/// # Errors
///
/// Returns `Denial::Unauthenticated` when `caller` is `None`.
pub const fn list_all(caller: Option<&AuthIdentity>) -> Result<(), Denial> {
    match require_identity(caller) {
        Ok(_) => Ok(()),
        Err(denial) => Err(denial),
    }
}

/// Listing a candidate's interviews: only the candidate themselves.
///
/// # Errors
///
/// Returns `Denial::NotPermitted` when the caller's token differs from
/// `candidate` or the identity has no token.
pub fn list_for_candidate(
    caller: Option<&AuthIdentity>,
    candidate: &str,
) -> Result<CandidateListing, Denial> {
    let Some(identity) = caller else {
        return Ok(CandidateListing::Empty);
    };
    match identity.token() {
        Some(token) if token == candidate => Ok(CandidateListing::Owner),
        _ => Err(Denial::NotPermitted),
    }
}

/// Creating an interview: the caller must be its candidate or one of its interviewers.
///
/// # Errors
///
/// Returns `Denial::Unauthenticated` with no identity, `Denial::NotPermitted`
/// when the caller is not a participant of `input`.
pub fn create(caller: Option<&AuthIdentity>, input: &NewInterview) -> Result<(), Denial> {
    let identity = require_identity(caller)?;
    match identity.token() {
        Some(token) if input.is_participant(token) => Ok(()),
        _ => Err(Denial::NotPermitted),
    }
}

/// Changing status: the caller must be one of the record's interviewers.
///
/// Identity presence is checked separately (before the record lookup) via
/// [`require_identity`]; the candidate alone is never enough.
///
/// # Errors
///
/// Returns `Denial::NotPermitted` when the caller is not an interviewer.
pub fn update_status(identity: &AuthIdentity, interview: &Interview) -> Result<(), Denial> {
    match identity.token() {
        Some(token) if interview.has_interviewer(token) => Ok(()),
        _ => Err(Denial::NotPermitted),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn caller(email: &str) -> AuthIdentity {
        AuthIdentity::from_email(email)
    }

    fn tokenless() -> AuthIdentity {
        AuthIdentity {
            subject: "user_no_email".into(),
            email: None,
        }
    }

    fn input() -> NewInterview {
        NewInterview {
            title: "System design".into(),
            description: Some("Round 2".into()),
            start_time: 1_760_000_000_000,
            status: "scheduled".into(),
            stream_call_id: "call-xyz".into(),
            candidate_id: "a@x.com".into(),
            interviewer_ids: vec!["b@x.com".into()],
        }
    }

    #[test]
    fn list_all_needs_identity() {
        assert_eq!(list_all(None), Err(Denial::Unauthenticated));
        assert_eq!(list_all(Some(&caller("z@x.com"))), Ok(()));
        assert_eq!(list_all(Some(&tokenless())), Ok(()));
    }

    #[test]
    fn candidate_listing_is_empty_when_anonymous() {
        assert_eq!(
            list_for_candidate(None, "a@x.com"),
            Ok(CandidateListing::Empty)
        );
    }

    #[rstest]
    #[case("a@x.com", Ok(CandidateListing::Owner))]
    #[case("b@x.com", Err(Denial::NotPermitted))]
    #[case("A@x.com", Err(Denial::NotPermitted))]
    fn candidate_listing_matches_exact_token(
        #[case] email: &str,
        #[case] expected: Result<CandidateListing, Denial>,
    ) {
        assert_eq!(list_for_candidate(Some(&caller(email)), "a@x.com"), expected);
    }

    #[test]
    fn candidate_listing_forbidden_without_token() {
        assert_eq!(
            list_for_candidate(Some(&tokenless()), "a@x.com"),
            Err(Denial::NotPermitted)
        );
    }

    #[rstest]
    #[case("a@x.com", Ok(()))]
    #[case("b@x.com", Ok(()))]
    #[case("c@x.com", Err(Denial::NotPermitted))]
    fn create_requires_participant(#[case] email: &str, #[case] expected: Result<(), Denial>) {
        assert_eq!(create(Some(&caller(email)), &input()), expected);
    }

    #[test]
    fn create_without_identity_is_unauthenticated() {
        assert_eq!(create(None, &input()), Err(Denial::Unauthenticated));
        assert_eq!(create(Some(&tokenless()), &input()), Err(Denial::NotPermitted));
    }

    #[test]
    fn only_interviewers_update_status() {
        let interview = input().into_interview("ivw-1".into());
        assert_eq!(update_status(&caller("b@x.com"), &interview), Ok(()));
        assert_eq!(
            update_status(&caller("a@x.com"), &interview),
            Err(Denial::NotPermitted)
        );
        assert_eq!(
            update_status(&tokenless(), &interview),
            Err(Denial::NotPermitted)
        );
    }
}
