//! Authorization-aware interview operations.
//!
//! Every operation receives the caller identity explicitly. The participant
//! rules live in `panel_core::policy`; this module sequences them around the
//! store calls:
//!
//! | Operation | No identity | Rule |
//! |---|---|---|
//! | `list_all` | `Unauthorized` | any caller |
//! | `list_for_candidate` | empty list | caller is the candidate |
//! | `find_by_stream_call_id` | allowed | none |
//! | `create` | `Unauthorized` | caller is candidate or interviewer |
//! | `update_status` | `Unauthorized` | caller is an interviewer on the record |

use panel_core::clock::now_millis;
use panel_core::entities::{Interview, NewInterview};
use panel_core::identity::AuthIdentity;
use panel_core::policy::{self, CandidateListing, Denial};
use panel_core::status::stamps_end_time;

use crate::error::{AccessError, DatabaseError};
use crate::repos::interview::{fetch_by_id, write_status};
use crate::service::PanelService;

fn denied(op: &'static str, caller: Option<&AuthIdentity>, denial: Denial) -> AccessError {
    match caller {
        Some(identity) => tracing::warn!(op, subject = %identity.subject, ?denial, "access denied"),
        None => tracing::warn!(op, ?denial, "access denied"),
    }
    AccessError::from(denial)
}

impl PanelService {
    /// Every interview, in store order. Any authenticated caller.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without an identity; `Database` on store failure.
    pub async fn list_all(
        &self,
        caller: Option<&AuthIdentity>,
    ) -> Result<Vec<Interview>, AccessError> {
        policy::list_all(caller).map_err(|d| denied("list_all", caller, d))?;
        Ok(self.list_interviews().await?)
    }

    /// Interviews where `candidate` is the candidate.
    ///
    /// An unauthenticated caller gets an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// `Forbidden` when the caller's token is not `candidate`; `Database` on
    /// store failure.
    pub async fn list_for_candidate(
        &self,
        caller: Option<&AuthIdentity>,
        candidate: &str,
    ) -> Result<Vec<Interview>, AccessError> {
        match policy::list_for_candidate(caller, candidate) {
            Ok(CandidateListing::Empty) => Ok(Vec::new()),
            Ok(CandidateListing::Owner) => Ok(self.list_interviews_for_candidate(candidate).await?),
            Err(denial) => Err(denied("list_for_candidate", caller, denial)),
        }
    }

    /// The interview for a video-call session. No identity check.
    ///
    /// # Errors
    ///
    /// `Database` on store failure only.
    pub async fn find_by_stream_call_id(
        &self,
        stream_call_id: &str,
    ) -> Result<Option<Interview>, AccessError> {
        Ok(self.get_interview_by_stream_call_id(stream_call_id).await?)
    }

    /// Create an interview the caller takes part in. Returns the new ID.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without an identity; `Forbidden` when the caller is
    /// neither the candidate nor an interviewer; `Validation` for blank fields
    /// or a status outside the allow-list; `Database(Conflict)` when the
    /// stream call ID is taken.
    pub async fn create(
        &self,
        caller: Option<&AuthIdentity>,
        input: NewInterview,
    ) -> Result<String, AccessError> {
        policy::create(caller, &input).map_err(|d| denied("create", caller, d))?;
        input.validate()?;
        self.status_policy().check(&input.status)?;

        let interview = self.insert_interview(&input).await?;
        tracing::info!(id = %interview.id, candidate = %interview.candidate_id, "interview created");
        Ok(interview.id)
    }

    /// Change an interview's status. Entering `"completed"` stamps `end_time`
    /// with the current time (refreshing it on repeat); other values leave
    /// `end_time` as it was.
    ///
    /// The lookup, membership check and patch run in one transaction.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without an identity; `NotFound` for an unknown ID;
    /// `Forbidden` when the caller is not an interviewer on the record;
    /// `Validation` for a blank or disallowed status.
    pub async fn update_status(
        &self,
        caller: Option<&AuthIdentity>,
        id: &str,
        status: &str,
    ) -> Result<Interview, AccessError> {
        let identity =
            policy::require_identity(caller).map_err(|d| denied("update_status", caller, d))?;

        let tx = self.db().conn().transaction().await?;
        let outcome = self.patch_status(&tx, identity, id, status).await;
        match outcome {
            Ok(updated) => {
                tx.commit().await.map_err(DatabaseError::from)?;
                tracing::info!(%id, status, end_time = ?updated.end_time, "interview status updated");
                Ok(updated)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, %id, "rollback after failed status update failed");
                }
                Err(error)
            }
        }
    }

    async fn patch_status(
        &self,
        conn: &libsql::Connection,
        identity: &AuthIdentity,
        id: &str,
        status: &str,
    ) -> Result<Interview, AccessError> {
        let current = fetch_by_id(conn, id)
            .await?
            .ok_or_else(|| AccessError::NotFound { id: id.to_string() })?;

        policy::update_status(identity, &current)
            .map_err(|d| denied("update_status", Some(identity), d))?;
        self.status_policy().check(status)?;

        let end_time = if stamps_end_time(status) {
            Some(now_millis())
        } else {
            current.end_time
        };

        let affected = write_status(conn, id, status, end_time).await?;
        if affected == 0 {
            return Err(AccessError::NotFound { id: id.to_string() });
        }

        Ok(Interview {
            status: status.to_string(),
            end_time,
            ..current
        })
    }
}
