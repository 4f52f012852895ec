//! Interview repository: insert, lookups by id / candidate / stream call, status patch.
//!
//! No authorization happens here.

use chrono::Utc;

use panel_core::entities::{Interview, NewInterview};
use panel_core::ids::PREFIX_INTERVIEW;

use crate::error::DatabaseError;
use crate::helpers::{encode_string_list, parse_string_list, unique_violation_target};
use crate::service::PanelService;

/// ID draws per insert before giving up.
const MAX_ID_ATTEMPTS: u32 = 5;

const SELECT_COLS: &str = "id, title, description, start_time, status, stream_call_id, \
                           candidate_id, interviewer_ids, end_time";

fn row_to_interview(row: &libsql::Row) -> Result<Interview, DatabaseError> {
    Ok(Interview {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<Option<String>>(2)?,
        start_time: row.get::<i64>(3)?,
        status: row.get(4)?,
        stream_call_id: row.get(5)?,
        candidate_id: row.get(6)?,
        interviewer_ids: parse_string_list(&row.get::<String>(7)?)?,
        end_time: row.get::<Option<i64>>(8)?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<Interview>, DatabaseError> {
    let mut interviews = Vec::new();
    while let Some(row) = rows.next().await? {
        interviews.push(row_to_interview(&row)?);
    }
    Ok(interviews)
}

/// Primary-key lookup on any connection (plain or inside a transaction).
pub(crate) async fn fetch_by_id(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Option<Interview>, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM interviews WHERE id = ?1"), [id])
        .await?;
    rows.next()
        .await?
        .map(|row| row_to_interview(&row))
        .transpose()
}

/// Patch `status` and `end_time` on any connection. Returns rows affected.
pub(crate) async fn write_status(
    conn: &libsql::Connection,
    id: &str,
    status: &str,
    end_time: Option<i64>,
) -> Result<u64, DatabaseError> {
    let affected = conn
        .execute(
            "UPDATE interviews SET status = ?1, end_time = ?2, updated_at = ?3 WHERE id = ?4",
            libsql::params![status, end_time, Utc::now().to_rfc3339(), id],
        )
        .await?;
    Ok(affected)
}

impl PanelService {
    /// Persist a new interview and return it with its store-assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Conflict` if `stream_call_id` is already taken.
    pub async fn insert_interview(&self, input: &NewInterview) -> Result<Interview, DatabaseError> {
        self.insert_interview_with(input, || self.db().generate_id(PREFIX_INTERVIEW))
            .await
    }

    /// Insert with IDs drawn from `next_id`, drawing again while the drawn ID
    /// is already taken (at most `MAX_ID_ATTEMPTS` times).
    pub(crate) async fn insert_interview_with<F, Fut>(
        &self,
        input: &NewInterview,
        mut next_id: F,
    ) -> Result<Interview, DatabaseError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<String, DatabaseError>>,
    {
        let interviewer_ids = encode_string_list(&input.interviewer_ids)?;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = next_id().await?;
            let now = Utc::now().to_rfc3339();
            let result = self
                .db()
                .conn()
                .execute(
                    "INSERT INTO interviews (id, title, description, start_time, status, stream_call_id, \
                     candidate_id, interviewer_ids, end_time, created_at, updated_at) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, NULL, ?9, ?10)",
                    libsql::params![
                        id.as_str(),
                        input.title.as_str(),
                        input.description.as_deref(),
                        input.start_time,
                        input.status.as_str(),
                        input.stream_call_id.as_str(),
                        input.candidate_id.as_str(),
                        interviewer_ids.as_str(),
                        now.as_str(),
                        now.as_str()
                    ],
                )
                .await;

            let Err(e) = result else {
                tracing::debug!(%id, stream_call_id = %input.stream_call_id, "inserted interview");
                return Ok(input.clone().into_interview(id));
            };

            match unique_violation_target(&e).as_deref() {
                Some("interviews.id") => {
                    tracing::warn!(%id, attempt, "generated interview id already taken, retrying");
                }
                Some("interviews.stream_call_id") => {
                    return Err(DatabaseError::Conflict(format!(
                        "stream_call_id '{}' already belongs to another interview",
                        input.stream_call_id
                    )));
                }
                _ => return Err(DatabaseError::LibSql(e)),
            }
        }

        Err(DatabaseError::InvalidState(format!(
            "no free interview id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    pub async fn get_interview(&self, id: &str) -> Result<Option<Interview>, DatabaseError> {
        fetch_by_id(self.db().conn(), id).await
    }

    /// Every interview in insertion order.
    pub async fn list_interviews(&self) -> Result<Vec<Interview>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM interviews ORDER BY rowid"), ())
            .await?;
        collect(rows).await
    }

    /// Interviews whose candidate is exactly `candidate_id`.
    pub async fn list_interviews_for_candidate(
        &self,
        candidate_id: &str,
    ) -> Result<Vec<Interview>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM interviews WHERE candidate_id = ?1 ORDER BY rowid"
                ),
                [candidate_id],
            )
            .await?;
        collect(rows).await
    }

    /// The interview attached to a video-call session, if any.
    pub async fn get_interview_by_stream_call_id(
        &self,
        stream_call_id: &str,
    ) -> Result<Option<Interview>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM interviews WHERE stream_call_id = ?1 LIMIT 1"),
                [stream_call_id],
            )
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_interview(&row))
            .transpose()
    }
}
