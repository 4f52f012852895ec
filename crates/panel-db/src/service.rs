//! Service layer wrapping the database handle and the status policy.
//!
//! Raw repository methods (`repos::interview`) and the authorization-aware
//! operations (`access`) are implemented as `impl PanelService` blocks.

use panel_core::status::StatusPolicy;

use crate::PanelDb;
use crate::error::DatabaseError;

/// Owns the interview store and the configured status allow-list.
///
/// The caller identity is never stored here; each access operation takes it
/// as a parameter.
pub struct PanelService {
    db: PanelDb,
    status_policy: StatusPolicy,
}

impl PanelService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `status_policy` - Accepted status values; [`StatusPolicy::permissive`] for any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        status_policy: StatusPolicy,
    ) -> Result<Self, DatabaseError> {
        let db = PanelDb::open_local(db_path).await?;
        Ok(Self { db, status_policy })
    }

    /// Create from an existing `PanelDb`.
    #[must_use]
    pub const fn from_db(db: PanelDb, status_policy: StatusPolicy) -> Self {
        Self { db, status_policy }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PanelDb {
        &self.db
    }

    #[must_use]
    pub const fn status_policy(&self) -> &StatusPolicy {
        &self.status_policy
    }
}
