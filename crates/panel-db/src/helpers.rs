//! Row-to-entity parsing helpers.

use crate::error::DatabaseError;

const UNIQUE_FAILED: &str = "UNIQUE constraint failed:";

/// Parse a TEXT column holding a JSON array of strings.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not a JSON string array.
pub fn parse_string_list(s: &str) -> Result<Vec<String>, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid JSON string list '{s}': {e}")))
}

/// Serialize a string list for a JSON TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn encode_string_list(items: &[String]) -> Result<String, DatabaseError> {
    serde_json::to_string(items).map_err(|e| DatabaseError::Other(e.into()))
}

/// The `table.column` a `UNIQUE` or primary key rejection names, e.g. `interviews.id`.
///
/// libSQL surfaces these as generic SQLite failures, so the target is read
/// from the message. `None` for any other error.
pub fn unique_violation_target(e: &libsql::Error) -> Option<String> {
    unique_target_in(&e.to_string())
}

fn unique_target_in(message: &str) -> Option<String> {
    let (_, rest) = message.split_once(UNIQUE_FAILED)?;
    let target: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphanumeric() || matches!(c, '_' | '.'))
        .collect();
    (!target.is_empty()).then_some(target)
}
