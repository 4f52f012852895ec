use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const TOKEN_ENV: &str = "PANEL_AUTH__TOKEN";
const CREDENTIALS_ENV: &str = "PANEL_CREDENTIALS_FILE";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Store a bearer token in the credentials file (0600 on unix).
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the file cannot be written.
pub fn store(token: &str) -> Result<(), AuthError> {
    store_file(&credentials_path()?, token)
}

/// Load a bearer token. Priority: `PANEL_AUTH__TOKEN` env → credentials file.
#[must_use]
pub fn load() -> Option<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.trim().is_empty()
    {
        return Some(token);
    }
    load_file(&credentials_path().ok()?)
}

/// Delete the credentials file if present.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the file exists but cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

/// Detect which tier the current token came from (for `whoami`).
#[must_use]
pub fn detect_token_source() -> Option<&'static str> {
    if std::env::var(TOKEN_ENV).is_ok_and(|t| !t.trim().is_empty()) {
        return Some("env");
    }
    let path = credentials_path().ok()?;
    load_file(&path).map(|_| "file")
}

/// Credentials file location: `PANEL_CREDENTIALS_FILE`, else `~/.panel/credentials`.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` when no home directory can be found.
pub fn credentials_path() -> Result<PathBuf, AuthError> {
    if let Ok(path) = std::env::var(CREDENTIALS_ENV)
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir()
        .map(|h| h.join(".panel").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found, cannot store credentials".into())
        })
}

fn store_file(path: &Path, token: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
    }
    fs::write(path, token.trim())
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    tracing::debug!(path = %path.display(), "stored credentials");
    Ok(())
}

fn load_file(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
