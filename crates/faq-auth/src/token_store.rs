use std::fs;
use std::path::PathBuf;

use crate::error::AuthError;

const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV_VAR: &str = "FAQ_AUTH__TOKEN";

/// Store a JWT in the credentials file (`~/.config/faq/credentials`,
/// mode 0600 on Unix).
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the file cannot be written.
pub fn store(jwt: &str) -> Result<(), AuthError> {
    let path = credentials_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(&path, jwt)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

/// Load a JWT. Priority: `FAQ_AUTH__TOKEN` env → file.
#[must_use]
pub fn load() -> Option<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        if !token.is_empty() {
            return Some(token);
        }
    }

    load_file()
}

/// Delete the stored credentials file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

/// Detect which tier the current token came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<String> {
    if std::env::var(TOKEN_ENV_VAR).is_ok_and(|t| !t.is_empty()) {
        return Some("env".into());
    }
    if load_file().is_some() {
        return Some("file".into());
    }
    None
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::config_dir()
        .map(|c| c.join("faq").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("config directory not found — cannot store credentials".into())
        })
}

fn load_file() -> Option<String> {
    let path = credentials_path().ok()?;
    fs::read_to_string(&path)
        .ok()
        .filter(|s| !s.trim().is_empty())
}
