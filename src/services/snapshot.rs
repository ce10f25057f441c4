//! Saved canvas state, loaded back verbatim as an initial drawing.

use std::path::Path;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot not found: {0}")]
    NotFound(String),
    #[error("snapshot unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read a JSON snapshot file without any schema validation.
///
/// # Errors
///
/// Returns `NotFound` for a missing file, `Io` for other read failures and
/// `Parse` when the contents are not JSON.
pub async fn load_saved_state(path: &Path) -> Result<serde_json::Value, SnapshotError> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SnapshotError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    debug!(path = %path.display(), bytes = raw.len(), "saved state loaded");
    Ok(serde_json::from_slice(&raw)?)
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
