//! JSON persistence for report documents.

use astrascan_core::{Result, SweepError};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialize a value as pretty-printed JSON and write it to `path`.
///
/// The file is created or overwritten. Nothing is written when
/// serialization fails. Neither failure is retried; both surface to
/// the caller with the offending path or serialization detail.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, &json).map_err(|source| SweepError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "report written");
    Ok(())
}
