//! JSON artifact writing.
//!
//! Serializes the whole document in memory as compact JSON, writes it to a
//! temp file next to the destination, then renames it over the destination.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write `value` as compact JSON to `path`, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value).context("serialize JSON")?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".sxs-meta-")
        .suffix(".part")
        .tempfile_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(&bytes)
        .with_context(|| format!("write {}", tmp.path().display()))?;
    copy_mode(path, tmp.as_file())?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync {}", tmp.path().display()))?;
    tmp.persist(path)
        .with_context(|| format!("replace {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote JSON");
    Ok(())
}

/// Mode for new artifacts; temp files are otherwise created 0600.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Give the temp file the destination's current mode, or `NEW_FILE_MODE` if it doesn't exist yet.
#[cfg(unix)]
fn copy_mode(dest: &Path, tmp: &std::fs::File) -> Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    let mode = match std::fs::metadata(dest) {
        Ok(meta) => meta.permissions().mode() & 0o7777,
        Err(_) => NEW_FILE_MODE,
    };
    tmp.set_permissions(Permissions::from_mode(mode))
        .with_context(|| format!("set mode {:o} for {}", mode, dest.display()))
}

#[cfg(not(unix))]
fn copy_mode(_dest: &Path, _tmp: &std::fs::File) -> Result<()> {
    Ok(())
}
