//! Writing and reading the build info file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BuildInfoError, Result};
use crate::BuildInfo;

/// Writes the record to `path`, replacing any previous file.
///
/// A symlink at `path` is written through to its target. When the target
/// already exists, the JSON goes to a temporary file beside it carrying the
/// same permissions and is then renamed over it, so the existing file is
/// never left truncated. A new file is created in place with the process
/// umask applied. The directory itself is not created.
///
/// # Errors
/// Returns `MissingDirectory` if the parent directory does not exist, or a
/// `WriteError` if the write or rename fails.
pub fn write_build_info(path: &Path, info: &BuildInfo) -> Result<()> {
    let json = info.to_pretty_json()?;

    let dir = parent_dir(path);
    if !dir.is_dir() {
        return Err(BuildInfoError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let write_error = |source| BuildInfoError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path);
    match fs::metadata(&target) {
        Ok(existing) => {
            let target_dir = parent_dir(&target);
            let mut temp_file =
                tempfile::NamedTempFile::new_in(target_dir).map_err(write_error)?;
            temp_file
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(write_error)?;
            temp_file.write_all(json.as_bytes()).map_err(write_error)?;
            temp_file.flush().map_err(write_error)?;
            temp_file.persist(&target).map_err(|e| write_error(e.error))?;
        }
        // Follows a dangling symlink and creates its target
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::write(path, json.as_bytes()).map_err(write_error)?;
        }
        Err(source) => return Err(write_error(source)),
    }

    debug!(
        path = %path.display(),
        target = %target.display(),
        bytes = json.len(),
        "build info written"
    );
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// The file a write to `path` should land in, following symlinks.
fn resolve_target(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_link {
        if let Ok(resolved) = fs::canonicalize(path) {
            return resolved;
        }
    }
    path.to_path_buf()
}

/// Reads a previously written build info file.
pub fn read_build_info(path: &Path) -> Result<BuildInfo> {
    let data = fs::read_to_string(path).map_err(|source| BuildInfoError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}
