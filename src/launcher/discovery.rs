//! Finding runnable programs in a directory.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// List candidate programs in `dir`, sorted by file name.
///
/// `exclude` is the launcher's own file name. With an `extension` only
/// files carrying it are kept; without one only executable files are.
pub fn discover(
    dir: &Path,
    exclude: Option<&OsStr>,
    extension: Option<&str>,
) -> io::Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            // Dangling symlink or a file removed mid-listing
            Err(e) => {
                log::debug!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        if exclude.is_some() && path.file_name() == exclude {
            continue;
        }

        let keep = match extension {
            Some(ext) => path.extension() == Some(OsStr::new(ext)),
            None => is_executable(&path, &metadata),
        };
        if keep {
            candidates.push(path);
        }
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("found {} candidates in {}", candidates.len(), dir.display());
    Ok(candidates)
}

#[cfg(unix)]
fn is_executable(_path: &Path, metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(windows)]
fn is_executable(path: &Path, _metadata: &fs::Metadata) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "exe" | "bat" | "cmd"))
        .unwrap_or(false)
}

#[cfg(not(any(unix, windows)))]
fn is_executable(_path: &Path, _metadata: &fs::Metadata) -> bool {
    true
}

/// Display name for a candidate (its file name).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
