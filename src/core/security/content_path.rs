use std::io;
use std::path::{Component, Path, PathBuf};

/// Errors that can occur during content path resolution
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Content identifier '{0}' must be a relative path without '..'")]
    IllegalIdentifier(String),

    #[error("Path '{path}' is outside content root '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' is not allowed")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Resolves a content identifier to a file inside `root`.
///
/// This function performs the following checks:
/// 1. The identifier is relative and free of `..`, root or prefix components
/// 2. The joined path exists
/// 3. Symlinks are refused when `allow_symlinks` is false
/// 4. The canonical path is still within the canonical root
///
/// # Returns
///
/// * `Ok(PathBuf)` - The canonicalized path
/// * `Err(PathSecurityError)` - If any check fails
///
/// # Examples
///
/// ```rust,ignore
/// let path = resolve_content_path(Path::new("content"), "en/ai-tools.jsonc", true)?;
/// ```
pub fn resolve_content_path(
    root: &Path,
    identifier: &str,
    allow_symlinks: bool,
) -> Result<PathBuf, PathSecurityError> {
    let relative = Path::new(identifier);

    if identifier.is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(PathSecurityError::IllegalIdentifier(identifier.to_string()));
    }

    let candidate = root.join(relative);

    // symlink_metadata so that dangling links still count as present
    if candidate.symlink_metadata().is_err() {
        return Err(PathSecurityError::PathNotFound { path: candidate });
    }

    if !allow_symlinks && candidate.is_symlink() {
        return Err(PathSecurityError::SymlinkNotAllowed { path: candidate });
    }

    let canonical_root = root.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: root.to_path_buf(),
        error: e,
    })?;

    let canonical_path = candidate.canonicalize().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PathSecurityError::PathNotFound {
                path: candidate.clone(),
            }
        } else {
            PathSecurityError::IoError {
                path: candidate.clone(),
                error: e,
            }
        }
    })?;

    if !canonical_path.starts_with(&canonical_root) {
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical_path,
            root: canonical_root,
        });
    }

    Ok(canonical_path)
}
