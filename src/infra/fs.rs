//! Filesystem adapter: text file I/O with atomic writes and typed errors.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns true if the error means the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

/// The file operations the note repository needs.
///
/// [`LocalFs`] is the real implementation. The trait exists so the repository
/// can be driven against a store that fails on demand.
pub trait FileStore {
    /// Creates a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;

    /// Reads a whole UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError>;

    /// Replaces the file at `path` with `contents`.
    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError>;

    /// Deletes the file at `path`.
    fn remove(&self, path: &Path) -> Result<(), FsError>;
}

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileStore for LocalFs {
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        read_text(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        write_atomic(path, contents)
    }

    fn remove(&self, path: &Path) -> Result<(), FsError> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }
}

/// Reads a UTF-8 text file, stripping a leading byte order mark.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

/// Writes a text file atomically.
///
/// Uses a temporary file in the destination directory and an atomic rename,
/// so readers see either the old file or the new one. The parent directory
/// must exist.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(FsError::ParentNotFound { path: path.into() }),
    };

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;

    temp.write_all(contents.as_bytes())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    // ===========================================
    // FsError
    // ===========================================

    #[test]
    fn fs_error_not_found_displays_path() {
        let error = FsError::NotFound {
            path: PathBuf::from("/some/path.txt"),
        };
        assert!(error.to_string().contains("/some/path.txt"));
    }

    #[test]
    fn fs_error_from_io_maps_not_found() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = FsError::from_io(Path::new("/test/path.txt"), io_error);
        assert!(error.is_not_found());
    }

    #[test]
    fn fs_error_from_io_maps_permission_denied() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let error = FsError::from_io(Path::new("/test/path.txt"), io_error);
        assert!(matches!(error, FsError::PermissionDenied { .. }));
    }

    #[test]
    fn fs_error_from_io_maps_other_to_io() {
        let io_error = io::Error::other("some other error");
        let error = FsError::from_io(Path::new("/test/path.txt"), io_error);
        assert!(matches!(error, FsError::Io { .. }));
    }

    // ===========================================
    // read_text
    // ===========================================

    #[test]
    fn read_text_returns_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello\nworld").unwrap();
        assert_eq!(read_text(&path).unwrap(), "hello\nworld");
    }

    #[test]
    fn read_text_strips_utf8_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bom.txt");
        fs::write(&path, "\u{FEFF}body").unwrap();
        assert_eq!(read_text(&path).unwrap(), "body");
    }

    #[test]
    fn read_text_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [b'o', b'k', 0xFF, 0xFE]).unwrap();
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, FsError::InvalidEncoding { .. }));
        assert!(err.to_string().contains("byte 2"));
    }

    // ===========================================
    // write_atomic
    // ===========================================

    #[test]
    fn write_atomic_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new.txt");
        write_atomic(&path, "content").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn write_atomic_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("over.txt");
        fs::write(&path, "old content that is longer").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_atomic_returns_parent_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("file.txt");
        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, FsError::ParentNotFound { .. }));
    }

    #[test]
    fn write_atomic_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        write_atomic(&dir.path().join("only.txt"), "x").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    // ===========================================
    // LocalFs
    // ===========================================

    #[test]
    fn local_fs_remove_deletes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.txt");
        fs::write(&path, "x").unwrap();

        let store = LocalFs;
        store.remove(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn local_fs_remove_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = LocalFs.remove(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn local_fs_create_dir_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        LocalFs.create_dir_all(&nested).unwrap();
        LocalFs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
