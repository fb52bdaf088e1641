//! Upload Directory
//!
//! Writes client-supplied files into a single base directory.
//! File names are kept verbatim but must be a single path component, so a
//! name can never resolve outside the base directory.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a client file name is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadPathError {
    #[error("File name is empty")]
    Empty,

    #[error("File name must not contain path separators")]
    PathSeparator,

    #[error("File name must not be a relative path component")]
    RelativeComponent,

    #[error("File name contains a NUL byte")]
    NulByte,
}

/// Check that `file_name` is one plain path component
///
/// ```
/// use platform::upload::{validate_file_name, UploadPathError};
///
/// assert!(validate_file_name("photo.png").is_ok());
/// assert_eq!(validate_file_name("../etc/passwd"), Err(UploadPathError::PathSeparator));
/// ```
pub fn validate_file_name(file_name: &str) -> Result<(), UploadPathError> {
    if file_name.is_empty() {
        return Err(UploadPathError::Empty);
    }
    if file_name.contains('\0') {
        return Err(UploadPathError::NulByte);
    }
    // Both separators are rejected regardless of host OS
    if file_name.contains('/') || file_name.contains('\\') {
        return Err(UploadPathError::PathSeparator);
    }
    if file_name == "." || file_name == ".." {
        return Err(UploadPathError::RelativeComponent);
    }
    Ok(())
}

/// Base directory that uploads are written into
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Destination path for `file_name`
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf, UploadPathError> {
        validate_file_name(file_name)?;
        Ok(self.root.join(file_name))
    }

    /// Create the base directory if it does not exist yet
    pub async fn ensure_exists(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Write `bytes` to an already resolved path, replacing any existing file
    pub async fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(path, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_verbatim() {
        let dir = UploadDir::new("/srv/uploads");
        for name in ["photo.png", "my photo (1).jpg", "사진.png", ".hidden", "a..b"] {
            assert_eq!(dir.resolve(name).unwrap(), Path::new("/srv/uploads").join(name));
        }
    }

    #[test]
    fn test_rejects_escaping_names() {
        assert_eq!(validate_file_name(""), Err(UploadPathError::Empty));
        assert_eq!(validate_file_name("."), Err(UploadPathError::RelativeComponent));
        assert_eq!(validate_file_name(".."), Err(UploadPathError::RelativeComponent));
        assert_eq!(validate_file_name("a/b.png"), Err(UploadPathError::PathSeparator));
        assert_eq!(validate_file_name("..\\win.ini"), Err(UploadPathError::PathSeparator));
        assert_eq!(validate_file_name("/etc/passwd"), Err(UploadPathError::PathSeparator));
        assert_eq!(validate_file_name("x\0.png"), Err(UploadPathError::NulByte));
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = UploadDir::new(tmp.path().join("nested"));
        dir.ensure_exists().await.unwrap();

        let path = dir.resolve("photo.png").unwrap();
        dir.write(&path, b"first").await.unwrap();
        dir.write(&path, b"second").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_write_fails_without_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = UploadDir::new(tmp.path().join("missing"));
        let path = dir.resolve("photo.png").unwrap();

        let err = dir.write(&path, b"data").await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
