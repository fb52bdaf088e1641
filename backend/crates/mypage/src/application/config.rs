//! Application Configuration
//!
//! Configuration for the My Page application layer.

use std::path::PathBuf;

use crate::error::{MyPageError, MyPageResult};

/// Route the upload directory is served under, relative to the router
pub const FILES_ROUTE: &str = "/file";

/// My Page application configuration
#[derive(Debug, Clone)]
pub struct MyPageConfig {
    /// Directory uploaded files are written into
    pub upload_dir: PathBuf,
    /// Public URL prefix the upload directory is served under (ends with `/`)
    pub upload_url_prefix: String,
    /// Largest accepted request body for uploads
    pub max_upload_bytes: usize,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for MyPageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploadFiles/test"),
            upload_url_prefix: "/myPage/file/".to_string(),
            max_upload_bytes: 10 * 1024 * 1024, // 10 MiB
            password_pepper: None,
        }
    }
}

impl MyPageConfig {
    /// Config with uploads written below `upload_dir`
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            ..Default::default()
        }
    }

    /// Public path a stored file is reachable under
    pub fn public_path(&self, file_name: &str) -> String {
        format!("{}{}", self.upload_url_prefix, file_name)
    }

    /// Reject a URL prefix that does not point at [`FILES_ROUTE`].
    ///
    /// Paths handed out by the upload use case would not resolve otherwise.
    pub fn validate(&self) -> MyPageResult<()> {
        let served = format!("{FILES_ROUTE}/");
        if !self.upload_url_prefix.ends_with(&served) {
            return Err(MyPageError::Internal(format!(
                "upload_url_prefix {:?} must end with {served:?}",
                self.upload_url_prefix
            )));
        }
        Ok(())
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
