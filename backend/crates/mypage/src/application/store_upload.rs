//! Store Upload Use Case
//!
//! Saves an uploaded file under its original name and returns the public
//! path clients load it from.

use crate::application::config::MyPageConfig;
use crate::domain::service::FileStore;
use crate::domain::value_object::upload::{StoredFileName, UploadedFile};
use crate::error::MyPageResult;

/// Store upload use case
pub struct StoreUploadUseCase<'a, F>
where
    F: FileStore + Sync,
{
    store: &'a F,
    config: &'a MyPageConfig,
}

impl<'a, F> StoreUploadUseCase<'a, F>
where
    F: FileStore + Sync,
{
    pub fn new(store: &'a F, config: &'a MyPageConfig) -> Self {
        Self { store, config }
    }

    /// `None` when nothing was uploaded.
    ///
    /// An existing file with the same name is overwritten.
    pub async fn execute(&self, upload: UploadedFile) -> MyPageResult<Option<String>> {
        if upload.is_empty() {
            tracing::debug!("No file uploaded");
            return Ok(None);
        }

        let (original_name, bytes) = upload.into_parts();
        let file_name = StoredFileName::parse(original_name)?;

        self.store.store(&file_name, &bytes).await?;

        let path = self.config.public_path(file_name.as_str());

        tracing::info!(file_name = %file_name, size = bytes.len(), %path, "Upload stored");

        Ok(Some(path))
    }
}
