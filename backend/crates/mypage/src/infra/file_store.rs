//! On-disk file store

use platform::upload::UploadDir;

use crate::domain::service::FileStore;
use crate::domain::value_object::upload::StoredFileName;
use crate::error::MyPageResult;

/// [`FileStore`] writing into one local directory
#[derive(Debug, Clone)]
pub struct DiskFileStore {
    dir: UploadDir,
}

impl DiskFileStore {
    pub fn new(dir: UploadDir) -> Self {
        Self { dir }
    }

    /// Create the upload directory; called once at startup
    pub async fn prepare(&self) -> MyPageResult<()> {
        self.dir.ensure_exists().await?;
        Ok(())
    }
}

impl FileStore for DiskFileStore {
    async fn store(&self, file_name: &StoredFileName, bytes: &[u8]) -> MyPageResult<()> {
        let path = self.dir.resolve(file_name.as_str())?;
        self.dir.write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), "File written");
        Ok(())
    }
}
