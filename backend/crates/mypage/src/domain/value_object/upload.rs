//! Upload Value Objects

use std::fmt;

use platform::upload::{UploadPathError, validate_file_name};

/// A file received from the client, consumed once by the store use case
#[derive(Clone, Default)]
pub struct UploadedFile {
    original_name: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(original_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            original_name: original_name.into(),
            bytes: bytes.into(),
        }
    }

    /// No file was chosen, or it had no content
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.original_name, self.bytes)
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("original_name", &self.original_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Original file name, checked to be a single path component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFileName(String);

impl StoredFileName {
    pub fn parse(name: impl Into<String>) -> Result<Self, UploadPathError> {
        let name = name.into();
        validate_file_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
