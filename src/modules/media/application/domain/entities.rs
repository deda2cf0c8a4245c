use std::fmt;

use super::policies::UploadPolicy;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageUploadError {
    #[error("File name cannot be empty")]
    EmptyFileName,

    #[error("File name must not exceed {0} characters")]
    FileNameTooLong(usize),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("File is empty")]
    EmptyFile,

    #[error("File must not exceed {0} bytes")]
    FileTooLarge(usize),

    #[error("Image data is not valid base64")]
    InvalidEncoding,
}

/// An image accepted by the upload policy, ready to hand to an `ImageStorage`.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn try_new(
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
        policy: &UploadPolicy,
    ) -> Result<Self, ImageUploadError> {
        policy.check(&file_name, &content_type, bytes.len())?;

        Ok(Self {
            file_name: file_name.trim().to_string(),
            content_type: content_type.trim().to_ascii_lowercase(),
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

// Raw bytes stay out of logs.
impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}
