use async_trait::async_trait;

use crate::media::application::domain::entities::ImageUpload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStorageError {
    #[error("Image uploads are not configured")]
    NotConfigured,

    #[error("Image host rejected the upload: {0}")]
    Rejected(String),

    #[error("Image host unavailable: {0}")]
    Infrastructure(String),
}

/// External image host. Returns the public URL of the stored image.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn upload(&self, image: ImageUpload) -> Result<String, ImageStorageError>;
}
