use async_trait::async_trait;

use crate::media::application::{
    domain::entities::ImageUpload,
    ports::outgoing::{ImageStorage, ImageStorageError},
};

/// Used when no image host is configured. Every upload fails, which callers
/// treat like any other failed upload.
#[derive(Debug, Clone, Default)]
pub struct DisabledImageStorage;

#[async_trait]
impl ImageStorage for DisabledImageStorage {
    async fn upload(&self, _image: ImageUpload) -> Result<String, ImageStorageError> {
        Err(ImageStorageError::NotConfigured)
    }
}
