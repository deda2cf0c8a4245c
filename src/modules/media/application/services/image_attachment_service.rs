use std::fmt;
use std::sync::Arc;

use crate::media::application::{
    domain::entities::ImageUpload, ports::outgoing::ImageStorage,
};

/// Best-effort image upload. A failed upload never fails the caller's write;
/// it is logged and the caller proceeds without a new URL.
#[derive(Clone)]
pub struct ImageAttachmentService {
    storage: Arc<dyn ImageStorage + Send + Sync>,
}

impl fmt::Debug for ImageAttachmentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachmentService")
            .field("storage", &"<dyn ImageStorage>")
            .finish()
    }
}

impl ImageAttachmentService {
    pub fn new(storage: Arc<dyn ImageStorage + Send + Sync>) -> Self {
        Self { storage }
    }

    pub async fn upload_or_skip(&self, image: Option<ImageUpload>, purpose: &str) -> Option<String> {
        let image = image?;
        let file_name = image.file_name().to_string();

        match self.storage.upload(image).await {
            Ok(url) => {
                tracing::debug!("Uploaded {} image {}", purpose, file_name);
                Some(url)
            }
            Err(e) => {
                tracing::warn!(
                    "Continuing without {} image, upload of {} failed: {}",
                    purpose,
                    file_name,
                    e
                );
                None
            }
        }
    }
}
