use actix_web::HttpResponse;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    media::application::domain::{
        entities::{ImageUpload, ImageUploadError},
        policies::UploadPolicy,
    },
    shared::api::ApiResponse,
};

/// Inline image sent with a JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImagePayload {
    #[schema(example = "cover.jpg")]
    pub file_name: String,

    #[schema(example = "image/jpeg")]
    pub content_type: String,

    /// Base64 encoded file content
    pub data: String,
}

impl ImagePayload {
    pub fn into_upload(self, policy: &UploadPolicy) -> Result<ImageUpload, ImageUploadError> {
        // Accept data URLs ("data:image/png;base64,....") as well as bare base64.
        let encoded = match self.data.split_once(";base64,") {
            Some((_, rest)) => rest,
            None => self.data.as_str(),
        };

        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|_| ImageUploadError::InvalidEncoding)?;

        ImageUpload::try_new(self.file_name, self.content_type, bytes, policy)
    }

    pub fn decode_optional(
        payload: Option<ImagePayload>,
        policy: &UploadPolicy,
    ) -> Result<Option<ImageUpload>, ImageUploadError> {
        payload.map(|p| p.into_upload(policy)).transpose()
    }
}

pub fn map_image_error(err: ImageUploadError) -> HttpResponse {
    ApiResponse::bad_request("INVALID_IMAGE", &err.to_string())
}
