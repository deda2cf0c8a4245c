use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::media::application::{
    domain::entities::ImageUpload,
    ports::outgoing::{ImageStorage, ImageStorageError},
};

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Internal seam to make the adapter testable without a live image host.
#[async_trait]
trait UploadClient: Send + Sync {
    /// Returns the HTTP status code and the raw response body.
    async fn post_image(
        &self,
        endpoint: &str,
        token: Option<&str>,
        image: ImageUpload,
    ) -> anyhow::Result<(u16, String)>;
}

struct ReqwestUploadClient {
    http: reqwest::Client,
}

#[async_trait]
impl UploadClient for ReqwestUploadClient {
    async fn post_image(
        &self,
        endpoint: &str,
        token: Option<&str>,
        image: ImageUpload,
    ) -> anyhow::Result<(u16, String)> {
        let mut request = self
            .http
            .post(endpoint)
            .header(reqwest::header::CONTENT_TYPE, image.content_type().to_string())
            .header("X-File-Name", image.file_name().to_string());

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .body(image.into_bytes())
            .send()
            .await
            .context("sending image to host")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("reading image host response")?;

        Ok((status, body))
    }
}

/// Uploads raw image bytes to `IMAGE_UPLOAD_URL`; the host answers `{"url": "..."}`.
#[derive(Clone)]
pub struct HttpImageStorage {
    endpoint: String,
    token: Option<String>,
    client: Arc<dyn UploadClient>,
}

impl HttpImageStorage {
    pub fn new(endpoint: String, token: Option<String>) -> Result<Self, ImageStorageError> {
        let http = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| ImageStorageError::Infrastructure(e.to_string()))?;

        Ok(Self {
            endpoint,
            token,
            client: Arc::new(ReqwestUploadClient { http }),
        })
    }

    #[cfg(test)]
    fn with_client(endpoint: &str, client: Arc<dyn UploadClient>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            token: None,
            client,
        }
    }
}

fn parse_url(body: &str) -> anyhow::Result<String> {
    let parsed: UploadResponse =
        serde_json::from_str(body).context("image host response is not valid JSON")?;

    anyhow::ensure!(
        !parsed.url.trim().is_empty(),
        "image host returned an empty url"
    );

    Ok(parsed.url)
}

fn interpret_response(status: u16, body: &str) -> Result<String, ImageStorageError> {
    match status {
        200..=299 => parse_url(body).map_err(|e| ImageStorageError::Rejected(format!("{:#}", e))),
        400..=499 => Err(ImageStorageError::Rejected(format!("status {}", status))),
        _ => Err(ImageStorageError::Infrastructure(format!("status {}", status))),
    }
}

#[async_trait]
impl ImageStorage for HttpImageStorage {
    async fn upload(&self, image: ImageUpload) -> Result<String, ImageStorageError> {
        let (status, body) = self
            .client
            .post_image(&self.endpoint, self.token.as_deref(), image)
            .await
            .map_err(|e| ImageStorageError::Infrastructure(format!("{:#}", e)))?;

        interpret_response(status, &body)
    }
}
