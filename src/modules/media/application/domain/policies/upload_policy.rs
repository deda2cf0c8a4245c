use crate::media::application::domain::entities::ImageUploadError;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];

    /// Env var: `IMAGE_MAX_UPLOAD_BYTES`, falls back to 5MB.
    pub fn from_env() -> Self {
        let max_file_size_bytes = std::env::var("IMAGE_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &usize| *v > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    pub fn check(
        &self,
        file_name: &str,
        content_type: &str,
        size_bytes: usize,
    ) -> Result<(), ImageUploadError> {
        let file_name = file_name.trim();

        if file_name.is_empty() {
            return Err(ImageUploadError::EmptyFileName);
        }

        if file_name.len() > self.max_file_name_len {
            return Err(ImageUploadError::FileNameTooLong(self.max_file_name_len));
        }

        if !self
            .allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type.trim()))
        {
            return Err(ImageUploadError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }

        if size_bytes == 0 {
            return Err(ImageUploadError::EmptyFile);
        }

        if size_bytes > self.max_file_size_bytes {
            return Err(ImageUploadError::FileTooLarge(self.max_file_size_bytes));
        }

        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}
