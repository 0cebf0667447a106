//! Image upload client methods

use super::{ApiClient, ClientError};
use crate::types::UploadResponse;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

/// Largest image the backend accepts
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Image MIME types the backend accepts
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// An image checked against the backend's upload limits
#[derive(Debug, Clone)]
pub struct ImageUpload {
    file_name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Validate an image before upload
    pub fn new(
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ClientError> {
        let mime = mime.into();
        if !ALLOWED_IMAGE_TYPES.contains(&mime.as_str()) {
            return Err(ClientError::InvalidUpload(
                "Please select a valid image file (jpg, png, gif, webp)".into(),
            ));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ClientError::InvalidUpload(
                "Image size must be less than 5MB".into(),
            ));
        }

        Ok(Self {
            file_name: file_name.into(),
            mime,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl ApiClient {
    /// Upload an image, returning the URL it is hosted at
    pub async fn upload_image(&self, image: ImageUpload) -> Result<UploadResponse, ClientError> {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime)?;
        let form = Form::new().part("image", part);

        let request = self.request(Method::POST, "/upload").multipart(form);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unsupported_type() {
        let result = ImageUpload::new("doc.pdf", "application/pdf", vec![1, 2, 3]);
        assert!(matches!(result, Err(ClientError::InvalidUpload(_))));
    }

    #[test]
    fn test_rejects_oversized_image() {
        let result = ImageUpload::new("big.png", "image/png", vec![0; MAX_IMAGE_BYTES + 1]);
        let error = result.unwrap_err();
        assert_eq!(
            error.backend_message().as_deref(),
            Some("Image size must be less than 5MB")
        );
    }

    #[test]
    fn test_accepts_image_at_limit() {
        let image = ImageUpload::new("ok.webp", "image/webp", vec![0; MAX_IMAGE_BYTES]).unwrap();
        assert_eq!(image.len(), MAX_IMAGE_BYTES);
        assert_eq!(image.file_name(), "ok.webp");
    }
}
