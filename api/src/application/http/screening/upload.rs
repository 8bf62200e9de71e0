use axum::extract::Multipart;
use sfie_core::domain::screening::value_objects::UploadedImage;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const MAX_UPLOAD_SIZE: usize = 5 * MAX_IMAGE_SIZE;

const IMAGE_FIELD: &str = "image";

/// Collects every `image` part of a multipart form. Extension checks are
/// left to the core so the whole batch is judged by one rule.
pub async fn read_images(mut multipart: Multipart) -> Result<Vec<UploadedImage>, ApiError> {
    let mut images = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(|name| name.to_string())
            .ok_or_else(|| ApiError::BadRequest("Image part has no file name".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        images.push(UploadedImage::new(file_name, data));
    }

    if images.is_empty() {
        return Err(ApiError::BadRequest("Missing image field".to_string()));
    }

    Ok(images)
}
