use actix_multipart::Multipart;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures_util::TryStreamExt;

use super::AppError;
use crate::models::projects::UploadedImage;

pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024; // 5MB

pub fn to_data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

/// Splits a base64 `data:` URI into its content type and decoded bytes.
pub fn parse_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let content_type = meta.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload).ok()?;
    let content_type = if content_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        content_type.to_string()
    };
    Some((content_type, bytes))
}

pub fn check_image(content_type: &str, size: usize) -> Result<(), AppError> {
    if !content_type.starts_with("image/") {
        return Err(AppError::bad_request(
            "Invalid format, please select an image (PNG, JPG, SVG, ...)",
        ));
    }
    if size > MAX_IMAGE_SIZE {
        return Err(AppError::bad_request("File too large, the maximum size is 5 MB"));
    }
    Ok(())
}

/// Reads every file field of a multipart upload as an inline image. The whole
/// upload is refused if any file is not an image or exceeds the size limit.
pub async fn read_images(mut payload: Multipart) -> Result<Vec<UploadedImage>, AppError> {
    let mut images = Vec::new();
    let mut rejection: Option<AppError> = None;

    while let Some(mut field) = payload.try_next().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {:?}", e);
        AppError::bad_request("Invalid file upload format")
    })? {
        let is_file = field.content_disposition().get_filename().is_some();
        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = Vec::new();
        let mut size = 0usize;
        // Oversized files are drained without buffering so the client still gets
        // a clean response.
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::bad_request(format!("Failed to read file data: {}", e)))?
        {
            size += chunk.len();
            if size <= MAX_IMAGE_SIZE {
                bytes.extend_from_slice(&chunk);
            }
        }

        if !is_file || rejection.is_some() {
            continue;
        }
        match check_image(&content_type, size) {
            Ok(()) => images.push(UploadedImage {
                data_uri: to_data_uri(&content_type, &bytes),
                content_type,
                size,
            }),
            Err(e) => rejection = Some(e),
        }
    }

    if let Some(e) = rejection {
        return Err(e);
    }
    if images.is_empty() {
        return Err(AppError::bad_request("At least one image file is required"));
    }
    Ok(images)
}
