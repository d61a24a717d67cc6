use axum::extract::{Multipart, State};
use base64::Engine;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use labelwise_core::domain::label_analysis::ports::LabelAnalysisService;
use labelwise_core::domain::label_analysis::value_objects::AnalyzeLabelInput;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Analysis object exactly as produced by the model.
    #[schema(value_type = Object)]
    pub analysis: Value,
    /// Source image with text regions outlined, base64-encoded JPEG.
    pub highlighted_image: String,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "label-analysis",
    summary = "Analyze a food label image",
    description = "Runs OCR on the uploaded label, analyzes the extracted text, and returns the \
                   analysis with a highlighted copy of the image",
    responses(
        (status = 200, body = AnalyzeResponse),
        (status = 400, body = crate::application::http::server::api_entities::api_error::ErrorResponse)
    )
)]
pub async fn analyze_label(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            let content_type = field.content_type().unwrap_or("").to_string();
            if !content_type.starts_with("image/") {
                return Err(ApiError::BadRequest(
                    "Uploaded file must be an image".to_string(),
                ));
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

            if data.len() > MAX_IMAGE_SIZE {
                return Err(ApiError::BadRequest(format!(
                    "Image too large. Max size is {} bytes",
                    MAX_IMAGE_SIZE
                )));
            }

            image_data = Some(data.to_vec());
        }
    }

    let image = image_data.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let result = state
        .service
        .analyze_label(AnalyzeLabelInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeResponse {
        analysis: Value::Object(result.analysis),
        highlighted_image: general_purpose::STANDARD.encode(result.highlighted_image),
    }))
}
