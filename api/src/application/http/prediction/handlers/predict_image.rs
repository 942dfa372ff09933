use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use foodhealth_core::domain::prediction::{entities::PredictionResponse, ports::PredictionService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const FILE_FIELD: &str = "file";

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PredictImageForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/predict-image",
    tag = "prediction",
    summary = "Classify a food image",
    description = "Classifies an uploaded food photo, looks up its nutrition data and computes a 0-10 health index",
    request_body(content = PredictImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = PredictionResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse)
    ),
)]
pub async fn predict_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<PredictionResponse>, ApiError> {
    let max_size = state.args.server.max_upload_bytes;
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file", e))?;

        if data.len() > max_size {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                max_size
            )));
        }

        image_data = Some(data.to_vec());
        break;
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    tracing::debug!(bytes = image_data.len(), "received image upload");

    let prediction = state
        .service
        .predict_image(image_data)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(prediction))
}

/// Body-limit overruns keep their 413; every other multipart failure is a bad request.
fn multipart_error(context: &str, error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(format!("Image too large: {}", error.body_text()))
    } else {
        ApiError::BadRequest(format!("{context}: {error}"))
    }
}
