use axum::extract::State;
use foodhealth_core::domain::health::{entities::ModelStatus, ports::ModelStatusService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/model-status",
    tag = "model",
    summary = "Describe the loaded classifier",
    description = "Reports model type, class count, training accuracy and how many classes have nutrition data",
    responses(
        (status = 200, body = ModelStatus)
    ),
)]
pub async fn get_model_status(
    State(state): State<AppState>,
) -> Result<Response<ModelStatus>, ApiError> {
    Ok(Response::OK(state.service.model_status()))
}
