use axum::extract::State;
use foodhealth_core::domain::health::{entities::FoodClass, ports::ModelStatusService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetClassesResponse {
    pub total: usize,
    pub data: Vec<FoodClass>,
}

#[utoipa::path(
    get,
    path = "/classes",
    tag = "model",
    summary = "List classifier labels",
    description = "Every label the classifier can predict, sorted alphabetically, flagged with nutrition data availability",
    responses(
        (status = 200, body = GetClassesResponse)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
) -> Result<Response<GetClassesResponse>, ApiError> {
    let data = state.service.list_classes();

    Ok(Response::OK(GetClassesResponse {
        total: data.len(),
        data,
    }))
}
