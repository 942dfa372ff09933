use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_classes::{__path_get_classes, get_classes},
    get_model_status::{__path_get_model_status, get_model_status},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_model_status, get_classes))]
pub struct ModelApiDoc;

pub fn model_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/model-status", state.args.server.root_path),
            get(get_model_status),
        )
        .route(
            &format!("{}/classes", state.args.server.root_path),
            get(get_classes),
        )
}
