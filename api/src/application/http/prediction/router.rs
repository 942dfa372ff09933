use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::predict_image::{__path_predict_image, predict_image};
use crate::application::http::server::app_state::AppState;

// Multipart framing on top of the raw file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(predict_image))]
pub struct PredictionApiDoc;

pub fn prediction_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/predict-image", state.args.server.root_path),
            post(predict_image),
        )
        .layer(DefaultBodyLimit::max(
            state.args.server.max_upload_bytes + MULTIPART_OVERHEAD,
        ))
}
