use crate::application::http::{
    health::router::HealthApiDoc, model::router::ModelApiDoc,
    prediction::router::PredictionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Health Classifier API"
    ),
    tags(
        (name = "prediction", description = "Food image classification and health scoring"),
        (name = "model", description = "Loaded classifier introspection"),
        (name = "health", description = "Service liveness"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Root document with every route group merged in.
    pub fn full() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
            .merge_from(PredictionApiDoc::openapi())
            .merge_from(ModelApiDoc::openapi())
            .merge_from(HealthApiDoc::openapi())
    }
}
