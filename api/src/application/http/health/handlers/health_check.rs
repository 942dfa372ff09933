use axum::Json;
use foodhealth_core::domain::health::entities::HealthStatus;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthStatus)
    ),
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
