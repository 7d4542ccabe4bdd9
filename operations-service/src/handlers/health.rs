use crate::dtos::HealthResponse;
use axum::Json;

pub async fn check_health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
