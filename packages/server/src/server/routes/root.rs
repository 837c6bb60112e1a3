use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    message: String,
    status: String,
}

/// Liveness/info endpoint
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Household Reuse Platform API".to_string(),
        status: "running".to_string(),
    })
}
