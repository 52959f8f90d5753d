use axum::{Json, extract::State, http::StatusCode};

use crate::incoming::http_axum::dto::responses::{ApiResponse, HealthResponse, PingResponse};
use crate::shared::app_state::AppState;

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let report = state.health_query.check().await;
    let healthy = report.is_healthy();
    let data = Some(HealthResponse::from(report));

    if healthy {
        (StatusCode::OK, Json(ApiResponse::success_with_data(data)))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::failure_with_data(
                "Service unavailable".to_string(),
                data,
            )),
        )
    }
}
