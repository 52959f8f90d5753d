use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error, warn};

use domain::error::DomainError;
use wallet_application::error::AppError;

#[derive(Debug)]
pub struct HttpError(pub AppError);

fn status_and_message(app_error: &AppError) -> (StatusCode, String) {
    match app_error {
        AppError::Domain(DomainError::InvalidIdentifier(_))
        | AppError::InvalidAmount { .. }
        | AppError::ValidationError { .. } => (StatusCode::BAD_REQUEST, app_error.to_string()),

        AppError::NotFound => (StatusCode::NOT_FOUND, app_error.to_string()),

        // Amounts stay in the logs.
        AppError::InsufficientFunds { .. } => (
            StatusCode::NOT_ACCEPTABLE,
            "Insufficient funds".to_string(),
        ),

        AppError::BalanceConflict => (StatusCode::CONFLICT, app_error.to_string()),

        AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),

        AppError::StoreUnavailable { .. } | AppError::StoreTimeout => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Database unavailable".to_string(),
        ),

        AppError::CacheUnavailable { .. } | AppError::CacheTimeout => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Cache unavailable".to_string(),
        ),

        AppError::Domain(DomainError::ConfigError { .. }) | AppError::ConfigError { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Configuration error".to_string(),
        ),

        AppError::IoError(_) | AppError::InternalServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let app_error = &self.0;
        let (status_code, message) = status_and_message(app_error);

        if status_code.is_server_error() {
            if app_error.is_retryable() {
                warn!("Dependency failure response generated: {}", app_error);
            } else {
                error!("Server error response generated: {}", app_error);
            }
        } else {
            debug!("Client error response generated: {}", app_error);
        }

        let error_response = json!({
            "ok": false,
            "error": message,
            "status": status_code.as_u16()
        });

        (status_code, Json(error_response)).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}
