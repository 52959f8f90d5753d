use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use rust_decimal::Decimal;

use crate::incoming::http_axum::{dto::requests::AmountRequest, error_mapper::HttpError};
use domain::wallet::WalletId;
use wallet_application::error::AppError;

pub type WalletPath = Result<Path<i64>, PathRejection>;
pub type AmountPayload = Result<Json<AmountRequest>, JsonRejection>;

pub fn extract_wallet_id(path: WalletPath) -> Result<WalletId, HttpError> {
    let Path(raw_id) = path.map_err(|_| {
        HttpError(AppError::ValidationError {
            message: "wallet id must be a positive integer".to_string(),
        })
    })?;

    WalletId::new(raw_id).map_err(|e| HttpError(AppError::from(e)))
}

pub fn extract_amount(payload: AmountPayload) -> Result<Decimal, HttpError> {
    let Json(request) = payload.map_err(|rejection| {
        HttpError(AppError::ValidationError {
            message: rejection.body_text(),
        })
    })?;

    request.to_decimal().map_err(HttpError)
}
