use axum::{Json, extract::State};
use tracing::instrument;

use crate::incoming::http_axum::{
    auth::jwt::AuthenticatedUser,
    core::extractors::{AmountPayload, WalletPath, extract_amount, extract_wallet_id},
    dto::responses::{ApiResponse, WalletBalanceResponse},
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;
use wallet_application::wallet::WalletBalance;

type WalletJson = Json<ApiResponse<WalletBalanceResponse>>;
type WalletResponse = Result<WalletJson, HttpError>;

fn respond(state: &AppState, balance: &WalletBalance) -> WalletJson {
    let data = WalletBalanceResponse::from_balance(balance, state.precision);
    Json(ApiResponse::success_with_data(Some(data)))
}

#[instrument(skip(state, user, path), fields(user_id = %user.user_id))]
pub async fn get_balance(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    path: WalletPath,
) -> WalletResponse {
    let wallet_id = extract_wallet_id(path)?;

    let balance = state
        .wallet_use_case
        .balance(user.user_id, wallet_id)
        .await
        .map_err(HttpError)?;

    Ok(respond(&state, &balance))
}

#[instrument(skip(state, user, path, payload), fields(user_id = %user.user_id))]
pub async fn credit_wallet(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    path: WalletPath,
    payload: AmountPayload,
) -> WalletResponse {
    let wallet_id = extract_wallet_id(path)?;
    let amount = extract_amount(payload)?;

    let balance = state
        .wallet_use_case
        .credit(user.user_id, wallet_id, amount)
        .await
        .map_err(HttpError)?;

    Ok(respond(&state, &balance))
}

#[instrument(skip(state, user, path, payload), fields(user_id = %user.user_id))]
pub async fn debit_wallet(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    path: WalletPath,
    payload: AmountPayload,
) -> WalletResponse {
    let wallet_id = extract_wallet_id(path)?;
    let amount = extract_amount(payload)?;

    let balance = state
        .wallet_use_case
        .debit(user.user_id, wallet_id, amount)
        .await
        .map_err(HttpError)?;

    Ok(respond(&state, &balance))
}
