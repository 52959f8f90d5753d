use axum::{
    Router,
    routing::{get, post},
};

use crate::incoming::http_axum::{
    handlers::{
        health::{health_check, ping},
        wallet::{credit_wallet, debit_wallet, get_balance},
    },
    router_ext::RouterExt,
};
use crate::shared::app_state::AppState;

pub fn build_application_router() -> Router<AppState> {
    build_core_routes().merge(build_wallet_routes())
}

fn build_core_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health_check))
        .with_request_id()
}

fn build_wallet_routes() -> Router<AppState> {
    Router::new()
        .route("/wallet/{wallet_id}/balance", get(get_balance))
        .route("/wallet/{wallet_id}/credit", post(credit_wallet))
        .route("/wallet/{wallet_id}/debit", post(debit_wallet))
        .with_request_id()
}
