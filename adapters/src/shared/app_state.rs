use std::sync::Arc;

use axum::extract::FromRef;

use domain::money::CurrencyPrecision;
use wallet_application::{
    infrastructure_config::Config,
    ports::incoming::{health::HealthQueryUseCase, wallet::WalletUseCase},
};

use crate::incoming::http_axum::auth::jwt::JwtVerifier;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wallet_use_case: Arc<dyn WalletUseCase + Send + Sync>,
    pub health_query: Arc<dyn HealthQueryUseCase + Send + Sync>,
    pub jwt_verifier: Arc<JwtVerifier>,
    pub precision: CurrencyPrecision,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        wallet_use_case: Arc<dyn WalletUseCase + Send + Sync>,
        health_query: Arc<dyn HealthQueryUseCase + Send + Sync>,
        jwt_verifier: Arc<JwtVerifier>,
        precision: CurrencyPrecision,
    ) -> Self {
        Self {
            config,
            wallet_use_case,
            health_query,
            jwt_verifier,
            precision,
        }
    }
}

impl FromRef<AppState> for Arc<JwtVerifier> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.jwt_verifier)
    }
}
