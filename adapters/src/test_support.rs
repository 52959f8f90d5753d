use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;

use crate::incoming::http_axum::auth::jwt::{JwtVerifier, tests::SECRET};
use crate::shared::app_state::AppState;
use domain::money::{CurrencyPrecision, MinorUnits};
use domain::wallet::{BalanceChange, UserId, Wallet, WalletId};
use wallet_application::{
    error::{AppError, AppResult},
    health::HealthReport,
    infrastructure_config::Config,
    ports::incoming::{health::HealthQueryUseCase, wallet::WalletUseCase},
    wallet::WalletBalance,
};

/// Single-wallet use case double that applies changes in memory.
pub struct StubWallet {
    wallet: Mutex<Wallet>,
}

impl StubWallet {
    #[allow(clippy::unwrap_used)]
    pub fn with_balance(wallet_id: i64, owner: i64, balance: i64) -> Self {
        Self {
            wallet: Mutex::new(Wallet::new(
                WalletId::new(wallet_id).unwrap(),
                UserId::new(owner).unwrap(),
                "Main".to_string(),
                MinorUnits::new(balance),
            )),
        }
    }

    #[allow(clippy::unwrap_used)]
    fn apply(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        change: Option<BalanceChange>,
    ) -> AppResult<WalletBalance> {
        let mut wallet = self.wallet.lock().unwrap();
        if wallet.id != wallet_id || wallet.user_id != user_id {
            return Err(AppError::NotFound);
        }
        if let Some(change) = change {
            wallet.balance = wallet.balance_after(change)?;
        }
        Ok(WalletBalance::new(user_id, wallet_id, wallet.balance))
    }
}

#[async_trait::async_trait]
impl WalletUseCase for StubWallet {
    async fn balance(&self, user_id: UserId, wallet_id: WalletId) -> AppResult<WalletBalance> {
        self.apply(user_id, wallet_id, None)
    }

    async fn credit(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        amount: Decimal,
    ) -> AppResult<WalletBalance> {
        let amount = CurrencyPrecision::CENTS.to_minor_units(amount)?;
        self.apply(user_id, wallet_id, Some(BalanceChange::Credit(amount)))
    }

    async fn debit(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        amount: Decimal,
    ) -> AppResult<WalletBalance> {
        let amount = CurrencyPrecision::CENTS.to_minor_units(amount)?;
        self.apply(user_id, wallet_id, Some(BalanceChange::Debit(amount)))
    }
}

pub struct StubHealth {
    report: HealthReport,
}

impl StubHealth {
    pub fn healthy() -> Self {
        Self {
            report: HealthReport {
                database: true,
                cache: true,
            },
        }
    }

    pub fn cache_down() -> Self {
        Self {
            report: HealthReport {
                database: true,
                cache: false,
            },
        }
    }
}

#[async_trait::async_trait]
impl HealthQueryUseCase for StubHealth {
    async fn check(&self) -> HealthReport {
        self.report
    }
}

pub fn app_state(wallet: StubWallet, health: StubHealth) -> AppState {
    AppState::new(
        Arc::new(Config::default()),
        Arc::new(wallet),
        Arc::new(health),
        Arc::new(JwtVerifier::new(SECRET, 0)),
        CurrencyPrecision::CENTS,
    )
}
