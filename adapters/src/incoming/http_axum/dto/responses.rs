use serde::Serialize;

use domain::money::CurrencyPrecision;
use wallet_application::health::HealthReport;
use wallet_application::wallet::WalletBalance;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn success_with_data(data: Option<T>) -> Self {
        Self {
            ok: true,
            error: None,
            data,
        }
    }

    #[must_use]
    pub fn failure_with_data(error: String, data: Option<T>) -> Self {
        Self {
            ok: false,
            error: Some(error),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletBalanceResponse {
    pub user_id: i64,
    pub wallet_id: i64,
    /// Major units rendered at the configured precision, e.g. `"114.65"`.
    pub balance: String,
}

impl WalletBalanceResponse {
    pub fn from_balance(balance: &WalletBalance, precision: CurrencyPrecision) -> Self {
        Self {
            user_id: balance.user_id.as_i64(),
            wallet_id: balance.wallet_id.as_i64(),
            balance: precision.to_major_units(balance.balance).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub database: &'static str,
    pub cache: &'static str,
}

fn status_label(up: bool) -> &'static str {
    if up { "up" } else { "down" }
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            database: status_label(report.database),
            cache: status_label(report.cache),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}
