use rand::Rng;
use std::time::Duration;

use crate::error::AppResult;
use crate::infrastructure_config::WalletConfig;
use domain::money::CurrencyPrecision;

/// Engine settings resolved once at startup from [`WalletConfig`].
#[derive(Debug, Clone)]
pub struct WalletSettings {
    pub cache_ttl_seconds: u64,
    pub jitter_min_percent: u8,
    pub jitter_max_percent: u8,
    pub precision: CurrencyPrecision,
}

impl WalletSettings {
    pub fn from_config(config: &WalletConfig) -> AppResult<Self> {
        Ok(Self {
            cache_ttl_seconds: config.cache_ttl_seconds,
            jitter_min_percent: config.jitter_min_percent,
            jitter_max_percent: config.jitter_max_percent,
            precision: CurrencyPrecision::new(config.decimal_places)?,
        })
    }

    /// TTL for a freshly written cache entry, stretched by a random jitter so
    /// entries written together do not expire together.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn cache_ttl(&self) -> Duration {
        let min_percent = f64::from(self.jitter_min_percent) / 100.0;
        let max_percent = f64::from(self.jitter_max_percent) / 100.0;

        let jitter_factor = if max_percent > min_percent {
            rand::rng().random_range((1.0 + min_percent)..=(1.0 + max_percent))
        } else {
            1.0 + min_percent
        };

        let seconds = (self.cache_ttl_seconds as f64 * jitter_factor).round();
        Duration::from_secs(seconds as u64)
    }
}
