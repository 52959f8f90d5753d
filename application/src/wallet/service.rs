use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use domain::{
    money::{CurrencyPrecision, MinorUnits},
    wallet::{BalanceChange, UserId, Wallet, WalletId},
};

use crate::{
    config::WalletSettings,
    error::{AppError, AppResult},
    ports::{
        incoming::wallet::WalletUseCase,
        outgoing::{
            balance_cache::{CachedBalance, DynBalanceCachePort},
            wallet_store::DynWalletStorePort,
        },
    },
};

use super::WalletBalance;

pub struct WalletServiceDeps {
    pub wallet_store: DynWalletStorePort,
    pub balance_cache: DynBalanceCachePort,
}

/// Keeps the wallet store and the balance cache consistent.
///
/// Reads are cache-first. Writes always start from the store record, persist
/// through a compare-and-swap, and only then refresh the cache; a cache entry
/// that cannot be refreshed is deleted. The cache never decides a mutation.
pub struct WalletService {
    settings: WalletSettings,
    wallet_store: DynWalletStorePort,
    balance_cache: DynBalanceCachePort,
}

impl WalletService {
    pub fn new(settings: WalletSettings, deps: WalletServiceDeps) -> Self {
        Self {
            settings,
            wallet_store: deps.wallet_store,
            balance_cache: deps.balance_cache,
        }
    }

    #[must_use]
    pub fn precision(&self) -> CurrencyPrecision {
        self.settings.precision
    }

    async fn load_wallet(&self, user_id: UserId, wallet_id: WalletId) -> AppResult<Wallet> {
        self.wallet_store
            .find_wallet(wallet_id, user_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn populate_cache(&self, wallet: &Wallet) {
        let entry = CachedBalance::new(wallet.user_id, wallet.balance);
        if let Err(e) = self
            .balance_cache
            .set(wallet.id, entry, self.settings.cache_ttl())
            .await
        {
            warn!(
                wallet_id = %wallet.id,
                error = %e,
                "Failed to populate balance cache"
            );
        }
    }

    async fn refresh_cache_after_write(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        balance: MinorUnits,
    ) {
        let entry = CachedBalance::new(user_id, balance);
        let Err(set_error) = self
            .balance_cache
            .set(wallet_id, entry, self.settings.cache_ttl())
            .await
        else {
            return;
        };

        warn!(
            wallet_id = %wallet_id,
            error = %set_error,
            "Failed to refresh cached balance, invalidating entry"
        );

        if let Err(delete_error) = self.balance_cache.delete(wallet_id).await {
            warn!(
                wallet_id = %wallet_id,
                error = %delete_error,
                "Failed to invalidate cached balance"
            );
        }
    }

    async fn apply_change(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        change: BalanceChange,
    ) -> AppResult<WalletBalance> {
        let wallet = self.load_wallet(user_id, wallet_id).await?;
        let new_balance = wallet.balance_after(change)?;

        let updated = self
            .wallet_store
            .update_balance(wallet_id, wallet.balance, new_balance)
            .await?;

        if !updated {
            warn!(
                wallet_id = %wallet_id,
                expected = %wallet.balance,
                "Wallet balance changed between read and write"
            );
            return Err(AppError::BalanceConflict);
        }

        self.refresh_cache_after_write(user_id, wallet_id, new_balance)
            .await;

        debug!(
            wallet_id = %wallet_id,
            user_id = %user_id,
            change = ?change,
            previous = %wallet.balance,
            balance = %new_balance,
            "Wallet balance updated"
        );

        Ok(WalletBalance::new(user_id, wallet_id, new_balance))
    }
}

#[async_trait::async_trait]
impl WalletUseCase for WalletService {
    #[instrument(skip(self))]
    async fn balance(&self, user_id: UserId, wallet_id: WalletId) -> AppResult<WalletBalance> {
        match self.balance_cache.get(wallet_id).await? {
            Some(cached) if cached.owner == user_id => {
                debug!(wallet_id = %wallet_id, "Balance cache hit");
                return Ok(WalletBalance::new(user_id, wallet_id, cached.balance));
            }
            Some(_) => {
                debug!(wallet_id = %wallet_id, "Cached balance belongs to another user");
            }
            None => {
                debug!(wallet_id = %wallet_id, "Balance cache miss");
            }
        }

        let wallet = self.load_wallet(user_id, wallet_id).await?;
        self.populate_cache(&wallet).await;

        Ok(WalletBalance::new(user_id, wallet_id, wallet.balance))
    }

    #[instrument(skip(self))]
    async fn credit(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        amount: Decimal,
    ) -> AppResult<WalletBalance> {
        let amount = self.precision().to_minor_units(amount)?;
        self.apply_change(user_id, wallet_id, BalanceChange::Credit(amount))
            .await
    }

    #[instrument(skip(self))]
    async fn debit(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        amount: Decimal,
    ) -> AppResult<WalletBalance> {
        let amount = self.precision().to_minor_units(amount)?;
        self.apply_change(user_id, wallet_id, BalanceChange::Debit(amount))
            .await
    }
}
