use std::sync::Arc;

use crate::error::AppResult;
use domain::money::MinorUnits;
use domain::wallet::{UserId, Wallet, WalletId};

/// Durable, authoritative wallet records.
///
/// `update_balance` is a compare-and-swap: it writes `new_balance` only while
/// the stored balance still equals `expected_balance` and reports whether the
/// row was updated. Implementations must make that check and write atomic per
/// wallet id.
#[async_trait::async_trait]
pub trait WalletStorePort: Send + Sync {
    async fn find_wallet(&self, wallet_id: WalletId, user_id: UserId) -> AppResult<Option<Wallet>>;

    async fn update_balance(
        &self,
        wallet_id: WalletId,
        expected_balance: MinorUnits,
        new_balance: MinorUnits,
    ) -> AppResult<bool>;

    async fn ping(&self) -> AppResult<()>;
}

pub type DynWalletStorePort = Arc<dyn WalletStorePort>;
