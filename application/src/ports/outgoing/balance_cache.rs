use std::sync::Arc;
use std::time::Duration;

use crate::error::AppResult;
use domain::money::MinorUnits;
use domain::wallet::{UserId, WalletId};

/// Last known balance of a wallet together with its owner, so a cache hit
/// can still be checked against the requesting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedBalance {
    pub owner: UserId,
    pub balance: MinorUnits,
}

impl CachedBalance {
    pub fn new(owner: UserId, balance: MinorUnits) -> Self {
        Self { owner, balance }
    }
}

#[async_trait::async_trait]
pub trait BalanceCachePort: Send + Sync {
    async fn get(&self, wallet_id: WalletId) -> AppResult<Option<CachedBalance>>;

    async fn set(&self, wallet_id: WalletId, entry: CachedBalance, ttl: Duration) -> AppResult<()>;

    async fn delete(&self, wallet_id: WalletId) -> AppResult<()>;

    async fn ping(&self) -> AppResult<()>;
}

pub type DynBalanceCachePort = Arc<dyn BalanceCachePort>;
