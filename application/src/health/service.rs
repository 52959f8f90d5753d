use tracing::warn;

use crate::ports::{
    incoming::health::HealthQueryUseCase,
    outgoing::{balance_cache::DynBalanceCachePort, wallet_store::DynWalletStorePort},
};

use super::HealthReport;

pub struct HealthService {
    wallet_store: DynWalletStorePort,
    balance_cache: DynBalanceCachePort,
}

impl HealthService {
    pub fn new(wallet_store: DynWalletStorePort, balance_cache: DynBalanceCachePort) -> Self {
        Self {
            wallet_store,
            balance_cache,
        }
    }
}

#[async_trait::async_trait]
impl HealthQueryUseCase for HealthService {
    async fn check(&self) -> HealthReport {
        let store = self.wallet_store.ping().await;
        let cache = self.balance_cache.ping().await;

        if let Err(e) = &store {
            warn!(error = %e, "Wallet store health check failed");
        }
        if let Err(e) = &cache {
            warn!(error = %e, "Balance cache health check failed");
        }

        HealthReport {
            database: store.is_ok(),
            cache: cache.is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{FakeBalanceCache, FakeWalletStore};

    #[tokio::test]
    async fn reports_healthy_when_both_dependencies_answer() {
        let service = HealthService::new(
            Arc::new(FakeWalletStore::default()),
            Arc::new(FakeBalanceCache::default()),
        );
        let report = service.check().await;
        assert!(report.is_healthy());
    }

    #[tokio::test]
    async fn reports_each_failing_dependency() {
        let cache = FakeBalanceCache::default();
        cache.fail_all();
        let service = HealthService::new(Arc::new(FakeWalletStore::default()), Arc::new(cache));

        let report = service.check().await;
        assert!(report.database);
        assert!(!report.cache);
        assert!(!report.is_healthy());
    }
}
