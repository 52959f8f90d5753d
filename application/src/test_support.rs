#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::ports::outgoing::{
    balance_cache::{BalanceCachePort, CachedBalance},
    wallet_store::WalletStorePort,
};
use domain::money::MinorUnits;
use domain::wallet::{UserId, Wallet, WalletId};

pub fn user(id: i64) -> UserId {
    UserId::new(id).unwrap()
}

pub fn wallet_id(id: i64) -> WalletId {
    WalletId::new(id).unwrap()
}

/// In-memory wallet store with compare-and-swap updates and call counters.
#[derive(Default)]
pub struct FakeWalletStore {
    wallets: Mutex<HashMap<i64, Wallet>>,
    find_calls: AtomicUsize,
    update_calls: AtomicUsize,
    failing: AtomicBool,
    conflict_next: AtomicBool,
}

impl FakeWalletStore {
    pub fn with_wallet(id: i64, owner: i64, balance: i64) -> Self {
        let store = Self::default();
        store.insert(id, owner, balance);
        store
    }

    pub fn insert(&self, id: i64, owner: i64, balance: i64) {
        let wallet = Wallet::new(
            wallet_id(id),
            user(owner),
            format!("Wallet {id}"),
            MinorUnits::new(balance),
        );
        self.wallets.lock().unwrap().insert(id, wallet);
    }

    pub fn balance_of(&self, id: i64) -> Option<MinorUnits> {
        self.wallets.lock().unwrap().get(&id).map(|w| w.balance)
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn conflict_next_update(&self) {
        self.conflict_next.store(true, Ordering::SeqCst);
    }

    fn check_available(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable {
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WalletStorePort for FakeWalletStore {
    async fn find_wallet(&self, wallet_id: WalletId, user_id: UserId) -> AppResult<Option<Wallet>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        Ok(self
            .wallets
            .lock()
            .unwrap()
            .get(&wallet_id.as_i64())
            .filter(|w| w.user_id == user_id)
            .cloned())
    }

    async fn update_balance(
        &self,
        wallet_id: WalletId,
        expected_balance: MinorUnits,
        new_balance: MinorUnits,
    ) -> AppResult<bool> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        if self.conflict_next.swap(false, Ordering::SeqCst) {
            return Ok(false);
        }

        let mut wallets = self.wallets.lock().unwrap();
        match wallets.get_mut(&wallet_id.as_i64()) {
            Some(wallet) if wallet.balance == expected_balance => {
                wallet.balance = new_balance;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_available()
    }
}

/// In-memory balance cache with per-operation failure injection.
#[derive(Default)]
pub struct FakeBalanceCache {
    entries: Mutex<HashMap<i64, (CachedBalance, Duration)>>,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_get: AtomicBool,
    fail_set: AtomicBool,
    fail_delete: AtomicBool,
}

impl FakeBalanceCache {
    pub fn insert(&self, id: i64, owner: i64, balance: i64) {
        let entry = CachedBalance::new(user(owner), MinorUnits::new(balance));
        self.entries
            .lock()
            .unwrap()
            .insert(id, (entry, Duration::from_secs(60)));
    }

    pub fn entry(&self, id: i64) -> Option<CachedBalance> {
        self.entries.lock().unwrap().get(&id).map(|(e, _)| *e)
    }

    pub fn ttl_of(&self, id: i64) -> Option<Duration> {
        self.entries.lock().unwrap().get(&id).map(|(_, ttl)| *ttl)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn fail_gets(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    pub fn fail_sets(&self) {
        self.fail_set.store(true, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    pub fn fail_all(&self) {
        self.fail_gets();
        self.fail_sets();
        self.fail_deletes();
    }

    fn unavailable() -> AppError {
        AppError::CacheUnavailable {
            message: "connection reset".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl BalanceCachePort for FakeBalanceCache {
    async fn get(&self, wallet_id: WalletId) -> AppResult<Option<CachedBalance>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self.entry(wallet_id.as_i64()))
    }

    async fn set(&self, wallet_id: WalletId, entry: CachedBalance, ttl: Duration) -> AppResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.entries
            .lock()
            .unwrap()
            .insert(wallet_id.as_i64(), (entry, ttl));
        Ok(())
    }

    async fn delete(&self, wallet_id: WalletId) -> AppResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.entries.lock().unwrap().remove(&wallet_id.as_i64());
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(())
    }
}
