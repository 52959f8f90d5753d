pub mod balance_cache;
pub mod wallet_store;
