pub mod balance_cache_redis;
pub mod keys;
