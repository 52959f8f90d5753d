use deadpool_redis::{
    Connection as RedisConnection, Pool as RedisPool,
    redis::{AsyncCommands, RedisError, cmd},
};
use std::{future::Future, time::Duration};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use domain::money::MinorUnits;
use domain::wallet::{UserId, WalletId};
use wallet_application::{
    error::{AppError, AppResult},
    ports::outgoing::balance_cache::{BalanceCachePort, CachedBalance},
};

use super::keys::RedisKeyBuilder;

/// Cached values are stored as `"{owner}:{minor_units}"`.
fn encode_entry(entry: CachedBalance) -> String {
    format!("{}:{}", entry.owner, entry.balance)
}

fn decode_entry(raw: &str) -> Option<CachedBalance> {
    let (owner, balance) = raw.split_once(':')?;
    let owner = UserId::new(owner.parse().ok()?).ok()?;
    let balance = MinorUnits::new(balance.parse().ok()?);
    if balance.is_negative() {
        return None;
    }
    Some(CachedBalance::new(owner, balance))
}

pub struct RedisBalanceCacheAdapter {
    redis_pool: RedisPool,
    redis_keys: RedisKeyBuilder,
    command_timeout: Duration,
}

impl RedisBalanceCacheAdapter {
    pub fn new(redis_pool: RedisPool, namespace_env: &str, timeout_ms: u64) -> Self {
        Self {
            redis_pool,
            redis_keys: RedisKeyBuilder::new(namespace_env),
            command_timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub async fn get_redis_connection(&self) -> AppResult<RedisConnection> {
        match timeout(self.command_timeout, self.redis_pool.get()).await {
            Ok(conn) => conn.map_err(|e| AppError::CacheUnavailable {
                message: format!("Failed to get Redis connection: {}", e),
            }),
            Err(_) => Err(AppError::CacheTimeout),
        }
    }

    async fn run<T, Fut>(&self, command: Fut, context: &str) -> AppResult<T>
    where
        Fut: Future<Output = Result<T, RedisError>>,
    {
        timeout(self.command_timeout, command)
            .await
            .map_err(|_| AppError::CacheTimeout)?
            .map_err(|e| AppError::CacheUnavailable {
                message: format!("{}: {}", context, e),
            })
    }
}

#[async_trait::async_trait]
impl BalanceCachePort for RedisBalanceCacheAdapter {
    #[instrument(skip(self))]
    async fn get(&self, wallet_id: WalletId) -> AppResult<Option<CachedBalance>> {
        let mut conn = self.get_redis_connection().await?;
        let key = self.redis_keys.balance_key(wallet_id);

        let raw: Option<String> = self
            .run(conn.get(&key), "Failed to read cached balance")
            .await?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match decode_entry(&raw) {
            Some(entry) => Ok(Some(entry)),
            None => {
                warn!(key = %key, value = %raw, "Ignoring malformed cached balance");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn set(&self, wallet_id: WalletId, entry: CachedBalance, ttl: Duration) -> AppResult<()> {
        let mut conn = self.get_redis_connection().await?;
        let key = self.redis_keys.balance_key(wallet_id);
        let seconds = ttl.as_secs().max(1);

        let () = self
            .run(
                conn.set_ex(&key, encode_entry(entry), seconds),
                "Failed to store cached balance",
            )
            .await?;

        debug!(key = %key, ttl_secs = seconds, "Stored cached balance");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, wallet_id: WalletId) -> AppResult<()> {
        let mut conn = self.get_redis_connection().await?;
        let key = self.redis_keys.balance_key(wallet_id);

        let () = self
            .run(conn.del(&key), "Failed to delete cached balance")
            .await?;

        debug!(key = %key, "Deleted cached balance");
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.get_redis_connection().await?;
        let _pong: String = self
            .run(cmd("PING").query_async(&mut conn), "Redis ping failed")
            .await?;
        Ok(())
    }
}
