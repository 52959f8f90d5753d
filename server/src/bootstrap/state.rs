use deadpool_redis::{Config as RedisPoolConfig, Pool as RedisPool, Runtime};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{sync::Arc, time::Duration};
use tracing::info;

use wallet_adapters::shared::app_state::AppState as AdaptersAppState;
use wallet_adapters::{
    incoming::http_axum::auth::jwt::JwtVerifier,
    outgoing::{
        postgres_sqlx::wallet_store_postgres::PostgresWalletStoreAdapter,
        redis_deadpool::balance_cache_redis::RedisBalanceCacheAdapter,
    },
};
use wallet_application::error::AppError;
use wallet_application::infrastructure_config::Config;
use wallet_application::ports::incoming::{health::HealthQueryUseCase, wallet::WalletUseCase};
use wallet_application::ports::outgoing::{
    balance_cache::BalanceCachePort, wallet_store::WalletStorePort,
};
use wallet_application::{
    config::WalletSettings,
    health::service::HealthService,
    wallet::service::{WalletService, WalletServiceDeps},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wallet_service: Arc<WalletService>,
    pub health_service: Arc<HealthService>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let settings = WalletSettings::from_config(&config.wallet)?;

        let (db_pool, redis_pool) = Self::create_database_connections(&config).await?;

        if config.db.run_migrations {
            Self::run_migrations(&db_pool).await?;
        }

        let wallet_store: Arc<dyn WalletStorePort> = Arc::new(PostgresWalletStoreAdapter::new(
            db_pool,
            config.db.query_timeout_secs,
        ));
        let balance_cache: Arc<dyn BalanceCachePort> = Arc::new(RedisBalanceCacheAdapter::new(
            redis_pool,
            &config.environment.env,
            config.redis.timeout_ms,
        ));

        let health_service = Arc::new(HealthService::new(
            Arc::clone(&wallet_store),
            Arc::clone(&balance_cache),
        ));
        let wallet_service = Arc::new(WalletService::new(
            settings,
            WalletServiceDeps {
                wallet_store,
                balance_cache,
            },
        ));

        Ok(Self {
            config,
            wallet_service,
            health_service,
        })
    }

    async fn create_database_connections(config: &Config) -> Result<(PgPool, RedisPool), AppError> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db.pool_size)
            .acquire_timeout(Duration::from_secs(config.db.query_timeout_secs))
            .connect(config.db.database_url())
            .await
            .map_err(|e| AppError::StoreUnavailable {
                message: format!("Failed to connect to database: {}", e),
            })?;

        let redis_config = RedisPoolConfig::from_url(&config.redis.redis_url);
        let redis_pool = redis_config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| AppError::CacheUnavailable {
                message: format!("Failed to create Redis pool: {}", e),
            })?;

        Ok((db_pool, redis_pool))
    }

    async fn run_migrations(db_pool: &PgPool) -> Result<(), AppError> {
        sqlx::migrate!("../migrations")
            .run(db_pool)
            .await
            .map_err(|e| AppError::StoreUnavailable {
                message: format!("Failed to run database migrations: {}", e),
            })?;

        info!("Database migrations applied");
        Ok(())
    }

    pub fn to_adapters_state(self) -> AdaptersAppState {
        let jwt_verifier = Arc::new(JwtVerifier::new(
            self.config.auth.jwt_secret(),
            self.config.auth.leeway_secs,
        ));
        let precision = self.wallet_service.precision();

        AdaptersAppState::new(
            self.config,
            self.wallet_service as Arc<dyn WalletUseCase + Send + Sync>,
            self.health_service as Arc<dyn HealthQueryUseCase + Send + Sync>,
            jwt_verifier,
            precision,
        )
    }
}
