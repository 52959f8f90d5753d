use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};
use domain::money::MAX_DECIMAL_PLACES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub db: DbConfig,
    pub redis: RedisConfig,
    pub wallet: WalletConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    #[serde(
        skip_serializing,
        default = "default_database_url",
        deserialize_with = "deserialize_secret"
    )]
    pub database_url: SecretString,
    pub pool_size: u32,
    pub query_timeout_secs: u64,
    pub run_migrations: bool,
}

impl DbConfig {
    #[must_use]
    pub fn redacted_url(&self) -> String {
        let url_str = self.database_url.expose_secret();
        match url::Url::parse(url_str) {
            Ok(mut url) => {
                if url.password().is_some() {
                    url.set_password(Some("***")).ok();
                }
                url.to_string()
            }
            Err(_) => "[INVALID_URL]".to_string(),
        }
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        self.database_url.expose_secret()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub redis_url: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    pub cache_ttl_seconds: u64,
    pub jitter_min_percent: u8,
    pub jitter_max_percent: u8,
    pub decimal_places: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(
        skip_serializing,
        default = "default_jwt_secret",
        deserialize_with = "deserialize_secret"
    )]
    pub jwt_secret: SecretString,
    pub leeway_secs: u64,
}

impl AuthConfig {
    #[must_use]
    pub fn jwt_secret(&self) -> &str {
        self.jwt_secret.expose_secret()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

fn default_database_url() -> SecretString {
    SecretString::from("postgresql://localhost/wallet")
}

fn default_jwt_secret() -> SecretString {
    SecretString::from("")
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                cors_origin: None,
            },
            db: DbConfig {
                database_url: default_database_url(),
                pool_size: 100,
                query_timeout_secs: 5,
                run_migrations: true,
            },
            redis: RedisConfig {
                redis_url: "redis://localhost:6379".to_string(),
                timeout_ms: 1000,
            },
            wallet: WalletConfig {
                cache_ttl_seconds: 300,
                jitter_min_percent: 0,
                jitter_max_percent: 10,
                decimal_places: 2,
            },
            auth: AuthConfig {
                jwt_secret: default_jwt_secret(),
                leeway_secs: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.db.database_url.expose_secret().is_empty() {
            return Err(AppError::ConfigError {
                message: "database_url cannot be empty".to_string(),
            });
        }

        if self.db.pool_size == 0 {
            return Err(AppError::ConfigError {
                message: "db pool_size must be greater than 0".to_string(),
            });
        }

        if self.db.query_timeout_secs == 0 {
            return Err(AppError::ConfigError {
                message: "db query_timeout_secs must be greater than 0".to_string(),
            });
        }

        if self.redis.redis_url.is_empty() {
            return Err(AppError::ConfigError {
                message: "redis_url cannot be empty".to_string(),
            });
        }

        if self.redis.timeout_ms == 0 {
            return Err(AppError::ConfigError {
                message: "redis timeout_ms must be greater than 0".to_string(),
            });
        }

        if self.wallet.cache_ttl_seconds == 0 {
            return Err(AppError::ConfigError {
                message: "wallet cache_ttl_seconds must be greater than 0".to_string(),
            });
        }

        if self.wallet.jitter_min_percent > self.wallet.jitter_max_percent {
            return Err(AppError::ConfigError {
                message: "jitter_min_percent must be <= jitter_max_percent".to_string(),
            });
        }

        if self.wallet.jitter_max_percent > 100 {
            return Err(AppError::ConfigError {
                message: "jitter_max_percent must be <= 100".to_string(),
            });
        }

        if self.wallet.decimal_places > MAX_DECIMAL_PLACES {
            return Err(AppError::ConfigError {
                message: format!("decimal_places must be <= {MAX_DECIMAL_PLACES}"),
            });
        }

        if self.auth.jwt_secret.expose_secret().is_empty() {
            return Err(AppError::ConfigError {
                message: "jwt_secret cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
