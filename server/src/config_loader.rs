use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::fs;
use std::path::Path;
use tracing::info;

use wallet_application::error::{AppError, AppResult};
use wallet_application::infrastructure_config::Config;

pub const ENV_PREFIX: &str = "WALLET_";

pub fn load_config() -> AppResult<Config> {
    generate_env_template_if_missing()?;
    load_config_from(Figment::from(Serialized::defaults(Config::default())))
}

fn load_config_from(base: Figment) -> AppResult<Config> {
    let mut figment = base;

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    let config: Config = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

fn generate_env_template_if_missing() -> AppResult<()> {
    let env_file = ".env";
    let template_file = ".env.example";

    if Path::new(env_file).exists() {
        return Ok(());
    }

    if !Path::new(template_file).exists() {
        return Ok(());
    }

    fs::copy(template_file, env_file).map_err(|e| AppError::ConfigError {
        message: format!("Failed to generate .env file from template: {e}"),
    })?;

    info!("Generated .env from template. Please configure your secrets!");
    info!("IMPORTANT: .env contains sensitive data and is gitignored.");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("WALLET_AUTH__JWT_SECRET", "from-env");
            jail.set_env("WALLET_SERVER__PORT", "9090");
            jail.set_env("WALLET_WALLET__CACHE_TTL_SECONDS", "60");
            jail.set_env("WALLET_DB__DATABASE_URL", "postgresql://db/wallets");

            let config =
                load_config_from(Figment::from(Serialized::defaults(Config::default()))).unwrap();

            assert_eq!(config.server.port, 9090);
            assert_eq!(config.wallet.cache_ttl_seconds, 60);
            assert_eq!(config.auth.jwt_secret.expose_secret(), "from-env");
            assert_eq!(config.db.database_url(), "postgresql://db/wallets");
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_merged_below_environment() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [redis]
                redis_url = "redis://cache:6379"
                timeout_ms = 250

                [auth]
                jwt_secret = "from-file"
                leeway_secs = 5
                "#,
            )?;
            jail.set_env("WALLET_REDIS__TIMEOUT_MS", "500");

            let config =
                load_config_from(Figment::from(Serialized::defaults(Config::default()))).unwrap();

            assert_eq!(config.redis.redis_url, "redis://cache:6379");
            assert_eq!(config.redis.timeout_ms, 500);
            assert_eq!(config.auth.jwt_secret(), "from-file");
            Ok(())
        });
    }

    #[test]
    fn missing_secret_fails_validation() {
        Jail::expect_with(|_jail| {
            let result = load_config_from(Figment::from(Serialized::defaults(Config::default())));
            assert!(matches!(result, Err(AppError::ConfigError { .. })));
            Ok(())
        });
    }
}
