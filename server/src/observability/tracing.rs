use std::{collections::HashMap, error::Error, io::stdout};

use serde_json::Value;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use wallet_application::infrastructure_config::{Config, LogFormat};

const SERVICE_NAME: &str = "wallet-service";

/// `RUST_LOG` wins over the configured level when set.
pub fn setup_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            let formatting_layer = BunyanFormattingLayer::with_default_fields(
                SERVICE_NAME.to_string(),
                stdout,
                default_fields(config),
            );

            tracing_subscriber::registry()
                .with(env_filter)
                .with(JsonStorageLayer)
                .with(formatting_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let format = fmt::format()
                .with_target(true)
                .with_thread_ids(true)
                .compact();

            tracing_subscriber::fmt()
                .event_format(format)
                .with_env_filter(env_filter)
                .with_file(config.logging.include_location)
                .with_line_number(config.logging.include_location)
                .try_init()
                .map_err(|e| e as Box<dyn Error>)?;
        }
    }

    Ok(())
}

/// Fields stamped on every JSON record so aggregated logs can be split per
/// deployment and per currency precision.
fn default_fields(config: &Config) -> HashMap<String, Value> {
    HashMap::from([
        (
            "environment".to_string(),
            Value::from(config.environment.env.clone()),
        ),
        (
            "decimal_places".to_string(),
            Value::from(config.wallet.decimal_places),
        ),
    ])
}
