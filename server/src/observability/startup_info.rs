use tracing::info;

use wallet_application::infrastructure_config::{Config, WalletConfig};

pub fn print_api_info(config: &Config) {
    print_endpoints(config);
    print_configuration_info(config);
}

fn print_endpoints(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("Endpoints:");
    info!("  GET  {}/ping", base_url);
    info!("  GET  {}/health", base_url);
    info!("  GET  {}/wallet/{{wallet_id}}/balance", base_url);
    info!("  POST {}/wallet/{{wallet_id}}/credit", base_url);
    info!("  POST {}/wallet/{{wallet_id}}/debit", base_url);
}

fn print_configuration_info(config: &Config) {
    info!("Configuration:");
    info!("  Environment: {}", config.environment.env);
    info!(
        "  Database: PostgreSQL, pool {} connections, query timeout {}s",
        config.db.pool_size, config.db.query_timeout_secs
    );
    print_cache_configuration(&config.wallet, config.redis.timeout_ms);
}

fn print_cache_configuration(wallet: &WalletConfig, timeout_ms: u64) {
    info!(
        "  Cache: Redis balance TTL {}s (+{}..{}% jitter), command timeout {}ms",
        wallet.cache_ttl_seconds, wallet.jitter_min_percent, wallet.jitter_max_percent, timeout_ms
    );
    info!("  Amounts: {} decimal places", wallet.decimal_places);
}
