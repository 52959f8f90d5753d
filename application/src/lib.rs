#[cfg(any(
    feature = "adapters",
    feature = "axum",
    feature = "sqlx",
    feature = "deadpool-redis"
))]
compile_error!("application must not depend on adapters/framework crates");

pub mod config;
pub mod error;
pub mod health;
pub mod infrastructure_config;
pub mod ports;
pub mod wallet;

#[cfg(test)]
mod test_support;
