pub mod utils;
pub mod wallet_store_postgres;
