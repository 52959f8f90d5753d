pub mod postgres_sqlx;
pub mod redis_deadpool;
