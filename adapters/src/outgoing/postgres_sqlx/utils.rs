use sqlx::Error as SqlxError;
use std::{future::Future, time::Duration};
use tokio::time::timeout;

use wallet_application::error::{AppError, AppResult};

pub struct PostgresExecutor {
    timeout: Duration,
}

impl PostgresExecutor {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub async fn execute_with_timeout<T, F, Fut>(
        &self,
        operation: F,
        error_context: &str,
    ) -> AppResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, SqlxError>>,
    {
        timeout(self.timeout, operation())
            .await
            .map_err(|_| AppError::StoreTimeout)?
            .map_err(|e| map_sqlx_error(&e, error_context))
    }
}

pub fn map_sqlx_error(error: &SqlxError, context: &str) -> AppError {
    match error {
        SqlxError::PoolTimedOut => AppError::StoreTimeout,
        _ => AppError::StoreUnavailable {
            message: format!("{context}: {error}"),
        },
    }
}
