use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::{debug, instrument};

use domain::money::MinorUnits;
use domain::wallet::{UserId, Wallet, WalletId};
use wallet_application::{
    error::{AppError, AppResult},
    ports::outgoing::wallet_store::WalletStorePort,
};

use super::utils::PostgresExecutor;

pub struct PostgresWalletStoreAdapter {
    pool: PgPool,
    executor: PostgresExecutor,
}

impl PostgresWalletStoreAdapter {
    pub fn new(pool: PgPool, query_timeout_secs: u64) -> Self {
        Self {
            pool,
            executor: PostgresExecutor::new(query_timeout_secs),
        }
    }
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> AppResult<T>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| AppError::StoreUnavailable {
        message: format!("Failed to read column {name}: {e}"),
    })
}

fn wallet_from_row(row: &PgRow) -> AppResult<Wallet> {
    let id = WalletId::new(column(row, "id")?)?;
    let user_id = UserId::new(column(row, "user_id")?)?;
    let name: String = column(row, "name")?;
    let funds: i64 = column(row, "funds")?;

    Ok(Wallet::new(id, user_id, name, MinorUnits::new(funds)))
}

#[async_trait::async_trait]
impl WalletStorePort for PostgresWalletStoreAdapter {
    #[instrument(skip(self))]
    async fn find_wallet(&self, wallet_id: WalletId, user_id: UserId) -> AppResult<Option<Wallet>> {
        let row = self
            .executor
            .execute_with_timeout(
                || {
                    sqlx::query(
                        r"
                    SELECT id, user_id, name, funds
                    FROM wallets
                    WHERE id = $1 AND user_id = $2
                    ",
                    )
                    .bind(wallet_id.as_i64())
                    .bind(user_id.as_i64())
                    .fetch_optional(&self.pool)
                },
                &format!("Failed to load wallet {wallet_id}"),
            )
            .await?;

        row.as_ref().map(wallet_from_row).transpose()
    }

    #[instrument(skip(self))]
    async fn update_balance(
        &self,
        wallet_id: WalletId,
        expected_balance: MinorUnits,
        new_balance: MinorUnits,
    ) -> AppResult<bool> {
        let result = self
            .executor
            .execute_with_timeout(
                || {
                    sqlx::query(
                        r"
                    UPDATE wallets
                    SET funds = $1, updated_at = now()
                    WHERE id = $2 AND funds = $3
                    ",
                    )
                    .bind(new_balance.value())
                    .bind(wallet_id.as_i64())
                    .bind(expected_balance.value())
                    .execute(&self.pool)
                },
                &format!("Failed to update funds for wallet {wallet_id}"),
            )
            .await?;

        let updated = result.rows_affected() == 1;
        debug!(
            wallet_id = %wallet_id,
            expected = %expected_balance,
            balance = %new_balance,
            updated,
            "Wallet funds update executed"
        );

        Ok(updated)
    }

    async fn ping(&self) -> AppResult<()> {
        self.executor
            .execute_with_timeout(
                || sqlx::query("SELECT 1").execute(&self.pool),
                "Database ping failed",
            )
            .await
            .map(|_| ())
    }
}
