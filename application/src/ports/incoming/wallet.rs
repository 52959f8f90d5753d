use rust_decimal::Decimal;

use crate::error::AppResult;
use crate::wallet::WalletBalance;
use domain::wallet::{UserId, WalletId};

#[async_trait::async_trait]
pub trait WalletUseCase: Send + Sync {
    async fn balance(&self, user_id: UserId, wallet_id: WalletId) -> AppResult<WalletBalance>;

    async fn credit(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        amount: Decimal,
    ) -> AppResult<WalletBalance>;

    async fn debit(
        &self,
        user_id: UserId,
        wallet_id: WalletId,
        amount: Decimal,
    ) -> AppResult<WalletBalance>;
}
