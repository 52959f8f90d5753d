pub mod service;

use domain::money::MinorUnits;
use domain::wallet::{UserId, WalletId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletBalance {
    pub user_id: UserId,
    pub wallet_id: WalletId,
    pub balance: MinorUnits,
}

impl WalletBalance {
    pub fn new(user_id: UserId, wallet_id: WalletId, balance: MinorUnits) -> Self {
        Self {
            user_id,
            wallet_id,
            balance,
        }
    }
}
