use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{DomainError, DomainResult};
use crate::money::MinorUnits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            return Err(DomainError::InvalidIdentifier(format!(
                "user id must be positive, got {id}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(i64);

impl WalletId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            return Err(DomainError::InvalidIdentifier(format!(
                "wallet id must be positive, got {id}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for WalletId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceChange {
    Credit(MinorUnits),
    Debit(MinorUnits),
}


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: MinorUnits,
        available: MinorUnits,
    },

    #[error("Balance would overflow by applying {amount}")]
    Overflow { amount: MinorUnits },
}

/// Authoritative wallet record as held by the wallet store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub id: WalletId,
    pub user_id: UserId,
    pub name: String,
    pub balance: MinorUnits,
}

impl Wallet {
    pub fn new(id: WalletId, user_id: UserId, name: String, balance: MinorUnits) -> Self {
        Self {
            id,
            user_id,
            name,
            balance,
        }
    }

    /// Balance the wallet would hold after `change`. Never negative.
    pub fn balance_after(&self, change: BalanceChange) -> Result<MinorUnits, BalanceError> {
        match change {
            BalanceChange::Credit(amount) => self
                .balance
                .checked_add(amount)
                .ok_or(BalanceError::Overflow { amount }),
            BalanceChange::Debit(amount) => {
                let remaining = self
                    .balance
                    .checked_sub(amount)
                    .ok_or(BalanceError::Overflow { amount })?;

                if remaining.is_negative() {
                    return Err(BalanceError::InsufficientFunds {
                        required: amount,
                        available: self.balance,
                    });
                }

                Ok(remaining)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wallet_with(balance: i64) -> Wallet {
        Wallet::new(
            WalletId::new(1).unwrap(),
            UserId::new(1).unwrap(),
            "Wallet 1".to_string(),
            MinorUnits::new(balance),
        )
    }

    #[test]
    fn identifiers_must_be_positive() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-3).is_err());
        assert!(WalletId::new(0).is_err());
        assert_eq!(WalletId::new(9).unwrap().as_i64(), 9);
    }

    #[test]
    fn credit_adds_to_balance() {
        let wallet = wallet_with(10_000);
        let after = wallet
            .balance_after(BalanceChange::Credit(MinorUnits::new(1465)))
            .unwrap();
        assert_eq!(after, MinorUnits::new(11_465));
    }

    #[test]
    fn debit_down_to_zero_is_allowed() {
        let wallet = wallet_with(10_000);
        let after = wallet
            .balance_after(BalanceChange::Debit(MinorUnits::new(10_000)))
            .unwrap();
        assert_eq!(after, MinorUnits::ZERO);
    }

    #[test]
    fn debit_below_zero_is_rejected() {
        let wallet = wallet_with(10_000);
        let err = wallet
            .balance_after(BalanceChange::Debit(MinorUnits::new(10_001)))
            .unwrap_err();
        assert_eq!(
            err,
            BalanceError::InsufficientFunds {
                required: MinorUnits::new(10_001),
                available: MinorUnits::new(10_000),
            }
        );
    }

    #[test]
    fn credit_overflow_is_rejected() {
        let wallet = wallet_with(i64::MAX);
        let err = wallet
            .balance_after(BalanceChange::Credit(MinorUnits::new(1)))
            .unwrap_err();
        assert_eq!(
            err,
            BalanceError::Overflow {
                amount: MinorUnits::new(1)
            }
        );
    }
}
