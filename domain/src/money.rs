use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_DECIMAL_PLACES: u32 = 8;

/// An amount of money counted in the currency's smallest unit (cents for a
/// two-decimal currency). All balance arithmetic happens on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinorUnits(i64);

impl MinorUnits {
    pub const ZERO: Self = Self(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Display for MinorUnits {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("amount must be greater than zero, got {amount}")]
    NonPositive { amount: Decimal },

    #[error("amount {amount} has more than {decimal_places} decimal places")]
    TooPrecise { amount: Decimal, decimal_places: u32 },

    #[error("amount {amount} is out of range")]
    OutOfRange { amount: Decimal },

    #[error("currency precision of {0} decimal places is not supported")]
    UnsupportedPrecision(u32),
}

/// Number of minor-unit decimal places of the wallet currency.
///
/// Conversions are exact: major to minor scales by `10^decimal_places` in
/// decimal arithmetic and refuses anything that would need rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPrecision {
    decimal_places: u32,
}

impl CurrencyPrecision {
    pub const CENTS: Self = Self { decimal_places: 2 };

    pub fn new(decimal_places: u32) -> Result<Self, MoneyError> {
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(MoneyError::UnsupportedPrecision(decimal_places));
        }
        Ok(Self { decimal_places })
    }

    pub fn decimal_places(self) -> u32 {
        self.decimal_places
    }

    fn factor(self) -> Decimal {
        Decimal::from(10_i64.pow(self.decimal_places))
    }

    pub fn to_minor_units(self, amount: Decimal) -> Result<MinorUnits, MoneyError> {
        if amount <= Decimal::ZERO {
            return Err(MoneyError::NonPositive { amount });
        }

        // Checked on the scale; a full-width mantissa times the factor would be rounded.
        if amount.normalize().scale() > self.decimal_places {
            return Err(MoneyError::TooPrecise {
                amount,
                decimal_places: self.decimal_places,
            });
        }

        let scaled = amount
            .checked_mul(self.factor())
            .ok_or(MoneyError::OutOfRange { amount })?;

        scaled
            .to_i64()
            .map(MinorUnits)
            .ok_or(MoneyError::OutOfRange { amount })
    }

    pub fn to_major_units(self, amount: MinorUnits) -> Decimal {
        Decimal::new(amount.0, self.decimal_places)
    }
}

impl Default for CurrencyPrecision {
    fn default() -> Self {
        Self::CENTS
    }
}
