use std::io;
use thiserror::Error;

use domain::error::DomainError;
use domain::money::{MinorUnits, MoneyError};
use domain::wallet::BalanceError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Wallet not found")]
    NotFound,

    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: MinorUnits,
        available: MinorUnits,
    },

    #[error("Wallet balance changed concurrently, retry the operation")]
    BalanceConflict,

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Database error: {message}")]
    StoreUnavailable { message: String },

    #[error("Database timeout")]
    StoreTimeout,

    #[error("Cache error: {message}")]
    CacheUnavailable { message: String },

    #[error("Cache timeout")]
    CacheTimeout,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Unauthorized")]
    Unauthorized,
}

impl AppError {
    /// Transient failures the caller may retry without changing the request.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::BalanceConflict
                | Self::StoreUnavailable { .. }
                | Self::StoreTimeout
                | Self::CacheUnavailable { .. }
                | Self::CacheTimeout
        )
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::UnsupportedPrecision(_) => AppError::ConfigError {
                message: err.to_string(),
            },
            _ => AppError::InvalidAmount {
                message: err.to_string(),
            },
        }
    }
}

impl From<BalanceError> for AppError {
    fn from(err: BalanceError) -> Self {
        match err {
            BalanceError::InsufficientFunds {
                required,
                available,
            } => AppError::InsufficientFunds {
                required,
                available,
            },
            BalanceError::Overflow { .. } => AppError::InvalidAmount {
                message: err.to_string(),
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
