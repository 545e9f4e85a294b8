use crate::common::money::Money;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("account {0} not found")]
    AccountNotFound(String),
    #[error("lockout: too many failed attempts")]
    LockedOut,
    #[error("invalid amount: {0}")]
    InvalidAmount(Money),
    #[error("insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },
    #[error("recipient account {0} not found")]
    RecipientNotFound(String),
    #[error("please enter a numeric value (got {0:?})")]
    InvalidInput(String),
    // Io and Corrupt are the two fatal storage failures: the session loop
    // never swallows them.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl AppError {
    /// Recoverable errors are reported to the user and the menu loop
    /// continues; fatal ones abort the session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Corrupt(_))
    }
}
