use crate::{
    common::{error::AppError, money::Money},
    domain::ledger::Ledger,
};

/// Pure read of the current balance; no mutation, no history entry.
pub fn handle(ledger: &Ledger, id: &str) -> Result<Money, AppError> {
    ledger
        .account(id)
        .map(|acc| acc.balance)
        .ok_or_else(|| AppError::AccountNotFound(id.to_string()))
}
