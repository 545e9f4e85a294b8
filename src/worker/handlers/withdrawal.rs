use crate::{
    common::{error::AppError, money::Money},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, id: &str, amount: Money) -> Result<Money, AppError> {
    if !amount.is_positive() {
        return Err(AppError::InvalidAmount(amount));
    }

    let acc = ledger
        .account_mut(id)
        .ok_or_else(|| AppError::AccountNotFound(id.to_string()))?;

    if amount > acc.balance {
        return Err(AppError::InsufficientFunds {
            balance: acc.balance,
            requested: amount,
        });
    }

    acc.balance -= amount;
    acc.log(format!("Withdrew: {amount}"));
    tracing::info!(account = %id, %amount, balance = %acc.balance, "withdrawal applied");

    Ok(acc.balance)
}
