use crate::{
    common::{error::AppError, money::Money},
    domain::ledger::Ledger,
};

/// Moves `amount` from `from` to `to`. Every check runs before the first
/// mutation, so the debit and credit always land together and the sum of
/// balances is conserved.
pub fn handle(
    ledger: &mut Ledger,
    from: &str,
    to: &str,
    amount: Money,
) -> Result<(Money, Money), AppError> {
    // Self-transfer is rejected the same way as an unknown recipient.
    if to == from || !ledger.contains(to) {
        return Err(AppError::RecipientNotFound(to.to_string()));
    }

    if !amount.is_positive() {
        return Err(AppError::InvalidAmount(amount));
    }

    let sender_balance = ledger
        .account(from)
        .map(|acc| acc.balance)
        .ok_or_else(|| AppError::AccountNotFound(from.to_string()))?;

    if amount > sender_balance {
        return Err(AppError::InsufficientFunds {
            balance: sender_balance,
            requested: amount,
        });
    }

    let new_from_balance = {
        let sender = ledger
            .account_mut(from)
            .ok_or_else(|| AppError::AccountNotFound(from.to_string()))?;
        sender.balance -= amount;
        sender.log(format!("Transferred {amount} to {to}"));
        sender.balance
    };

    let new_to_balance = {
        let recipient = ledger
            .account_mut(to)
            .ok_or_else(|| AppError::RecipientNotFound(to.to_string()))?;
        recipient.balance += amount;
        recipient.log(format!("Received {amount} from {from}"));
        recipient.balance
    };

    tracing::info!(%from, %to, %amount, "transfer applied");

    Ok((new_from_balance, new_to_balance))
}
