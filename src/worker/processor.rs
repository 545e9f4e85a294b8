use crate::{
    common::{error::AppError, event::Operation, money::Money},
    domain::ledger::Ledger,
    worker::handlers::{balance, deposit, statement, transfer, withdrawal},
};

/// Result of a successfully applied operation, carrying what the session
/// controller needs to render.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Balance(Money),
    Deposited { new_balance: Money },
    Withdrew { new_balance: Money },
    Transferred { sender_balance: Money, recipient_balance: Money },
    Statement(Vec<String>),
}

#[derive(Debug, Default)]
pub struct Processor {}

impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    /// Applies one operation for the authenticated account against the
    /// ledger.
    pub fn process(
        &mut self,
        ledger: &mut Ledger,
        account_id: &str,
        op: Operation,
    ) -> Result<Outcome, AppError> {
        match op {
            Operation::CheckBalance => balance::handle(ledger, account_id).map(Outcome::Balance),
            Operation::Deposit { amount } => deposit::handle(ledger, account_id, amount)
                .map(|new_balance| Outcome::Deposited { new_balance }),
            Operation::Withdraw { amount } => withdrawal::handle(ledger, account_id, amount)
                .map(|new_balance| Outcome::Withdrew { new_balance }),
            Operation::Transfer { to, amount } => transfer::handle(ledger, account_id, &to, amount)
                .map(|(sender_balance, recipient_balance)| Outcome::Transferred {
                    sender_balance,
                    recipient_balance,
                }),
            Operation::MiniStatement => {
                statement::handle(ledger, account_id).map(Outcome::Statement)
            }
        }
    }
}
