use crate::common::money::Money;

/// A parsed menu selection handed from the session controller to the worker
/// for processing. Amounts arrive here already validated as numeric; a raw
/// string that fails to parse never becomes an `Operation`.
#[derive(Debug)]
pub enum Operation {
    CheckBalance,
    Deposit { amount: Money },
    Withdraw { amount: Money },
    Transfer { to: String, amount: Money },
    MiniStatement,
}
