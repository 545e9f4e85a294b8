pub mod balance;
pub mod deposit;
pub mod statement;
pub mod transfer;
pub mod withdrawal;
