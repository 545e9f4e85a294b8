use crate::{common::error::AppError, domain::ledger::Ledger};

/// Returns the account's history in chronological order. An account with no
/// transactions yields an empty list; rendering the "no transactions"
/// message is the caller's job.
pub fn handle(ledger: &Ledger, id: &str) -> Result<Vec<String>, AppError> {
    ledger
        .account(id)
        .map(|acc| acc.history.clone())
        .ok_or_else(|| AppError::AccountNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::common::money::Money;
    use crate::domain::account::Account;
    use crate::worker::handlers::{deposit, withdrawal};

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn empty_history_yields_empty_list() {
        let mut ledger = Ledger::new();
        ledger.insert(Account::new("101", "Alice", "1234", money("100")));

        assert!(handle(&ledger, "101").unwrap().is_empty());
    }

    #[test]
    fn entries_come_back_in_chronological_order() {
        let mut ledger = Ledger::new();
        ledger.insert(Account::new("101", "Alice", "1234", money("1000")));

        deposit::handle(&mut ledger, "101", money("10")).unwrap();
        withdrawal::handle(&mut ledger, "101", money("5")).unwrap();
        deposit::handle(&mut ledger, "101", money("2.50")).unwrap();

        let entries = handle(&ledger, "101").unwrap();
        assert_eq!(
            entries,
            vec!["Deposited: 10.00", "Withdrew: 5.00", "Deposited: 2.50"]
        );
    }

    #[test]
    fn only_the_ten_most_recent_entries_survive() {
        let mut ledger = Ledger::new();
        ledger.insert(Account::new("101", "Alice", "1234", money("10000")));

        for _ in 0..11 {
            deposit::handle(&mut ledger, "101", money("1")).unwrap();
        }
        withdrawal::handle(&mut ledger, "101", money("1")).unwrap();

        let entries = handle(&ledger, "101").unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries.last().unwrap(), "Withdrew: 1.00");
        assert!(entries.iter().take(9).all(|e| e == "Deposited: 1.00"));
    }

    #[test]
    fn unknown_account_is_a_typed_error() {
        let ledger = Ledger::new();
        assert!(matches!(
            handle(&ledger, "999"),
            Err(AppError::AccountNotFound(_))
        ));
    }
}
