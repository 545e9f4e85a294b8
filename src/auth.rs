use crate::common::error::AppError;
use crate::domain::ledger::Ledger;

pub const MAX_ATTEMPTS: u32 = 3;

/// Supplies PIN guesses on demand, up to `MAX_ATTEMPTS` per authentication.
/// `attempts_left` tells the implementation how many guesses remain so an
/// interactive prompt can display it. Returning `None` means the caller has
/// no more guesses to give.
pub trait PinProvider {
    fn next_pin(&mut self, attempts_left: u32) -> Option<String>;
}

impl PinProvider for Vec<String> {
    fn next_pin(&mut self, _attempts_left: u32) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }
}

/// Resolves one authenticated account id from the ledger.
///
/// An unknown account number fails immediately without requesting a PIN.
/// Otherwise up to `MAX_ATTEMPTS` guesses are compared by exact string
/// equality; a match returns at once, exhausting the attempts (or the
/// provider) locks the caller out. Lockout is scoped to this call only.
pub fn authenticate<P: PinProvider>(
    ledger: &Ledger,
    account_id: &str,
    pins: &mut P,
) -> Result<String, AppError> {
    let account = ledger
        .account(account_id)
        .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))?;

    let mut attempts = 0;
    while attempts < MAX_ATTEMPTS {
        let Some(guess) = pins.next_pin(MAX_ATTEMPTS - attempts) else {
            break;
        };

        if guess == account.pin {
            return Ok(account.id.clone());
        }

        attempts += 1;
        tracing::warn!(account = %account_id, attempts, "incorrect PIN");
    }

    Err(AppError::LockedOut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;
    use crate::domain::account::Account;

    // Provider that records how many guesses were requested.
    struct CountingPins {
        pins: Vec<String>,
        requested: u32,
    }

    impl CountingPins {
        fn new(pins: &[&str]) -> Self {
            Self {
                pins: pins.iter().map(|p| p.to_string()).collect(),
                requested: 0,
            }
        }
    }

    impl PinProvider for CountingPins {
        fn next_pin(&mut self, _attempts_left: u32) -> Option<String> {
            self.requested += 1;
            if self.pins.is_empty() {
                None
            } else {
                Some(self.pins.remove(0))
            }
        }
    }

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.insert(Account::new("101", "Alice", "1234", Money::new(500_000)));
        ledger
    }

    #[test]
    fn correct_pin_on_first_attempt_consumes_one_guess() {
        let ledger = ledger();
        let mut pins = CountingPins::new(&["1234"]);

        let id = authenticate(&ledger, "101", &mut pins).unwrap();
        assert_eq!(id, "101");
        assert_eq!(pins.requested, 1);
    }

    #[test]
    fn correct_pin_on_last_attempt_succeeds() {
        let ledger = ledger();
        let mut pins = CountingPins::new(&["0000", "9999", "1234"]);

        let id = authenticate(&ledger, "101", &mut pins).unwrap();
        assert_eq!(id, "101");
        assert_eq!(pins.requested, 3);
    }

    #[test]
    fn three_wrong_guesses_lock_out() {
        let ledger = ledger();
        let mut pins = CountingPins::new(&["0000", "1111", "2222", "1234"]);

        let err = authenticate(&ledger, "101", &mut pins).unwrap_err();
        assert!(matches!(err, AppError::LockedOut));
        // The fourth (correct) guess must never be requested.
        assert_eq!(pins.requested, 3);
    }

    #[test]
    fn unknown_account_fails_without_requesting_a_pin() {
        let ledger = ledger();
        let mut pins = CountingPins::new(&["1234"]);

        let err = authenticate(&ledger, "999", &mut pins).unwrap_err();
        assert!(matches!(err, AppError::AccountNotFound(id) if id == "999"));
        assert_eq!(pins.requested, 0);
    }

    #[test]
    fn exhausted_provider_locks_out() {
        let ledger = ledger();
        let mut pins = CountingPins::new(&["0000"]);

        let err = authenticate(&ledger, "101", &mut pins).unwrap_err();
        assert!(matches!(err, AppError::LockedOut));
    }

    #[test]
    fn pin_comparison_is_exact() {
        let ledger = ledger();
        // Whitespace and prefixes must not match.
        let mut pins: Vec<String> = vec!["1234 ".into(), " 1234".into(), "123".into()];

        let err = authenticate(&ledger, "101", &mut pins).unwrap_err();
        assert!(matches!(err, AppError::LockedOut));
    }
}
