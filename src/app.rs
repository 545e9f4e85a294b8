use std::io::{self, BufRead, Write};

use crate::{
    auth::{self, PinProvider},
    common::{error::AppError, event::Operation, money::Money},
    io::store::JsonStore,
    worker::processor::{Outcome, Processor},
};

pub const DEFAULT_DATA_FILE: &str = "accounts.json";

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_DATA_FILE);
    let store = JsonStore::new(path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&store, &mut stdin.lock(), &mut stdout.lock())
}

/// Runs one full session: load, authenticate, menu loop, save on exit.
///
/// Generic over the input and output streams so whole sessions can be
/// driven from byte buffers in tests. Input ending mid-session abandons it
/// without saving; only the explicit exit choice persists the ledger.
pub fn session<R: BufRead, W: Write>(
    store: &JsonStore,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let mut ledger = store.load()?;

    writeln!(output, "\n--- Welcome to ATM ---")?;
    let Some(account_id) = prompt(input, output, "Enter Account Number: ")? else {
        return Ok(());
    };

    let current = {
        let mut pins = PromptPins {
            input: &mut *input,
            output: &mut *output,
        };
        match auth::authenticate(&ledger, &account_id, &mut pins) {
            Ok(id) => id,
            Err(e @ (AppError::AccountNotFound(_) | AppError::LockedOut)) => {
                writeln!(output, "{e}")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    };

    if let Some(acc) = ledger.account(&current) {
        writeln!(output, "Login Successful! Welcome, {}.", acc.name)?;
    }

    let mut processor = Processor::new();
    loop {
        write_menu(output)?;
        let Some(choice) = prompt(input, output, "Select an option: ")? else {
            return Ok(());
        };

        let op = match choice.as_str() {
            "1" => Operation::CheckBalance,
            "2" => {
                let Some(raw) = prompt(input, output, "Enter deposit amount: ")? else {
                    return Ok(());
                };
                match parse_amount(&raw) {
                    Ok(amount) => Operation::Deposit { amount },
                    Err(e) => {
                        writeln!(output, "{e}")?;
                        continue;
                    }
                }
            }
            "3" => {
                let Some(raw) = prompt(input, output, "Enter withdrawal amount: ")? else {
                    return Ok(());
                };
                match parse_amount(&raw) {
                    Ok(amount) => Operation::Withdraw { amount },
                    Err(e) => {
                        writeln!(output, "{e}")?;
                        continue;
                    }
                }
            }
            "4" => {
                let Some(to) = prompt(input, output, "Enter recipient account number: ")? else {
                    return Ok(());
                };
                let Some(raw) = prompt(input, output, "Enter transfer amount: ")? else {
                    return Ok(());
                };
                match parse_amount(&raw) {
                    Ok(amount) => Operation::Transfer { to, amount },
                    Err(e) => {
                        writeln!(output, "{e}")?;
                        continue;
                    }
                }
            }
            "5" => Operation::MiniStatement,
            "6" => {
                store.save(&ledger)?;
                writeln!(output, "Thank you for using our ATM. Goodbye!")?;
                return Ok(());
            }
            _ => {
                writeln!(output, "Invalid selection.")?;
                continue;
            }
        };

        match processor.process(&mut ledger, &current, op) {
            Ok(outcome) => render_outcome(output, &outcome)?,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

fn parse_amount(raw: &str) -> Result<Money, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput(raw.to_string()))
}

fn write_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output, "\n--- ATM Menu ---")?;
    writeln!(output, "1. Check Balance")?;
    writeln!(output, "2. Deposit")?;
    writeln!(output, "3. Withdraw")?;
    writeln!(output, "4. Transfer")?;
    writeln!(output, "5. Mini Statement")?;
    writeln!(output, "6. Exit")?;
    Ok(())
}

fn render_outcome<W: Write>(output: &mut W, outcome: &Outcome) -> Result<(), AppError> {
    match outcome {
        Outcome::Balance(balance) => writeln!(output, "Current Balance: ${balance}")?,
        Outcome::Deposited { new_balance } => {
            writeln!(output, "Deposit successful! New balance: ${new_balance}")?
        }
        Outcome::Withdrew { new_balance } => writeln!(
            output,
            "Withdrawal successful! Remaining balance: ${new_balance}"
        )?,
        Outcome::Transferred { .. } => writeln!(output, "Transfer successful!")?,
        Outcome::Statement(entries) => {
            writeln!(output, "\n--- Mini Statement ---")?;
            for entry in entries {
                writeln!(output, "{entry}")?;
            }
            if entries.is_empty() {
                writeln!(output, "No transactions yet.")?;
            }
        }
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interactive `PinProvider` over the session streams. Prompt failures end
/// the supply of guesses, which the authenticator treats as lockout.
struct PromptPins<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> PinProvider for PromptPins<'_, R, W> {
    fn next_pin(&mut self, attempts_left: u32) -> Option<String> {
        prompt(
            self.input,
            self.output,
            &format!("Enter PIN ({attempts_left} attempts left): "),
        )
        .ok()
        .flatten()
    }
}
