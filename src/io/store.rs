use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::common::{error::AppError, money::Money};
use crate::domain::{account::Account, ledger::Ledger};

/// Durable storage for the ledger: one JSON document mapping account id to
/// account record, replaced wholesale on every save.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the full account set.
    ///
    /// A path that has never been written gets the default seed ledger,
    /// persisted immediately. A path that exists but cannot be read or
    /// decoded is an error; seeding over it would mask data loss.
    pub fn load(&self) -> Result<Ledger, AppError> {
        if !self.path.exists() {
            let ledger = seed_ledger();
            self.save(&ledger)?;
            tracing::info!(path = %self.path.display(), "no ledger on disk, seeded default accounts");
            return Ok(ledger);
        }

        let file = File::open(&self.path)?;
        let accounts: HashMap<String, Account> = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(path = %self.path.display(), accounts = accounts.len(), "ledger loaded");

        Ok(Ledger::from_accounts(accounts))
    }

    /// Writes the full account set back, replacing prior contents.
    pub fn save(&self, ledger: &Ledger) -> Result<(), AppError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, ledger.accounts())?;
        writer.flush()?;
        tracing::info!(path = %self.path.display(), accounts = ledger.accounts().len(), "ledger saved");

        Ok(())
    }
}

/// Default account set for a fresh installation.
pub fn seed_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.insert(Account::new("101", "Alice", "1234", Money::new(500_000)));
    ledger.insert(Account::new("102", "Bob", "5678", Money::new(250_000)));
    ledger
}
