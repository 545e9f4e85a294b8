use serde::{Deserialize, Serialize};

use crate::common::money::Money;

/// The history log keeps only the most recent entries, oldest evicted first.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account number, also the ledger key.
    pub id: String,
    pub name: String,
    /// Opaque credential, compared by exact string equality.
    pub pin: String,
    pub balance: Money,
    /// Mini-statement entries in chronological order, bounded to
    /// `HISTORY_LIMIT`.
    #[serde(default)]
    pub history: Vec<String>,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pin: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pin: pin.into(),
            balance,
            history: Vec::new(),
        }
    }

    /// Appends a transaction record, evicting the oldest entry once the log
    /// is full.
    pub fn log(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
    }
}
