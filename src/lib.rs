//! Single-user ATM ledger: PIN authentication with lockout, balance
//! operations with a bounded mini-statement history, and JSON persistence
//! between sessions.

pub mod app;
pub mod auth;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
