//! SQLite backend for the bodegón debtor ledger.
//!
//! Synchronous and single-threaded by design: every operation opens its own
//! connection to the database file, executes one parameterized statement,
//! and releases the connection before returning. Nothing is pooled and no
//! connection outlives the call that opened it.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
