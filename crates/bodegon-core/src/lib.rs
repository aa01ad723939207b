//! Core types and trait definitions for the bodegón debtor ledger.
//!
//! This crate is deliberately free of database dependencies.
//! The storage backend and the CLI depend on it; it depends on nothing
//! beyond serialization, timestamps, and error derives.

pub mod company;
pub mod debtor;
pub mod error;
pub mod store;

pub use error::{Error, Result};
