//! SQL schema for the bodegón SQLite store.
//!
//! The DDL lives in `schema.sql` next to this module and is embedded at
//! compile time. It is idempotent thanks to `CREATE TABLE IF NOT EXISTS`
//! and is applied verbatim, in full, on every initialization.

pub const SCHEMA: &str = include_str!("schema.sql");
