//! Error type for `bodegon-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("ledger error: {0}")]
  Core(#[from] bodegon_core::Error),

  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("unknown status discriminant: {0:?}")]
  UnknownStatus(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Constraint classification ───────────────────────────────────────────────

/// The constraint class of a failed statement, read off SQLite's extended
/// result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintKind {
  Unique,
  ForeignKey,
}

pub(crate) fn constraint_kind(err: &rusqlite::Error) -> Option<ConstraintKind> {
  match err {
    rusqlite::Error::SqliteFailure(e, _) => match e.extended_code {
      rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => Some(ConstraintKind::Unique),
      rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
        Some(ConstraintKind::ForeignKey)
      }
      _ => None,
    },
    _ => None,
  }
}
