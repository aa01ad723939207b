//! Error types for `bodegon-core`.

use thiserror::Error;

use crate::{company::CompanyId, debtor::DebtorId};

#[derive(Debug, Error)]
pub enum Error {
  #[error("debtor not found: {0}")]
  DebtorNotFound(DebtorId),

  #[error("company not found: {0}")]
  CompanyNotFound(CompanyId),

  #[error("national id {0:?} is already registered to another debtor")]
  DuplicateNationalId(String),

  #[error("debtor {0} is already inactive")]
  AlreadyInactive(DebtorId),

  #[error("debtor {0} is already active")]
  AlreadyActive(DebtorId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
