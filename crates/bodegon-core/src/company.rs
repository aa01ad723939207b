//! Company — the referent of a debtor's optional company link.

use serde::{Deserialize, Serialize};

/// Row identifier for a company. Assigned by the store on insert.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompanyId(pub i64);

impl std::fmt::Display for CompanyId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

/// A persisted company row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
  pub company_id: CompanyId,
  pub name:       String,
}

/// Input for creating a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCompany {
  pub name: String,
}

impl NewCompany {
  pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}
