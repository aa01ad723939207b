//! Debtor — one record per person or business owing money to the store.
//!
//! A debtor is never physically deleted. Its visibility in the active
//! listing is controlled by [`DebtorStatus`]; deactivation is the soft
//! delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::company::CompanyId;

// ─── Identifier ──────────────────────────────────────────────────────────────

/// Row identifier for a debtor. Assigned by the store on insert, permanent,
/// and never reused for another debtor.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DebtorId(pub i64);

impl std::fmt::Display for DebtorId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Whether the debtor shows up in the active listing.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DebtorStatus {
  #[default]
  Active,
  Inactive,
}

impl DebtorStatus {
  pub fn is_active(&self) -> bool { matches!(self, Self::Active) }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted debtor row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debtor {
  pub debtor_id:     DebtorId,
  pub name:          String,
  /// Cedula. Unique across all debtors when present.
  pub national_id:   Option<String>,
  pub phone:         Option<String>,
  pub address:       Option<String>,
  /// Set once at creation; updates never touch it.
  pub registered_at: DateTime<Utc>,
  /// The company this person owes through, if any. Must reference an
  /// existing company row; the store enforces the constraint.
  pub company_id:    Option<CompanyId>,
  pub status:        DebtorStatus,
}

/// Input for creating a debtor. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDebtor {
  pub name:          String,
  pub registered_at: DateTime<Utc>,
  pub national_id:   Option<String>,
  pub phone:         Option<String>,
  pub address:       Option<String>,
  pub company_id:    Option<CompanyId>,
  pub status:        DebtorStatus,
}

impl NewDebtor {
  /// A debtor with only the required fields; everything else absent,
  /// status defaulting to [`DebtorStatus::Active`].
  pub fn new(name: impl Into<String>, registered_at: DateTime<Utc>) -> Self {
    Self {
      name: name.into(),
      registered_at,
      national_id: None,
      phone: None,
      address: None,
      company_id: None,
      status: DebtorStatus::default(),
    }
  }
}

/// A full overwrite of every mutable debtor field.
///
/// `registered_at` is deliberately absent — the registration timestamp is
/// immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtorUpdate {
  pub name:        String,
  pub national_id: Option<String>,
  pub phone:       Option<String>,
  pub address:     Option<String>,
  pub company_id:  Option<CompanyId>,
  pub status:      DebtorStatus,
}

impl From<Debtor> for DebtorUpdate {
  /// Start an update from the debtor's current state.
  fn from(d: Debtor) -> Self {
    Self {
      name:        d.name,
      national_id: d.national_id,
      phone:       d.phone,
      address:     d.address,
      company_id:  d.company_id,
      status:      d.status,
    }
  }
}
