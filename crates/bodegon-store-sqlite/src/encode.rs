//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, statuses as the single-letter
//! discriminants `'A'` / `'I'`. The `Raw*` structs are the one place where
//! row columns are bound by name; every query maps through them.

use bodegon_core::{
  company::{Company, CompanyId},
  debtor::{Debtor, DebtorId, DebtorStatus},
};
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── DebtorStatus ────────────────────────────────────────────────────────────

pub fn encode_status(s: DebtorStatus) -> &'static str {
  match s {
    DebtorStatus::Active => "A",
    DebtorStatus::Inactive => "I",
  }
}

pub fn decode_status(s: &str) -> Result<DebtorStatus> {
  match s {
    "A" => Ok(DebtorStatus::Active),
    "I" => Ok(DebtorStatus::Inactive),
    other => Err(Error::UnknownStatus(other.to_owned())),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `debtors` row.
pub struct RawDebtor {
  pub debtor_id:     i64,
  pub name:          String,
  pub national_id:   Option<String>,
  pub phone:         Option<String>,
  pub address:       Option<String>,
  pub registered_at: String,
  pub company_id:    Option<i64>,
  pub status:        String,
}

impl RawDebtor {
  /// Column binding for `SELECT ... FROM debtors` queries.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      debtor_id:     row.get("debtor_id")?,
      name:          row.get("name")?,
      national_id:   row.get("national_id")?,
      phone:         row.get("phone")?,
      address:       row.get("address")?,
      registered_at: row.get("registered_at")?,
      company_id:    row.get("company_id")?,
      status:        row.get("status")?,
    })
  }

  pub fn into_debtor(self) -> Result<Debtor> {
    Ok(Debtor {
      debtor_id:     DebtorId(self.debtor_id),
      name:          self.name,
      national_id:   self.national_id,
      phone:         self.phone,
      address:       self.address,
      registered_at: decode_dt(&self.registered_at)?,
      company_id:    self.company_id.map(CompanyId),
      status:        decode_status(&self.status)?,
    })
  }
}

/// Raw values read directly from a `companies` row.
pub struct RawCompany {
  pub company_id: i64,
  pub name:       String,
}

impl RawCompany {
  /// Column binding for `SELECT ... FROM companies` queries.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      company_id: row.get("company_id")?,
      name:       row.get("name")?,
    })
  }

  pub fn into_company(self) -> Company {
    Company {
      company_id: CompanyId(self.company_id),
      name:       self.name,
    }
  }
}
