//! [`SqliteStore`] — the SQLite implementation of [`DebtorStore`].

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension as _, params};

use bodegon_core::{
  company::{Company, CompanyId, NewCompany},
  debtor::{Debtor, DebtorId, DebtorStatus, DebtorUpdate, NewDebtor},
  store::DebtorStore,
};

use crate::{
  Error, Result,
  encode::{RawCompany, RawDebtor, decode_status, encode_dt, encode_status},
  error::{ConstraintKind, constraint_kind},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A debtor ledger backed by a single SQLite file.
///
/// Holds no open connection. Every operation opens its own, scoped to that
/// call; the database file is the only shared state.
#[derive(Debug, Clone)]
pub struct SqliteStore {
  path: PathBuf,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialization.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
    let store = Self { path: path.into() };
    store.initialize()?;
    Ok(store)
  }

  /// Apply the full schema script, creating the database file if it does
  /// not exist yet. The DDL is idempotent, so repeated calls are safe.
  pub fn initialize(&self) -> Result<()> {
    let conn = self.connect()?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
  }

  pub fn path(&self) -> &Path { &self.path }

  /// One connection per operation, released when it goes out of scope.
  /// Referential integrity must be switched on per connection.
  fn connect(&self) -> Result<Connection> {
    let conn = Connection::open(&self.path)?;
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(conn)
  }

  /// The status currently stored for a debtor, or `None` if the row is
  /// absent. Used to name the exact failure of a status transition.
  fn current_status(
    conn: &Connection,
    id: DebtorId,
  ) -> Result<Option<DebtorStatus>> {
    let raw: Option<String> = conn
      .query_row(
        "SELECT status FROM debtors WHERE debtor_id = ?1",
        params![id.0],
        |row| row.get(0),
      )
      .optional()?;
    raw.as_deref().map(decode_status).transpose()
  }
}

/// Translate a constraint failure into the domain error it stands for.
/// Anything that is not a recognised constraint surfaces as a database
/// error unchanged.
fn map_constraint(
  err: rusqlite::Error,
  national_id: Option<&str>,
  company_id: Option<CompanyId>,
) -> Error {
  match constraint_kind(&err) {
    Some(ConstraintKind::Unique) => bodegon_core::Error::DuplicateNationalId(
      national_id.unwrap_or_default().to_owned(),
    )
    .into(),
    Some(ConstraintKind::ForeignKey) => match company_id {
      Some(id) => bodegon_core::Error::CompanyNotFound(id).into(),
      None => Error::Database(err),
    },
    None => Error::Database(err),
  }
}

// ─── DebtorStore impl ────────────────────────────────────────────────────────

impl DebtorStore for SqliteStore {
  type Error = Error;

  // ── Debtors ───────────────────────────────────────────────────────────────

  fn add_debtor(&self, input: NewDebtor) -> Result<Debtor> {
    let conn = self.connect()?;

    conn
      .execute(
        "INSERT INTO debtors (
           name, national_id, phone, address, registered_at, company_id, status
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
          input.name,
          input.national_id,
          input.phone,
          input.address,
          encode_dt(input.registered_at),
          input.company_id.map(|c| c.0),
          encode_status(input.status),
        ],
      )
      .map_err(|e| {
        map_constraint(e, input.national_id.as_deref(), input.company_id)
      })?;

    Ok(Debtor {
      debtor_id:     DebtorId(conn.last_insert_rowid()),
      name:          input.name,
      national_id:   input.national_id,
      phone:         input.phone,
      address:       input.address,
      registered_at: input.registered_at,
      company_id:    input.company_id,
      status:        input.status,
    })
  }

  fn get_debtor(&self, id: DebtorId) -> Result<Option<Debtor>> {
    let conn = self.connect()?;

    let raw = conn
      .query_row(
        "SELECT debtor_id, name, national_id, phone, address,
                registered_at, company_id, status
         FROM debtors WHERE debtor_id = ?1",
        params![id.0],
        RawDebtor::from_row,
      )
      .optional()?;

    raw.map(RawDebtor::into_debtor).transpose()
  }

  fn get_debtor_by_national_id(
    &self,
    national_id: &str,
  ) -> Result<Option<Debtor>> {
    let conn = self.connect()?;

    let raw = conn
      .query_row(
        "SELECT debtor_id, name, national_id, phone, address,
                registered_at, company_id, status
         FROM debtors WHERE national_id = ?1",
        params![national_id],
        RawDebtor::from_row,
      )
      .optional()?;

    raw.map(RawDebtor::into_debtor).transpose()
  }

  fn list_debtors(
    &self,
    status: Option<DebtorStatus>,
  ) -> Result<Vec<Debtor>> {
    let conn = self.connect()?;

    let raws: Vec<RawDebtor> = if let Some(status) = status {
      let mut stmt = conn.prepare(
        "SELECT debtor_id, name, national_id, phone, address,
                registered_at, company_id, status
         FROM debtors WHERE status = ?1 ORDER BY name ASC",
      )?;
      let rows = stmt
        .query_map(params![encode_status(status)], RawDebtor::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      rows
    } else {
      let mut stmt = conn.prepare(
        "SELECT debtor_id, name, national_id, phone, address,
                registered_at, company_id, status
         FROM debtors ORDER BY name ASC",
      )?;
      let rows = stmt
        .query_map([], RawDebtor::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      rows
    };

    raws.into_iter().map(RawDebtor::into_debtor).collect()
  }

  fn update_debtor(
    &self,
    id: DebtorId,
    update: DebtorUpdate,
  ) -> Result<()> {
    let conn = self.connect()?;

    let affected = conn
      .execute(
        "UPDATE debtors
         SET name = ?1,
             national_id = ?2,
             phone = ?3,
             address = ?4,
             company_id = ?5,
             status = ?6
         WHERE debtor_id = ?7",
        params![
          update.name,
          update.national_id,
          update.phone,
          update.address,
          update.company_id.map(|c| c.0),
          encode_status(update.status),
          id.0,
        ],
      )
      .map_err(|e| {
        map_constraint(e, update.national_id.as_deref(), update.company_id)
      })?;

    if affected == 0 {
      return Err(bodegon_core::Error::DebtorNotFound(id).into());
    }
    Ok(())
  }

  // ── Status transitions ────────────────────────────────────────────────────

  fn deactivate_debtor(&self, id: DebtorId) -> Result<()> {
    let conn = self.connect()?;

    let affected = conn.execute(
      "UPDATE debtors SET status = 'I' WHERE debtor_id = ?1 AND status = 'A'",
      params![id.0],
    )?;
    if affected == 1 {
      return Ok(());
    }

    match Self::current_status(&conn, id)? {
      None => Err(bodegon_core::Error::DebtorNotFound(id).into()),
      Some(_) => Err(bodegon_core::Error::AlreadyInactive(id).into()),
    }
  }

  fn reactivate_debtor(&self, id: DebtorId) -> Result<()> {
    let conn = self.connect()?;

    let affected = conn.execute(
      "UPDATE debtors SET status = 'A' WHERE debtor_id = ?1 AND status = 'I'",
      params![id.0],
    )?;
    if affected == 1 {
      return Ok(());
    }

    match Self::current_status(&conn, id)? {
      None => Err(bodegon_core::Error::DebtorNotFound(id).into()),
      Some(_) => Err(bodegon_core::Error::AlreadyActive(id).into()),
    }
  }

  // ── Companies ─────────────────────────────────────────────────────────────

  fn add_company(&self, input: NewCompany) -> Result<Company> {
    let conn = self.connect()?;

    conn.execute(
      "INSERT INTO companies (name) VALUES (?1)",
      params![input.name],
    )?;

    Ok(Company {
      company_id: CompanyId(conn.last_insert_rowid()),
      name:       input.name,
    })
  }

  fn get_company(&self, id: CompanyId) -> Result<Option<Company>> {
    let conn = self.connect()?;

    let raw = conn
      .query_row(
        "SELECT company_id, name FROM companies WHERE company_id = ?1",
        params![id.0],
        RawCompany::from_row,
      )
      .optional()?;

    Ok(raw.map(RawCompany::into_company))
  }
}
