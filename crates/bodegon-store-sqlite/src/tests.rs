//! Integration tests for `SqliteStore` against a throwaway on-disk
//! database. Connection-per-call means an in-memory database would vanish
//! between operations, so every test gets its own temp directory.

use bodegon_core::{
  Error as CoreError,
  company::{CompanyId, NewCompany},
  debtor::{DebtorId, DebtorStatus, DebtorUpdate, NewDebtor},
  store::DebtorStore,
};
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use crate::{Error, SqliteStore};

fn store() -> (SqliteStore, TempDir) {
  let dir = TempDir::new().expect("temp dir");
  let store = SqliteStore::open(dir.path().join("bodegon_data.sqlite3"))
    .expect("open store");
  (store, dir)
}

fn ts() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap()
}

fn debtor(name: &str) -> NewDebtor { NewDebtor::new(name, ts()) }

fn debtor_with_cedula(name: &str, cedula: &str) -> NewDebtor {
  NewDebtor {
    national_id: Some(cedula.into()),
    ..NewDebtor::new(name, ts())
  }
}

// ─── Initialization ──────────────────────────────────────────────────────────

#[test]
fn open_creates_database_file() {
  let (s, _dir) = store();
  assert!(s.path().exists());
}

#[test]
fn initialize_is_idempotent() {
  let (s, _dir) = store();
  let added = s.add_debtor(debtor("Ana")).unwrap();

  s.initialize().unwrap();
  s.initialize().unwrap();

  let fetched = s.get_debtor(added.debtor_id).unwrap();
  assert!(fetched.is_some());
}

// ─── Add / get ───────────────────────────────────────────────────────────────

#[test]
fn add_and_get_debtor() {
  let (s, _dir) = store();

  let input = NewDebtor {
    national_id: Some("V10000001".into()),
    phone: Some("0412-0001122".into()),
    address: Some("Calle Bolívar 123".into()),
    ..NewDebtor::new("Juan Pérez", ts())
  };
  let added = s.add_debtor(input).unwrap();
  assert!(added.debtor_id.0 > 0);
  assert_eq!(added.status, DebtorStatus::Active);

  let by_id = s.get_debtor(added.debtor_id).unwrap().unwrap();
  assert_eq!(by_id.name, "Juan Pérez");
  assert_eq!(by_id.national_id.as_deref(), Some("V10000001"));
  assert_eq!(by_id.phone.as_deref(), Some("0412-0001122"));
  assert_eq!(by_id.registered_at, ts());

  let by_cedula = s.get_debtor_by_national_id("V10000001").unwrap().unwrap();
  assert_eq!(by_cedula.debtor_id, added.debtor_id);
}

#[test]
fn add_with_only_required_fields() {
  let (s, _dir) = store();

  let added = s.add_debtor(debtor("Ana")).unwrap();
  let fetched = s.get_debtor(added.debtor_id).unwrap().unwrap();

  assert_eq!(fetched.name, "Ana");
  assert!(fetched.national_id.is_none());
  assert!(fetched.phone.is_none());
  assert!(fetched.address.is_none());
  assert!(fetched.company_id.is_none());
  assert_eq!(fetched.status, DebtorStatus::Active);
}

#[test]
fn add_duplicate_national_id_errors_without_inserting() {
  let (s, _dir) = store();

  s.add_debtor(debtor_with_cedula("Juan Pérez", "V10000001"))
    .unwrap();
  let err = s
    .add_debtor(debtor_with_cedula("Juan Pérez Duplicado", "V10000001"))
    .unwrap_err();

  assert!(matches!(
    err,
    Error::Core(CoreError::DuplicateNationalId(ref cedula)) if cedula == "V10000001"
  ));
  assert_eq!(s.list_debtors(None).unwrap().len(), 1);
}

#[test]
fn get_debtor_missing_returns_none() {
  let (s, _dir) = store();
  assert!(s.get_debtor(DebtorId(404)).unwrap().is_none());
  assert!(s.get_debtor_by_national_id("V99999999").unwrap().is_none());
}

// ─── Company reference ───────────────────────────────────────────────────────

#[test]
fn add_with_dangling_company_errors() {
  let (s, _dir) = store();

  let input = NewDebtor {
    company_id: Some(CompanyId(999)),
    ..NewDebtor::new("Ana", ts())
  };
  let err = s.add_debtor(input).unwrap_err();

  assert!(matches!(
    err,
    Error::Core(CoreError::CompanyNotFound(CompanyId(999)))
  ));
}

#[test]
fn add_with_existing_company_succeeds() {
  let (s, _dir) = store();

  let company = s
    .add_company(NewCompany::new("Distribuidora El Llano"))
    .unwrap();
  assert!(s.get_company(company.company_id).unwrap().is_some());

  let input = NewDebtor {
    company_id: Some(company.company_id),
    ..NewDebtor::new("Ana", ts())
  };
  let added = s.add_debtor(input).unwrap();

  let fetched = s.get_debtor(added.debtor_id).unwrap().unwrap();
  assert_eq!(fetched.company_id, Some(company.company_id));
}

#[test]
fn get_company_missing_returns_none() {
  let (s, _dir) = store();
  assert!(s.get_company(CompanyId(404)).unwrap().is_none());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[test]
fn list_orders_by_name_and_filters_by_status() {
  let (s, _dir) = store();

  let carlos = s.add_debtor(debtor("Carlos")).unwrap();
  s.add_debtor(debtor("Ana")).unwrap();
  s.add_debtor(debtor("Beatriz")).unwrap();
  s.deactivate_debtor(carlos.debtor_id).unwrap();

  let active = s.list_debtors(Some(DebtorStatus::Active)).unwrap();
  let names: Vec<_> = active.iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, ["Ana", "Beatriz"]);
  assert!(active.iter().all(|d| d.status.is_active()));

  let all = s.list_debtors(None).unwrap();
  let names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, ["Ana", "Beatriz", "Carlos"]);
}

#[test]
fn list_empty_store_returns_no_rows() {
  let (s, _dir) = store();
  assert!(s.list_debtors(None).unwrap().is_empty());
  assert!(s.list_debtors(Some(DebtorStatus::Active)).unwrap().is_empty());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[test]
fn update_overwrites_mutable_fields_and_keeps_registration() {
  let (s, _dir) = store();

  let added = s
    .add_debtor(debtor_with_cedula("Juan Pérez", "V10000001"))
    .unwrap();

  let update = DebtorUpdate {
    name: "Juan P. Rodríguez".into(),
    phone: Some("0414-5556677".into()),
    ..DebtorUpdate::from(added.clone())
  };
  s.update_debtor(added.debtor_id, update).unwrap();

  let fetched = s.get_debtor(added.debtor_id).unwrap().unwrap();
  assert_eq!(fetched.name, "Juan P. Rodríguez");
  assert_eq!(fetched.phone.as_deref(), Some("0414-5556677"));
  assert_eq!(fetched.national_id.as_deref(), Some("V10000001"));
  assert_eq!(fetched.registered_at, added.registered_at);
}

#[test]
fn update_missing_debtor_errors() {
  let (s, _dir) = store();

  let update = DebtorUpdate {
    name: "Nadie".into(),
    national_id: None,
    phone: None,
    address: None,
    company_id: None,
    status: DebtorStatus::Active,
  };
  let err = s.update_debtor(DebtorId(404), update).unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::DebtorNotFound(DebtorId(404)))
  ));
}

#[test]
fn update_to_colliding_national_id_leaves_row_unmodified() {
  let (s, _dir) = store();

  s.add_debtor(debtor_with_cedula("Juan Pérez", "V10000001"))
    .unwrap();
  let ana = s
    .add_debtor(debtor_with_cedula("Ana", "V20000002"))
    .unwrap();

  let update = DebtorUpdate {
    name: "Ana Renombrada".into(),
    national_id: Some("V10000001".into()),
    ..DebtorUpdate::from(ana.clone())
  };
  let err = s.update_debtor(ana.debtor_id, update).unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::DuplicateNationalId(_))
  ));

  let fetched = s.get_debtor(ana.debtor_id).unwrap().unwrap();
  assert_eq!(fetched.name, "Ana");
  assert_eq!(fetched.national_id.as_deref(), Some("V20000002"));
}

// ─── Status transitions ──────────────────────────────────────────────────────

#[test]
fn deactivate_then_reactivate_round_trip() {
  let (s, _dir) = store();
  let added = s.add_debtor(debtor("Ana")).unwrap();

  s.deactivate_debtor(added.debtor_id).unwrap();
  let inactive = s.get_debtor(added.debtor_id).unwrap().unwrap();
  assert_eq!(inactive.status, DebtorStatus::Inactive);

  s.reactivate_debtor(added.debtor_id).unwrap();
  let active = s.get_debtor(added.debtor_id).unwrap().unwrap();
  assert_eq!(active.status, DebtorStatus::Active);
}

#[test]
fn deactivate_already_inactive_errors_and_preserves_state() {
  let (s, _dir) = store();
  let added = s.add_debtor(debtor("Ana")).unwrap();
  s.deactivate_debtor(added.debtor_id).unwrap();

  let err = s.deactivate_debtor(added.debtor_id).unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::AlreadyInactive(_))
  ));

  let fetched = s.get_debtor(added.debtor_id).unwrap().unwrap();
  assert_eq!(fetched.status, DebtorStatus::Inactive);
}

#[test]
fn deactivate_missing_debtor_errors() {
  let (s, _dir) = store();
  let err = s.deactivate_debtor(DebtorId(404)).unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::DebtorNotFound(DebtorId(404)))
  ));
}

#[test]
fn reactivate_already_active_errors() {
  let (s, _dir) = store();
  let added = s.add_debtor(debtor("Ana")).unwrap();

  let err = s.reactivate_debtor(added.debtor_id).unwrap_err();
  assert!(matches!(err, Error::Core(CoreError::AlreadyActive(_))));
}

#[test]
fn reactivate_missing_debtor_errors() {
  let (s, _dir) = store();
  let err = s.reactivate_debtor(DebtorId(404)).unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::DebtorNotFound(DebtorId(404)))
  ));
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[test]
fn end_to_end_ledger_scenario() {
  let (s, _dir) = store();

  let juan = s
    .add_debtor(debtor_with_cedula("Juan Pérez", "V10000001"))
    .unwrap();
  assert_eq!(juan.debtor_id, DebtorId(1));

  let ana = s.add_debtor(debtor("Ana")).unwrap();
  assert_eq!(ana.debtor_id, DebtorId(2));

  let err = s
    .add_debtor(debtor_with_cedula("Juan Pérez Duplicado", "V10000001"))
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::DuplicateNationalId(_))
  ));

  let active = s.list_debtors(Some(DebtorStatus::Active)).unwrap();
  let names: Vec<_> = active.iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, ["Ana", "Juan Pérez"]);
}
