//! One function per subcommand. Each acquires nothing beyond the store
//! handle, runs one repository operation, and prints the outcome.

use anyhow::{Context as _, Result, bail};
use bodegon_core::{
  company::{CompanyId, NewCompany},
  debtor::{Debtor, DebtorId, DebtorStatus, DebtorUpdate, NewDebtor},
  store::DebtorStore,
};
use bodegon_store_sqlite::SqliteStore;
use chrono::Utc;

// ─── Subcommands ─────────────────────────────────────────────────────────────

pub(crate) fn init(store: &SqliteStore) -> Result<()> {
  store.initialize().context("schema initialization failed")?;
  tracing::info!(path = %store.path().display(), "schema applied");
  println!("Database ready at {}", store.path().display());
  Ok(())
}

pub(crate) fn add(
  store: &SqliteStore,
  name: String,
  national_id: Option<String>,
  phone: Option<String>,
  address: Option<String>,
  company: Option<i64>,
) -> Result<()> {
  let input = NewDebtor {
    national_id,
    phone,
    address,
    company_id: company.map(CompanyId),
    ..NewDebtor::new(name, Utc::now())
  };
  let debtor = store.add_debtor(input)?;
  println!("Debtor {} registered.", debtor.debtor_id);
  Ok(())
}

pub(crate) fn list(store: &SqliteStore, all: bool, json: bool) -> Result<()> {
  let status = if all { None } else { Some(DebtorStatus::Active) };
  let debtors = store.list_debtors(status)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&debtors)?);
    return Ok(());
  }

  for debtor in &debtors {
    print_line(debtor);
  }
  Ok(())
}

pub(crate) fn show(
  store: &SqliteStore,
  id: Option<i64>,
  national_id: Option<String>,
  json: bool,
) -> Result<()> {
  let debtor = match (id, national_id) {
    (Some(id), _) => store.get_debtor(DebtorId(id))?,
    (None, Some(cedula)) => store.get_debtor_by_national_id(&cedula)?,
    (None, None) => bail!("give either an id or --national-id"),
  };
  let debtor = debtor.context("no such debtor")?;

  if json {
    println!("{}", serde_json::to_string_pretty(&debtor)?);
    return Ok(());
  }

  print_detail(store, &debtor)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn update(
  store: &SqliteStore,
  id: i64,
  name: Option<String>,
  national_id: Option<String>,
  phone: Option<String>,
  address: Option<String>,
  company: Option<i64>,
  status: Option<DebtorStatus>,
) -> Result<()> {
  let id = DebtorId(id);
  let current = store
    .get_debtor(id)?
    .with_context(|| format!("debtor {id} not found"))?;

  let mut update = DebtorUpdate::from(current);
  if let Some(name) = name {
    update.name = name;
  }
  if let Some(cedula) = national_id {
    update.national_id = Some(cedula);
  }
  if let Some(phone) = phone {
    update.phone = Some(phone);
  }
  if let Some(address) = address {
    update.address = Some(address);
  }
  if let Some(company) = company {
    update.company_id = Some(CompanyId(company));
  }
  if let Some(status) = status {
    update.status = status;
  }

  store.update_debtor(id, update)?;
  println!("Debtor {id} updated.");
  Ok(())
}

pub(crate) fn deactivate(store: &SqliteStore, id: i64) -> Result<()> {
  store.deactivate_debtor(DebtorId(id))?;
  println!("Debtor {id} deactivated.");
  Ok(())
}

pub(crate) fn reactivate(store: &SqliteStore, id: i64) -> Result<()> {
  store.reactivate_debtor(DebtorId(id))?;
  println!("Debtor {id} reactivated.");
  Ok(())
}

pub(crate) fn add_company(store: &SqliteStore, name: String) -> Result<()> {
  let company = store.add_company(NewCompany::new(name))?;
  println!("Company {} registered.", company.company_id);
  Ok(())
}

// ─── Output helpers ──────────────────────────────────────────────────────────

fn status_label(status: DebtorStatus) -> &'static str {
  match status {
    DebtorStatus::Active => "active",
    DebtorStatus::Inactive => "inactive",
  }
}

fn print_line(debtor: &Debtor) {
  println!(
    "{:>5}  {:<30}  {:<12}  {}",
    debtor.debtor_id,
    debtor.name,
    debtor.national_id.as_deref().unwrap_or("-"),
    status_label(debtor.status),
  );
}

fn print_detail(store: &SqliteStore, debtor: &Debtor) -> Result<()> {
  let company = match debtor.company_id {
    Some(id) => store
      .get_company(id)?
      .map(|c| format!("{} ({})", c.name, c.company_id)),
    None => None,
  };

  println!("id:            {}", debtor.debtor_id);
  println!("name:          {}", debtor.name);
  println!(
    "national id:   {}",
    debtor.national_id.as_deref().unwrap_or("-")
  );
  println!("phone:         {}", debtor.phone.as_deref().unwrap_or("-"));
  println!(
    "address:       {}",
    debtor.address.as_deref().unwrap_or("-")
  );
  println!(
    "registered at: {}",
    debtor.registered_at.format("%Y-%m-%d %H:%M:%S UTC")
  );
  println!("company:       {}", company.as_deref().unwrap_or("-"));
  println!("status:        {}", status_label(debtor.status));
  Ok(())
}
