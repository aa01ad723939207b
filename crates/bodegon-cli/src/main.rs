//! `bodegon` — command-line front end for the bodegón debtor ledger.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the
//! SQLite store at the configured path, and dispatches one repository
//! operation per invocation.
//!
//! ```
//! bodegon init
//! bodegon add "Juan Pérez" --national-id V10000001 --phone 0412-0001122
//! bodegon list --all --json
//! bodegon deactivate 1
//! ```

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bodegon_store_sqlite::SqliteStore;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "bodegon", about = "Debtor ledger for the bodegón", version)]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
  config: PathBuf,

  /// Database file; overrides the configured path.
  #[arg(long, value_name = "FILE")]
  db: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Create the database file if needed and apply the schema.
  Init,

  /// Register a new debtor.
  Add {
    name: String,

    /// Cedula; must be unique across all debtors.
    #[arg(long, value_name = "CEDULA")]
    national_id: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    /// Id of the company this debtor owes through.
    #[arg(long, value_name = "ID")]
    company: Option<i64>,
  },

  /// List debtors ordered by name; active ones only unless --all.
  #[command(alias = "ls")]
  List {
    #[arg(long)]
    all: bool,

    #[arg(long)]
    json: bool,
  },

  /// Show one debtor, by id or by cedula.
  Show {
    id: Option<i64>,

    #[arg(long, value_name = "CEDULA", conflicts_with = "id")]
    national_id: Option<String>,

    #[arg(long)]
    json: bool,
  },

  /// Overwrite a debtor's mutable fields; flags not given keep their
  /// current value. The registration timestamp never changes.
  Update {
    id: i64,

    #[arg(long)]
    name: Option<String>,

    #[arg(long, value_name = "CEDULA")]
    national_id: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long, value_name = "ID")]
    company: Option<i64>,

    #[arg(long, value_enum)]
    status: Option<StatusArg>,
  },

  /// Mark an active debtor inactive (the soft delete).
  Deactivate { id: i64 },

  /// Mark an inactive debtor active again.
  Reactivate { id: i64 },

  /// Register a company that debtors can reference.
  AddCompany { name: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
  Active,
  Inactive,
}

impl From<StatusArg> for bodegon_core::debtor::DebtorStatus {
  fn from(s: StatusArg) -> Self {
    match s {
      StatusArg::Active => Self::Active,
      StatusArg::Inactive => Self::Inactive,
    }
  }
}

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `config.toml` and
/// `BODEGON_`-prefixed environment variables.
#[derive(Deserialize, Clone)]
struct LedgerConfig {
  store_path: PathBuf,
}

fn load_config(path: &Path) -> Result<LedgerConfig> {
  let settings = config::Config::builder()
    .set_default("store_path", "bodegon_data.sqlite3")?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("BODEGON"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise LedgerConfig")
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // CLI flag overrides the config file, which overrides the default.
  let config = load_config(&cli.config)?;
  let store_path = expand_tilde(cli.db.as_deref().unwrap_or(&config.store_path));

  let store = SqliteStore::open(&store_path)
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  match cli.command {
    Command::Init => commands::init(&store),
    Command::Add { name, national_id, phone, address, company } => {
      commands::add(&store, name, national_id, phone, address, company)
    }
    Command::List { all, json } => commands::list(&store, all, json),
    Command::Show { id, national_id, json } => {
      commands::show(&store, id, national_id, json)
    }
    Command::Update {
      id,
      name,
      national_id,
      phone,
      address,
      company,
      status,
    } => commands::update(
      &store,
      id,
      name,
      national_id,
      phone,
      address,
      company,
      status.map(Into::into),
    ),
    Command::Deactivate { id } => commands::deactivate(&store, id),
    Command::Reactivate { id } => commands::reactivate(&store, id),
    Command::AddCompany { name } => commands::add_company(&store, name),
  }
}
