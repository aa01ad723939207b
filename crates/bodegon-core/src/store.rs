//! The `DebtorStore` trait.
//!
//! Implemented by storage backends (e.g. `bodegon-store-sqlite`). The CLI
//! depends on this abstraction, not on any concrete backend.
//!
//! Every operation is synchronous and blocking. A call owns whatever
//! connection it needs for the duration of one statement; no state is held
//! across calls.

use crate::{
  company::{Company, CompanyId, NewCompany},
  debtor::{Debtor, DebtorId, DebtorStatus, DebtorUpdate, NewDebtor},
};

/// Abstraction over a debtor ledger backend.
pub trait DebtorStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Debtors ───────────────────────────────────────────────────────────

  /// Insert one debtor and return it with its store-assigned id.
  ///
  /// Fails with a duplicate-national-id error if the cedula is already
  /// registered, and with a company-not-found error if `company_id` does
  /// not reference an existing company.
  fn add_debtor(&self, input: NewDebtor) -> Result<Debtor, Self::Error>;

  /// Retrieve a debtor by id. Returns `None` if not found.
  fn get_debtor(&self, id: DebtorId) -> Result<Option<Debtor>, Self::Error>;

  /// Retrieve a debtor by national id. Returns `None` if not found.
  fn get_debtor_by_national_id(
    &self,
    national_id: &str,
  ) -> Result<Option<Debtor>, Self::Error>;

  /// List debtors ordered by name ascending, optionally restricted to one
  /// status. `None` lists every debtor regardless of status.
  fn list_debtors(
    &self,
    status: Option<DebtorStatus>,
  ) -> Result<Vec<Debtor>, Self::Error>;

  /// Overwrite every mutable field of an existing debtor. The registration
  /// timestamp is not a mutable field.
  ///
  /// Fails if no debtor has this id, if the new national id collides with
  /// a different debtor, or if the new company reference is dangling. The
  /// row is left unmodified on failure.
  fn update_debtor(
    &self,
    id: DebtorId,
    update: DebtorUpdate,
  ) -> Result<(), Self::Error>;

  // ── Status transitions ────────────────────────────────────────────────

  /// Transition an active debtor to inactive.
  ///
  /// Fails if the debtor does not exist or is already inactive; the
  /// error names which.
  fn deactivate_debtor(&self, id: DebtorId) -> Result<(), Self::Error>;

  /// Transition an inactive debtor back to active. Exact mirror of
  /// [`DebtorStore::deactivate_debtor`].
  fn reactivate_debtor(&self, id: DebtorId) -> Result<(), Self::Error>;

  // ── Companies ─────────────────────────────────────────────────────────

  /// Insert one company and return it with its store-assigned id.
  fn add_company(&self, input: NewCompany) -> Result<Company, Self::Error>;

  /// Retrieve a company by id. Returns `None` if not found.
  fn get_company(&self, id: CompanyId)
  -> Result<Option<Company>, Self::Error>;
}
