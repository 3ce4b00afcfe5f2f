pub mod csv_backend;

use std::path::Path;

use crate::{errors::Result, ledger::Expense};

/// Abstraction over the file that backs an expense ledger.
pub trait StorageBackend {
    /// Where the ledger lives, used for user-facing messages.
    fn location(&self) -> &Path;

    /// Creates an empty ledger (header only) if none exists yet.
    /// Returns `true` when a new file was created.
    fn initialize(&self) -> Result<bool>;

    fn load(&self) -> Result<Vec<Expense>>;

    /// Rewrites the whole ledger with `expenses`, in order.
    fn save(&self, expenses: &[Expense]) -> Result<()>;

    /// Writes `expenses` to an arbitrary path, independent of the backing
    /// ledger. Forwards to the CSV writer when not overridden.
    fn export_to_path(&self, expenses: &[Expense], path: &Path) -> Result<()> {
        csv_backend::write_expenses(path, expenses)
    }
}

pub use csv_backend::CsvStorage;
