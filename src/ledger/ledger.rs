use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{
    errors::{LedgerError, Result},
    storage::{CsvStorage, StorageBackend},
};

use super::expense::Expense;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered, persistent collection of expenses.
///
/// Records keep insertion order; `index` maps each id to its position so
/// uniqueness checks stay O(1). Every mutation rewrites the backing file
/// before returning.
pub struct ExpenseLedger {
    storage: Box<dyn StorageBackend>,
    expenses: Vec<Expense>,
    index: HashMap<u64, usize>,
}

impl ExpenseLedger {
    /// Opens the CSV ledger at `path`, creating a header-only file if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_backend(Box::new(CsvStorage::new(path)))
    }

    pub fn with_backend(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let created = storage.initialize()?;
        let mut ledger = Self {
            storage,
            expenses: Vec::new(),
            index: HashMap::new(),
        };
        if !created {
            for expense in ledger.storage.load()? {
                ledger.insert(expense)?;
            }
        }
        tracing::info!(
            path = %ledger.path().display(),
            count = ledger.len(),
            "opened expense ledger"
        );
        Ok(ledger)
    }

    /// Records a new expense and persists the ledger.
    ///
    /// A missing or blank `date` becomes today's local date. If persisting
    /// fails the expense is dropped again and the error returned.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: Option<&str>,
        notes: impl Into<String>,
    ) -> Result<Expense> {
        let date = match date.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => Local::now().format(DATE_FORMAT).to_string(),
        };
        let expense = Expense::new(self.next_id(), date, name, amount, category, notes);
        self.insert(expense.clone())?;

        if let Err(err) = self.storage.save(&self.expenses) {
            self.expenses.pop();
            self.index.remove(&expense.id);
            tracing::warn!(id = expense.id, error = %err, "failed to persist expense");
            return Err(err);
        }
        tracing::info!(id = expense.id, amount = expense.amount, "recorded expense");
        Ok(expense)
    }

    /// All expenses in insertion order, or only the last `limit` when it is
    /// positive and smaller than the ledger.
    pub fn list(&self, limit: Option<usize>) -> &[Expense] {
        match limit {
            Some(limit) if limit > 0 && limit < self.expenses.len() => {
                &self.expenses[self.expenses.len() - limit..]
            }
            _ => &self.expenses,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Expense> {
        self.index.get(&id).map(|&pos| &self.expenses[pos])
    }

    /// Sum of every amount; `0.0` (never `-0.0`) for an empty ledger.
    pub fn total_spent(&self) -> f64 {
        self.expenses
            .iter()
            .fold(0.0, |total, expense| total + expense.amount)
    }

    pub fn summary_by_category(&self) -> HashMap<String, f64> {
        let mut totals = HashMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Totals keyed by `YYYY-MM`, in ascending month order.
    pub fn summary_by_month(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.month().to_string()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Writes the header and every expense to `target`, overwriting it.
    /// The backing ledger and in-memory state are left untouched.
    pub fn export(&self, target: impl AsRef<Path>) -> Result<PathBuf> {
        let target = target.as_ref();
        self.storage.export_to_path(&self.expenses, target)?;
        tracing::info!(
            path = %target.display(),
            count = self.expenses.len(),
            "exported expenses"
        );
        Ok(target.to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Location of the backing ledger file.
    pub fn path(&self) -> &Path {
        self.storage.location()
    }

    fn insert(&mut self, expense: Expense) -> Result<()> {
        if self.index.contains_key(&expense.id) {
            return Err(LedgerError::DuplicateId(expense.id));
        }
        self.index.insert(expense.id, self.expenses.len());
        self.expenses.push(expense);
        Ok(())
    }

    /// One past the last inserted id. Hand-edited files can leave that id
    /// taken; then one past the highest id is used.
    fn next_id(&self) -> u64 {
        let Some(last) = self.expenses.last() else {
            return 1;
        };
        let candidate = last.id.saturating_add(1);
        if !self.index.contains_key(&candidate) {
            return candidate;
        }
        self.index
            .keys()
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }
}
