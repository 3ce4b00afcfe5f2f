use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::{
    core::utils::ensure_dir,
    errors::{LedgerError, Result},
    ledger::{Expense, CSV_HEADERS},
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// Comma-separated ledger file with a single header row.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for CsvStorage {
    fn location(&self) -> &Path {
        &self.path
    }

    fn initialize(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        write_expenses(&self.path, &[])?;
        tracing::info!(path = %self.path.display(), "created empty expense ledger");
        Ok(true)
    }

    fn load(&self) -> Result<Vec<Expense>> {
        let expenses = read_expenses(&self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            count = expenses.len(),
            "loaded expense ledger"
        );
        Ok(expenses)
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let tmp = tmp_path(&self.path);
        if let Err(err) = write_expenses(&tmp, expenses) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        tracing::debug!(
            path = %self.path.display(),
            count = expenses.len(),
            "saved expense ledger"
        );
        Ok(())
    }
}

/// Reads every data row after the header. Blank rows are skipped; the first
/// malformed row or repeated id aborts the read.
pub fn read_expenses(path: &Path) -> Result<Vec<Expense>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut expenses = Vec::new();
    let mut seen = HashSet::new();
    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let expense = Expense::from_row(&record, line)?;
        if !seen.insert(expense.id) {
            return Err(LedgerError::malformed(
                line,
                format!("duplicate id {}", expense.id),
            ));
        }
        expenses.push(expense);
    }
    Ok(expenses)
}

/// Writes the header followed by `expenses`, truncating any existing file.
pub fn write_expenses(path: &Path, expenses: &[Expense]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    for expense in expenses {
        writer.write_record(expense.to_row())?;
    }
    writer.flush()?;
    Ok(())
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
