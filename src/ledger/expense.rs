use csv::StringRecord;

use crate::errors::{LedgerError, Result};

/// Column order of every ledger and export file.
pub const CSV_HEADERS: [&str; 6] = ["id", "date", "name", "amount", "category", "notes"];

/// Category applied when the caller leaves it blank.
pub const DEFAULT_CATEGORY: &str = "General";

/// Rows may omit the trailing `notes` column.
const MIN_FIELDS: usize = 5;

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u64,
    /// Calendar date as entered, normally `YYYY-MM-DD`.
    pub date: String,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub notes: String,
}

impl Expense {
    pub fn new(
        id: u64,
        date: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            name: name.into(),
            amount,
            category: category.into(),
            notes: notes.into(),
        }
    }

    /// The `YYYY-MM` bucket this expense is summarized under.
    pub fn month(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }

    pub fn amount_text(&self) -> String {
        format!("{:.2}", self.amount)
    }

    pub fn to_row(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.date.clone(),
            self.name.clone(),
            self.amount_text(),
            self.category.clone(),
            self.notes.clone(),
        ]
    }

    /// Parses one data row. `line` is only used to label errors.
    pub fn from_row(record: &StringRecord, line: u64) -> Result<Self> {
        if record.len() < MIN_FIELDS {
            return Err(LedgerError::malformed(
                line,
                format!("expected at least {MIN_FIELDS} fields, found {}", record.len()),
            ));
        }

        let raw_id = record[0].trim();
        let id = raw_id
            .parse::<u64>()
            .map_err(|_| LedgerError::malformed(line, format!("invalid id `{raw_id}`")))?;

        let raw_amount = record[3].trim();
        let amount = raw_amount
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| LedgerError::malformed(line, format!("invalid amount `{raw_amount}`")))?;

        Ok(Self {
            id,
            date: record[1].to_string(),
            name: record[2].to_string(),
            amount,
            category: record[4].to_string(),
            notes: record.get(5).unwrap_or_default().to_string(),
        })
    }
}
