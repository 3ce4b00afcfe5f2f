use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error type that captures ledger load, persist, and export failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
    #[error("Duplicate expense id {0}")]
    DuplicateId(u64),
}

impl LedgerError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        LedgerError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
