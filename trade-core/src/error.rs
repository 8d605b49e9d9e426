use std::fmt;

/// Fatal failure while loading the trade dataset.
///
/// Any of these aborts startup; no selection may be served without a dataset.
#[derive(Debug)]
pub enum LoadError {
    /// The source file could not be opened or read.
    Io(std::io::Error),
    /// The CSV reader failed before any row could be interpreted.
    Csv(csv::Error),
    /// The header row lacks a required column.
    MissingColumn(String),
    /// A data row could not be parsed into a record.
    Malformed { line: u64, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Load error: cannot read trade data: {}", e),
            LoadError::Csv(e) => write!(f, "Load error: invalid CSV: {}", e),
            LoadError::MissingColumn(column) => {
                write!(f, "Load error: missing required column '{}'", column)
            }
            LoadError::Malformed { line, message } => {
                write!(f, "Load error: malformed row at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}
