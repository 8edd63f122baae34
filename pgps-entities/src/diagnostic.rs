use crate::pharmacy::Column;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// Why a query could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarningCause {
    /// The geocoding service did not find a match.
    #[error("no match found")]
    NoMatch,
    /// The geocoding service could not be asked or failed to answer.
    #[error("{0}")]
    Failed(String),
}

/// A non-fatal problem with a single record.
///
/// `row` is the zero-based index of the record within the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    FieldError {
        row: usize,
        name: Option<String>,
        field: Column,
    },
    GeocodeWarning {
        row: usize,
        query: String,
        cause: WarningCause,
    },
}

impl Diagnostic {
    pub const fn row(&self) -> usize {
        match self {
            Self::FieldError { row, .. } | Self::GeocodeWarning { row, .. } => *row,
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            Self::FieldError { .. } => Severity::Error,
            Self::GeocodeWarning { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldError { row, name, field } => write!(
                f,
                "Missing value of column '{field}' in record {} ({})",
                row + 1,
                name.as_deref().unwrap_or("unnamed")
            ),
            Self::GeocodeWarning { query, cause, .. } => {
                write!(f, "Error geocoding '{query}': {cause}")
            }
        }
    }
}
