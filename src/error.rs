use std::{fmt, io, path::PathBuf};

use crate::log::log_category::CategoryParseError;

/// Failures while setting a logger up.
///
/// Logging itself never fails; only opening files and reading
/// configuration can.
#[derive(Debug)]
pub enum LogError {
    /// A log file, log directory or config file could not be opened.
    Io { path: PathBuf, source: io::Error },
    /// A config value could not be understood.
    BadValue {
        section: String,
        key: String,
        value: String,
    },
    InvalidCategory(CategoryParseError),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LogError::*;
        match self {
            Io { path, source } => write!(f, "cannot open {}: {source}", path.display()),
            BadValue {
                section,
                key,
                value,
            } => write!(f, "bad value for [{section}] {key}: {value:?}"),
            InvalidCategory(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io { source, .. } => Some(source),
            LogError::InvalidCategory(e) => Some(e),
            LogError::BadValue { .. } => None,
        }
    }
}

impl From<CategoryParseError> for LogError {
    fn from(e: CategoryParseError) -> Self {
        LogError::InvalidCategory(e)
    }
}
