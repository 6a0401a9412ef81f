// src/error.rs

use arrow::error::ArrowError;
use std::{fmt, io, path::PathBuf};

/// Broad class of a [`LoadError`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Configuration,
    Validation,
}

#[derive(Debug)]
pub enum LoadError {
    /// The input file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// The input is not parseable as delimited tabular data.
    Format { path: PathBuf, message: String },
    /// A column that unit conversion has to scale holds text.
    NonNumericColumn { column: String },
    /// Several original columns matched one canonical field under the `reject` policy.
    DuplicateCanonical {
        canonical: String,
        originals: Vec<String>,
    },
    /// The given or detected application is not one of the valid labels.
    InvalidApplication {
        application: String,
        columns: Vec<String>,
    },
    /// Required columns for the resolved application are absent.
    MissingColumns {
        application: String,
        missing: Vec<String>,
    },
    /// Building the typed table failed.
    Arrow(ArrowError),
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Format { .. } | Self::NonNumericColumn { .. } | Self::Arrow(_) => {
                ErrorKind::Format
            }
            Self::DuplicateCanonical { .. } | Self::InvalidApplication { .. } => {
                ErrorKind::Configuration
            }
            Self::MissingColumns { .. } => ErrorKind::Validation,
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Format { path, message } => {
                write!(f, "malformed tabular data in {}: {message}", path.display())
            }
            Self::NonNumericColumn { column } => {
                write!(f, "column '{column}' is not numeric and cannot be unit-converted")
            }
            Self::DuplicateCanonical {
                canonical,
                originals,
            } => write!(
                f,
                "columns [{}] all map to '{canonical}'",
                originals.join(", ")
            ),
            Self::InvalidApplication {
                application,
                columns,
            } => write!(
                f,
                "could not detect a valid application type (got '{application}'). Columns: [{}]",
                columns.join(", ")
            ),
            Self::MissingColumns {
                application,
                missing,
            } => write!(
                f,
                "missing required columns for {application} analysis: {}",
                missing.join(", ")
            ),
            Self::Arrow(err) => write!(f, "table construction failed: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Arrow(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArrowError> for LoadError {
    fn from(err: ArrowError) -> Self {
        Self::Arrow(err)
    }
}
