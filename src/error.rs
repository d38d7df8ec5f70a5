//! Error type shared by every pipeline stage.
//!
//! Only the binary recovers from these; library code propagates with `?`.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used by the CLI to decide how much to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required file or directory is absent.
    MissingResource,
    /// Input exists but does not match the expected schema.
    MalformedInput,
    /// The generator's own assumptions (template structure, output layout) are broken.
    InternalAssertion,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{what} not found at {path}: {hint}")]
    MissingResource {
        what: &'static str,
        path: PathBuf,
        hint: &'static str,
    },
    #[error("cannot read spreadsheet {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("malformed spreadsheet {path} (sheet '{sheet}'): {reason}")]
    MalformedSheet {
        path: PathBuf,
        sheet: String,
        reason: String,
    },
    #[error("page template is missing the <!--@{anchor}--> anchor")]
    TemplateAnchor { anchor: String },
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingResource { .. } => ErrorKind::MissingResource,
            Error::Spreadsheet { .. } | Error::MalformedSheet { .. } => ErrorKind::MalformedInput,
            Error::TemplateAnchor { .. } | Error::Io { .. } => ErrorKind::InternalAssertion,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, sheet: &str, reason: impl Into<String>) -> Self {
        Error::MalformedSheet {
            path: path.into(),
            sheet: sheet.to_string(),
            reason: reason.into(),
        }
    }
}
