/// Error types for report conversion and generation
///
/// `ConvertError` covers contract violations of the report model that are
/// detected while parsing or converting. `ReportError` wraps everything that
/// can go wrong while loading report files and writing documents.
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unsupported execution status: {0}")]
    UnsupportedStatus(String),
    #[error("Malformed argument payload: {0}")]
    MalformedArgument(String),
    #[error("{context}: {names} parameter names but {values} values")]
    AlignmentMismatch { context: &'static str, names: usize, values: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse report {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }
}
