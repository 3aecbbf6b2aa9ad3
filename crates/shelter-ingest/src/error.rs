#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv at line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("input has no header row")]
    EmptyInput,
}

impl IngestError {
    pub(crate) fn csv(error: &csv::Error) -> Self {
        let line = error.position().map(csv::Position::line).unwrap_or(0);
        Self::Csv {
            line,
            message: error.to_string(),
        }
    }
}
