use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelnotesError {
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Step '{step}' could not be started: {source}")]
    Spawn {
        step: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Step '{step}' failed ({status}). Output:\n{output}")]
    StepFailed {
        step: String,
        status: String,
        output: String,
    },

    #[error("Step '{step}' produced no '{marker}:' line. Output:\n{output}")]
    MarkerNotFound {
        step: String,
        marker: String,
        output: String,
    },

    #[error("Step '{step}' references unknown value '{{{name}}}'")]
    UnresolvedPlaceholder { step: String, name: String },
}

pub type Result<T> = std::result::Result<T, RelnotesError>;
