use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UglifyError {
    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found at: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Could not parse '{file}': {message}")]
    ParseError { file: String, message: String },

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, UglifyError>;
