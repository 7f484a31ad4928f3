//! Unified application error type.
//! All modules (config, core, ui, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot open dataset {path}: {source}")]
    DatasetOpen {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Dataset errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: &'static str },

    #[error("Invalid timestamp '{value}' in {file} (row {row})")]
    InvalidTimestamp {
        file: String,
        row: usize,
        value: String,
    },

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    // ---------------------------
    // Statistics
    // ---------------------------
    #[error("No data available for the selected filters.")]
    EmptyTable,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(PathBuf),
}

pub type AppResult<T> = Result<T, AppError>;
