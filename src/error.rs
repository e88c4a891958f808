//! Error types for zoomle

use thiserror::Error;

/// Main error type for zoomle operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog is empty, no target can be selected")]
    EmptyCatalog,

    #[error("Round is already over")]
    RoundAlreadyOver,

    #[error("Already guessed: {0}")]
    DuplicateGuess(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Reset is only allowed in practice mode")]
    ResetNotAllowed,

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for zoomle operations
pub type Result<T> = std::result::Result<T, Error>;
