//! Error types for rental-checker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown vehicle category: {0}")]
    UnknownCategory(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown price range: {0}")]
    InvalidPriceBand(String),

    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Rating must be between 0 and 5, got {0}")]
    InvalidRating(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("End date must be after start date")]
    InvalidDateRange,

    #[error("Start date {0} is in the past")]
    StartInPast(chrono::NaiveDate),

    #[error("Vehicle is not available: {0}")]
    VehicleUnavailable(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Cannot change booking status from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, Error>;
