//! Error types for catalog loading, routing and settings.

use shared::GroupId;
use thiserror::Error;

/// Errors raised while building or querying a region catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("region '{0}' is not in the catalog")]
    MissingRegion(String),

    #[error("group {0} is not in the catalog")]
    MissingGroup(GroupId),

    #[error("region '{0}' is defined more than once")]
    DuplicateRegion(String),

    #[error("group {0} is defined more than once")]
    DuplicateGroup(GroupId),

    #[error("region '{id}' has an invalid {axis} interval")]
    InvalidBounds { id: String, axis: char },

    #[error("catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while loading or validating viewer settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
