//! Unified error handling for the StBVV fee engine
//!
//! Fee calculation and validation never raise errors: invalid per-position
//! input degrades to zero-valued results, and rule violations come back as
//! structured `ValidationIssue` data. The error type here covers the only
//! hard-failure paths the engine has: corrupted statutory table data and
//! broken configuration.

use thiserror::Error;

/// Main application error type
///
/// All fallible operations in the workspace return this type.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Statutory Data Errors ====================
    #[error("Malformed fee table {table}: {reason}")]
    MalformedFeeTable { table: String, reason: String },

    // ==================== Configuration Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ==================== Internal Errors ====================
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Returns the error code for collaborator-facing reporting
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MalformedFeeTable { .. } => "malformed_fee_table",
            AppError::Config(_) => "config_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Serialization(_) => "serialization_error",
        }
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
