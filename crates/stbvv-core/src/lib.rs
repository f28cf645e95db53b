//! StBVV Core Library
//!
//! This crate provides the foundational types, error handling, and
//! configuration for the StBVV fee calculation system. It includes:
//!
//! - Domain models (Position, Discount, CalculationResult, etc.)
//! - Unified error handling for configuration and data integrity failures
//! - Application configuration with statutory default rates

pub mod config;
pub mod error;
pub mod models;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
