//! Domain models for the StBVV fee engine
//!
//! This module contains all the core domain models used throughout the
//! workspace.

pub mod calculation;
pub mod position;
pub mod settings;
pub mod validation;

pub use calculation::{CalculationResult, TotalsResult};
pub use position::{Billing, FeeTableKind, Position, TenthRate};
pub use settings::{Discount, DocumentKind, DocumentSettings};
pub use validation::{Severity, ValidationIssue, ValidationResult, ValidationSummary};
