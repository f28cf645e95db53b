//! StBVV fee calculation and validation engine
//!
//! Business logic over the core models and statutory tables:
//!
//! - `FeeEngine` - the service struct collaborators hold
//! - per-position calculation (billing-type dispatch, tenth-rate scaling,
//!   capped expense fee)
//! - document totals (quantity, document fee, discount, VAT)
//! - the four-layer validation pipeline (structural, completeness,
//!   statutory minimum, document sanity)
//!
//! Every operation is a pure transform of its arguments: no I/O, no state
//! between calls, identical inputs always produce identical outputs. The
//! calculation paths never error; incomplete input degrades to zero-valued
//! results and all judgment about wrongness lives in the validation
//! pipeline, which returns issue lists rather than failing.

mod calculator;
mod engine;
mod totals;
mod validation;

pub use engine::{FeeEngine, RateConstants};
pub use stbvv_tables::minimum_object_value;

/// Statutory default constants
pub mod constants {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// VAT rate on the discounted net total (UStG § 12)
    pub const VAT_RATE: Decimal = dec!(0.19);

    /// Expense fee percentage of the adjusted fee (StBVV § 16)
    pub const EXPENSE_FEE_RATE: Decimal = dec!(0.20);

    /// Expense fee ceiling per position in EUR (StBVV § 16)
    pub const EXPENSE_FEE_CAP: Decimal = dec!(20.00);

    /// Gross totals below this floor trigger a plausibility warning
    pub const MIN_TOTAL_WARNING: Decimal = dec!(50.00);

    /// Maximum number of positions per document
    pub const MAX_POSITIONS: usize = 100;
}
