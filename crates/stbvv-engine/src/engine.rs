//! Fee engine service
//!
//! The single entry point collaborators hold. Carries the rate constants
//! (statutory defaults or config overrides) and exposes the calculation
//! and validation operations as methods.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use stbvv_core::models::{
    CalculationResult, Discount, DocumentSettings, Position, TotalsResult, ValidationResult,
    ValidationSummary,
};
use stbvv_core::{AppConfig, AppError, AppResult};
use tracing::instrument;

use crate::{calculator, constants, totals, validation};

/// Rate constants the engine computes with
///
/// Decimal-converted once at engine construction so the hot paths never
/// touch floating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConstants {
    pub vat_rate: Decimal,
    pub expense_fee_rate: Decimal,
    pub expense_fee_cap: Decimal,
    pub min_total_warning: Decimal,
    pub max_positions: usize,
}

impl Default for RateConstants {
    fn default() -> Self {
        Self {
            vat_rate: constants::VAT_RATE,
            expense_fee_rate: constants::EXPENSE_FEE_RATE,
            expense_fee_cap: constants::EXPENSE_FEE_CAP,
            min_total_warning: constants::MIN_TOTAL_WARNING,
            max_positions: constants::MAX_POSITIONS,
        }
    }
}

/// Fee calculation and validation engine
///
/// Stateless between calls; cheap to clone and safe to share. Two calls
/// with equal inputs always produce equal outputs, so callers may memoize
/// freely.
#[derive(Debug, Clone, Default)]
pub struct FeeEngine {
    rates: RateConstants,
}

impl FeeEngine {
    /// Engine with the compiled-in statutory rates
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit rate constants
    pub fn with_rates(rates: RateConstants) -> Self {
        Self { rates }
    }

    /// Engine from loaded configuration
    ///
    /// Rejects rates that do not convert cleanly to decimal (NaN,
    /// infinity) or are negative.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let billing = &config.billing;
        let rates = RateConstants {
            vat_rate: to_rate(billing.vat_rate, "billing.vat_rate")?,
            expense_fee_rate: to_rate(billing.expense_fee_rate, "billing.expense_fee_rate")?,
            expense_fee_cap: to_rate(billing.expense_fee_cap, "billing.expense_fee_cap")?,
            min_total_warning: to_rate(billing.min_total_warning, "billing.min_total_warning")?,
            max_positions: billing.max_positions,
        };
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &RateConstants {
        &self.rates
    }

    /// Per-position net fee breakdown (quantity not applied)
    #[instrument(skip(self, position), fields(position_id = %position.id))]
    pub fn calculate_position(&self, position: &Position) -> CalculationResult {
        calculator::calculate_position(&self.rates, position)
    }

    /// Document totals breakdown
    #[instrument(skip_all, fields(positions = positions.len()))]
    pub fn calculate_total(
        &self,
        positions: &[Position],
        document_fee: Decimal,
        include_vat: bool,
        discount: Option<&Discount>,
    ) -> TotalsResult {
        totals::calculate_total(&self.rates, positions, document_fee, include_vat, discount)
    }

    /// Document totals from bundled settings
    pub fn calculate_document(
        &self,
        positions: &[Position],
        settings: &DocumentSettings,
    ) -> TotalsResult {
        self.calculate_total(
            positions,
            settings.document_fee,
            settings.include_vat,
            settings.discount.as_ref(),
        )
    }

    /// Per-position validation: structural, completeness, statutory minimum
    #[instrument(skip(self, position), fields(position_id = %position.id))]
    pub fn validate_position(&self, position: &Position) -> ValidationResult {
        validation::validate_position(position)
    }

    /// Aggregate validation summary over a position list
    pub fn validate_positions(&self, positions: &[Position]) -> ValidationSummary {
        validation::validate_positions(positions)
    }

    /// Document-level validation: settings checks and aggregate sanity
    #[instrument(skip_all, fields(positions = positions.len()))]
    pub fn validate_document(
        &self,
        positions: &[Position],
        document_fee: Decimal,
        include_vat: bool,
        discount: Option<&Discount>,
    ) -> ValidationResult {
        validation::validate_document(&self.rates, positions, document_fee, include_vat, discount)
    }
}

fn to_rate(value: f64, field: &str) -> AppResult<Decimal> {
    let rate = Decimal::from_f64(value)
        .ok_or_else(|| AppError::Config(format!("{} is not a finite number: {}", field, value)))?;
    if rate < Decimal::ZERO {
        return Err(AppError::Config(format!(
            "{} must not be negative: {}",
            field, value
        )));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_rates_match_statutory_constants() {
        let engine = FeeEngine::new();
        assert_eq!(engine.rates().vat_rate, dec!(0.19));
        assert_eq!(engine.rates().expense_fee_cap, dec!(20.00));
        assert_eq!(engine.rates().max_positions, 100);
    }

    #[test]
    fn test_from_config_converts_rates() {
        let config = AppConfig::default();
        let engine = FeeEngine::from_config(&config).unwrap();
        assert_eq!(engine.rates().expense_fee_rate, dec!(0.20));
        assert_eq!(engine.rates().min_total_warning, dec!(50.00));
    }

    #[test]
    fn test_from_config_rejects_nan_rate() {
        let mut config = AppConfig::default();
        config.billing.vat_rate = f64::NAN;
        let err = FeeEngine::from_config(&config).unwrap_err();
        assert_eq!(err.error_code(), "config_error");
    }

    #[test]
    fn test_from_config_rejects_negative_rate() {
        let mut config = AppConfig::default();
        config.billing.expense_fee_cap = -1.0;
        assert!(FeeEngine::from_config(&config).is_err());
    }
}
