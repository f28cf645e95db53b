//! Derived calculation results
//!
//! Fully derived value objects, recomputed on every read, never stored,
//! never cached, so they cannot go stale against their inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-position calculation result
///
/// All amounts are per unit; `quantity` is applied by the totals
/// aggregator so per-unit previews can be shown without double-multiplying.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Table-looked-up full fee (or the direct rate for hourly/flat billing)
    pub base_fee: Decimal,

    /// Base fee scaled by the tenth rate
    pub adjusted_fee: Decimal,

    /// Capped expense-fee surcharge (StBVV §16), zero when not applied
    pub expense_fee: Decimal,

    /// Adjusted fee plus expense fee
    pub total_net: Decimal,
}

impl CalculationResult {
    /// The defined zero state for incomplete or non-positive input
    pub const ZERO: CalculationResult = CalculationResult {
        base_fee: Decimal::ZERO,
        adjusted_fee: Decimal::ZERO,
        expense_fee: Decimal::ZERO,
        total_net: Decimal::ZERO,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Per-document totals breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResult {
    /// Sum of position net totals, each multiplied by its quantity
    pub positions_total: Decimal,

    /// Flat per-document charge
    pub document_fee: Decimal,

    /// Discount applied to positions total plus document fee
    pub discount_amount: Decimal,

    /// Net total after discount (may be negative for oversized fixed discounts)
    pub subtotal_net: Decimal,

    /// VAT on the net total, zero when VAT is disabled
    pub vat_amount: Decimal,

    /// Final gross total
    pub total_gross: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_result() {
        assert!(CalculationResult::ZERO.is_zero());

        let nonzero = CalculationResult {
            base_fee: dec!(100),
            adjusted_fee: dec!(60),
            expense_fee: dec!(12),
            total_net: dec!(72),
        };
        assert!(!nonzero.is_zero());
    }

    #[test]
    fn test_totals_serde_field_names() {
        let totals = TotalsResult {
            positions_total: dec!(200),
            document_fee: dec!(12),
            discount_amount: dec!(0),
            subtotal_net: dec!(212),
            vat_amount: dec!(40.28),
            total_gross: dec!(252.28),
        };
        let json = serde_json::to_value(totals).unwrap();
        assert!(json.get("positionsTotal").is_some());
        assert!(json.get("totalGross").is_some());
    }
}
