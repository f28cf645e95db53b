//! Per-position fee calculation
//!
//! Computes one line item's per-unit net fee. This function never errors:
//! non-positive or incomplete input degrades to the zero-valued result and
//! the validation pipeline is responsible for flagging it. Quantity is
//! deliberately not applied here; the totals aggregator multiplies it so
//! per-unit previews stay correct.

use rust_decimal::Decimal;
use stbvv_core::models::{Billing, CalculationResult, Position};
use stbvv_tables::FeeSchedule;
use tracing::debug;

use crate::engine::RateConstants;

pub(crate) fn calculate_position(
    rates: &RateConstants,
    position: &Position,
) -> CalculationResult {
    let (base_fee, adjusted_fee) = match &position.billing {
        Billing::Hourly { hourly_rate, hours } => {
            let fee = clamp_non_negative(*hourly_rate) * clamp_non_negative(*hours);
            (fee, fee)
        }
        Billing::FlatRate { flat_rate } => {
            let fee = clamp_non_negative(*flat_rate);
            (fee, fee)
        }
        Billing::ObjectValue {
            object_value,
            tenth_rate,
            fee_table,
        } => {
            // The defined zero state, not an error: validation flags it,
            // calculation shows the user exactly what they entered.
            if *object_value <= Decimal::ZERO {
                debug!(position_id = %position.id, "non-positive object value, zero result");
                return CalculationResult::ZERO;
            }
            let base = FeeSchedule::lookup(*fee_table, *object_value);
            (base, base * tenth_rate.factor())
        }
    };

    let expense_fee = if position.apply_expense_fee {
        expense_fee(rates, adjusted_fee)
    } else {
        Decimal::ZERO
    };

    CalculationResult {
        base_fee,
        adjusted_fee,
        expense_fee,
        total_net: adjusted_fee + expense_fee,
    }
}

/// Capped expense-fee surcharge (StBVV § 16)
///
/// Percentage of the adjusted fee; the cap always wins once the
/// percentage would exceed it.
fn expense_fee(rates: &RateConstants, adjusted_fee: Decimal) -> Decimal {
    (adjusted_fee * rates.expense_fee_rate).min(rates.expense_fee_cap)
}

/// Negative direct rates degrade to zero rather than producing negative
/// fees; validation reports them as structural errors.
fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
