//! Document totals aggregation
//!
//! Sums position net totals (applying quantity here, not in the per-unit
//! calculator), adds the document fee, applies the discount once at
//! document level, then VAT. Fixed discounts are not clamped to the
//! subtotal: an oversized fixed discount drives the totals negative, and
//! the document validator flags it without correcting the math.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stbvv_core::models::{Discount, Position, TotalsResult};
use tracing::debug;

use crate::calculator;
use crate::engine::RateConstants;

const HUNDRED: Decimal = dec!(100);

pub(crate) fn calculate_total(
    rates: &RateConstants,
    positions: &[Position],
    document_fee: Decimal,
    include_vat: bool,
    discount: Option<&Discount>,
) -> TotalsResult {
    let positions_total: Decimal = positions
        .iter()
        .map(|p| calculator::calculate_position(rates, p).total_net * Decimal::from(p.quantity))
        .sum();

    let subtotal_before_discount = positions_total + document_fee;
    let discount_amount = discount_amount(subtotal_before_discount, discount);
    let subtotal_net = subtotal_before_discount - discount_amount;

    let vat_amount = if include_vat {
        subtotal_net * rates.vat_rate
    } else {
        Decimal::ZERO
    };
    let total_gross = subtotal_net + vat_amount;

    debug!(
        %positions_total,
        %discount_amount,
        %total_gross,
        "document totals computed"
    );

    TotalsResult {
        positions_total,
        document_fee,
        discount_amount,
        subtotal_net,
        vat_amount,
        total_gross,
    }
}

fn discount_amount(subtotal_before_discount: Decimal, discount: Option<&Discount>) -> Decimal {
    match discount {
        None => Decimal::ZERO,
        Some(d) if d.value() <= Decimal::ZERO => Decimal::ZERO,
        Some(Discount::Percentage { value }) => subtotal_before_discount * *value / HUNDRED,
        Some(Discount::Fixed { value }) => *value,
    }
}
