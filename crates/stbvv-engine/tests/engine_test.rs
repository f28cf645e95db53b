//! End-to-end tests for the fee engine
//!
//! Exercises the calculation and validation surface the way the document
//! collaborators consume it, including the exact semantics of oversized
//! fixed discounts (negative totals are preserved, not clamped).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stbvv_core::models::{Billing, Discount, DocumentSettings, FeeTableKind, Position, TenthRate};
use stbvv_engine::FeeEngine;

fn hourly_position(rate: Decimal, hours: Decimal) -> Position {
    Position::new(
        "Beratung",
        Billing::Hourly {
            hourly_rate: rate,
            hours,
        },
    )
}

fn object_value_position(value: Decimal) -> Position {
    Position::new(
        "Einkommensteuererklärung",
        Billing::ObjectValue {
            object_value: value,
            tenth_rate: TenthRate::new(dec!(6), 10),
            fee_table: FeeTableKind::A,
        },
    )
}

#[test]
fn hourly_position_two_hours_at_hundred() {
    let engine = FeeEngine::new();
    let position = hourly_position(dec!(100), dec!(2));

    let result = engine.calculate_position(&position);
    assert_eq!(result.total_net, dec!(200.00));
    assert_eq!(result.expense_fee, dec!(0));
}

#[test]
fn object_value_position_with_capped_expense_fee() {
    let engine = FeeEngine::new();
    // Table A at 10000: full fee 618, 6/10 => 370.80, 20% surcharge would
    // be 74.16 and is capped at 20.00.
    let mut position = object_value_position(dec!(10000));
    position.apply_expense_fee = true;

    let result = engine.calculate_position(&position);
    assert_eq!(result.base_fee, dec!(618));
    assert_eq!(result.adjusted_fee, dec!(370.8));
    assert_eq!(result.expense_fee, dec!(20.00));
    assert_eq!(result.total_net, dec!(390.80));
}

#[test]
fn empty_document_with_document_fee_and_vat() {
    let engine = FeeEngine::new();
    let totals = engine.calculate_total(&[], dec!(12), true, None);

    assert_eq!(totals.positions_total, dec!(0));
    assert_eq!(totals.subtotal_net, dec!(12));
    assert_eq!(totals.vat_amount, dec!(2.28));
    assert_eq!(totals.total_gross, dec!(14.28));
}

#[test]
fn below_statutory_minimum_warns_but_does_not_block() {
    let engine = FeeEngine::new();
    // Income tax return carries a statutory minimum object value of 8000.
    let position = object_value_position(dec!(100));

    let result = engine.validate_position(&position);
    assert!(result.is_valid);
    assert_eq!(result.warning_count(), 1);
    let warning = result.warnings().next().unwrap();
    assert!(warning.suggestion.as_deref().unwrap().contains("8000"));

    // The position is still calculated as entered, not corrected.
    let calc = engine.calculate_position(&position);
    assert!(calc.total_net > Decimal::ZERO);
}

#[test]
fn fixed_discount_may_exceed_subtotal() {
    // Locks in the current semantics: no clamping, totals go negative.
    let engine = FeeEngine::new();
    let positions = vec![hourly_position(dec!(100), dec!(1))];
    let discount = Discount::Fixed { value: dec!(10000) };

    let totals = engine.calculate_total(&positions, dec!(0), false, Some(&discount));
    assert_eq!(totals.subtotal_net, dec!(-9900));
    assert_eq!(totals.total_gross, dec!(-9900));

    // Flagged as a warning, never an error.
    let result = engine.validate_document(&positions, dec!(0), false, Some(&discount));
    assert!(result.is_valid);
    assert!(result
        .warnings()
        .any(|i| i.message.contains("exceeds the subtotal")));
}

#[test]
fn calculation_is_idempotent() {
    let engine = FeeEngine::new();
    let mut position = object_value_position(dec!(48000));
    position.apply_expense_fee = true;
    let positions = vec![position, hourly_position(dec!(120), dec!(1.5))];
    let discount = Discount::Percentage { value: dec!(5) };

    let first = engine.calculate_total(&positions, dec!(15), true, Some(&discount));
    let second = engine.calculate_total(&positions, dec!(15), true, Some(&discount));
    assert_eq!(first, second);
}

#[test]
fn adjusted_fee_is_monotone_in_object_value() {
    let engine = FeeEngine::new();
    let values = [
        dec!(100),
        dec!(1000),
        dec!(5000),
        dec!(10000),
        dec!(50000),
        dec!(200000),
        dec!(900000),
    ];

    let mut previous = Decimal::ZERO;
    for value in values {
        let result = engine.calculate_position(&object_value_position(value));
        assert!(
            result.adjusted_fee >= previous,
            "adjusted fee decreased at object value {}",
            value
        );
        previous = result.adjusted_fee;
    }
}

#[test]
fn zero_object_value_yields_zero_result_and_completeness_error() {
    let engine = FeeEngine::new();
    let position = object_value_position(dec!(0));

    assert!(engine.calculate_position(&position).is_zero());

    let result = engine.validate_position(&position);
    assert!(!result.is_valid);
    assert!(result.errors().any(|i| i.field == "objectValue"));
}

#[test]
fn export_gate_summary_over_mixed_positions() {
    let engine = FeeEngine::new();
    let positions = vec![
        object_value_position(dec!(10000)),
        object_value_position(dec!(0)),
        hourly_position(dec!(0), dec!(2)),
        object_value_position(dec!(500)),
    ];

    let summary = engine.validate_positions(&positions);
    assert!(!summary.is_valid);
    assert_eq!(summary.total_errors, 2);
    assert_eq!(summary.total_warnings, 1);
    assert_eq!(summary.incomplete_count, 2);
}

#[test]
fn document_settings_round_trip_through_engine() {
    let engine = FeeEngine::new();
    let positions = vec![hourly_position(dec!(100), dec!(2))];

    let json = serde_json::json!({
        "documentKind": "invoice",
        "documentFee": "12",
        "includeVat": true,
        "discount": { "type": "percentage", "value": "10" }
    });
    let settings: DocumentSettings = serde_json::from_value(json).unwrap();

    let totals = engine.calculate_document(&positions, &settings);
    // (200 + 12) - 10% = 190.80 net, plus 19% VAT
    assert_eq!(totals.discount_amount, dec!(21.2));
    assert_eq!(totals.subtotal_net, dec!(190.8));
    assert_eq!(totals.total_gross, dec!(227.052));
}

#[test]
fn vat_disabled_is_surfaced_as_warning_only() {
    let engine = FeeEngine::new();
    let positions = vec![hourly_position(dec!(100), dec!(2))];

    let result = engine.validate_document(&positions, dec!(0), false, None);
    assert!(result.is_valid);
    assert!(result.warnings().any(|i| i.field == "includeVat"));

    let totals = engine.calculate_total(&positions, dec!(0), false, None);
    assert_eq!(totals.vat_amount, dec!(0));
    assert_eq!(totals.total_gross, totals.subtotal_net);
}
