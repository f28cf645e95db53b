//! Multi-layer validation pipeline
//!
//! Four layers, none short-circuiting the others, so the caller always
//! sees the complete issue set:
//!
//! 1. structural - fields well-formed, numerics non-negative, statutory
//!    tenth-rate denominator, positive integer quantity (errors)
//! 2. billing-type completeness - the active billing mode's values must be
//!    positive (errors)
//! 3. statutory minimum - object value below the activity's legal minimum
//!    (warning with a suggestion, never blocks)
//! 4. document sanity - settings checks and aggregate plausibility
//!    (errors for malformed settings, warnings for plausibility)
//!
//! The error set blocks document export; the warning set is surfaced but
//! never blocks.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stbvv_core::models::position::MIN_TENTH_RATE_NUMERATOR;
use stbvv_core::models::{
    Billing, Discount, Position, ValidationIssue, ValidationResult, ValidationSummary,
};
use stbvv_tables::minimum_object_value;
use tracing::debug;

use crate::engine::RateConstants;
use crate::totals;

pub(crate) fn validate_position(position: &Position) -> ValidationResult {
    let mut issues = structural_issues(position);
    issues.extend(completeness_issues(position));
    issues.extend(statutory_issues(position));
    ValidationResult::from_issues(issues)
}

pub(crate) fn validate_positions(positions: &[Position]) -> ValidationSummary {
    let mut total_errors = 0;
    let mut total_warnings = 0;
    let mut incomplete_count = 0;

    for position in positions {
        let result = validate_position(position);
        total_errors += result.error_count();
        total_warnings += result.warning_count();
        if !completeness_issues(position).is_empty() {
            incomplete_count += 1;
        }
    }

    debug!(
        positions = positions.len(),
        total_errors, total_warnings, incomplete_count, "validated position list"
    );

    ValidationSummary {
        is_valid: total_errors == 0,
        total_errors,
        total_warnings,
        incomplete_count,
    }
}

pub(crate) fn validate_document(
    rates: &RateConstants,
    positions: &[Position],
    document_fee: Decimal,
    include_vat: bool,
    discount: Option<&Discount>,
) -> ValidationResult {
    let mut issues = Vec::new();

    if document_fee < Decimal::ZERO {
        issues.push(ValidationIssue::error(
            "documentFee",
            "Document fee must not be negative",
        ));
    }

    match discount {
        Some(Discount::Percentage { value }) => {
            if *value < Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "discount.value",
                    "Discount value must not be negative",
                ));
            } else if *value > dec!(100) {
                issues.push(ValidationIssue::error(
                    "discount.value",
                    "Percentage discount cannot exceed 100",
                ));
            }
        }
        Some(Discount::Fixed { value }) => {
            if *value < Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "discount.value",
                    "Discount value must not be negative",
                ));
            }
        }
        None => {}
    }

    if positions.len() > rates.max_positions {
        issues.push(ValidationIssue::error(
            "positions",
            format!(
                "Document has {} positions, the maximum is {}",
                positions.len(),
                rates.max_positions
            ),
        ));
    }

    let breakdown = totals::calculate_total(rates, positions, document_fee, include_vat, discount);

    if let Some(Discount::Fixed { value }) = discount {
        let subtotal_before_discount = breakdown.positions_total + breakdown.document_fee;
        if *value > subtotal_before_discount {
            issues.push(
                ValidationIssue::warning(
                    "discount.value",
                    format!(
                        "Fixed discount of {} exceeds the subtotal of {}; totals will be negative",
                        value, subtotal_before_discount
                    ),
                )
                .with_suggestion(format!(
                    "Reduce the discount to at most {}",
                    subtotal_before_discount
                )),
            );
        }
    }

    if breakdown.total_gross < rates.min_total_warning {
        issues.push(ValidationIssue::warning(
            "totalGross",
            format!(
                "Gross total of {} is below the plausibility floor of {}",
                breakdown.total_gross, rates.min_total_warning
            ),
        ));
    }

    if !include_vat {
        issues.push(ValidationIssue::warning(
            "includeVat",
            "VAT is disabled; professional fee documents normally include VAT",
        ));
    }

    ValidationResult::from_issues(issues)
}

/// Layer 1: structural checks (error severity)
fn structural_issues(position: &Position) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if position.activity.trim().is_empty() {
        issues.push(ValidationIssue::error("activity", "Activity is required"));
    }

    if position.quantity == 0 {
        issues.push(ValidationIssue::error(
            "quantity",
            "Quantity must be a positive integer",
        ));
    }

    match &position.billing {
        Billing::ObjectValue {
            object_value,
            tenth_rate,
            ..
        } => {
            if *object_value < Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "objectValue",
                    "Object value must not be negative",
                ));
            }
            if !tenth_rate.has_valid_denominator() {
                issues.push(ValidationIssue::error(
                    "tenthRate.denominator",
                    "Tenth rate denominator must be 10 or 20",
                ));
            }
            if tenth_rate.numerator < MIN_TENTH_RATE_NUMERATOR {
                issues.push(ValidationIssue::error(
                    "tenthRate.numerator",
                    "Tenth rate numerator must be at least 0.1",
                ));
            }
        }
        Billing::Hourly { hourly_rate, hours } => {
            if *hourly_rate < Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "hourlyRate",
                    "Hourly rate must not be negative",
                ));
            }
            if *hours < Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "hours",
                    "Hours must not be negative",
                ));
            }
        }
        Billing::FlatRate { flat_rate } => {
            if *flat_rate < Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "flatRate",
                    "Flat rate must not be negative",
                ));
            }
        }
    }

    issues
}

/// Layer 2: billing-type completeness (error severity)
fn completeness_issues(position: &Position) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match &position.billing {
        Billing::ObjectValue { object_value, .. } => {
            if *object_value <= Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "objectValue",
                    "Object value must be greater than zero for object value billing",
                ));
            }
        }
        Billing::Hourly { hourly_rate, hours } => {
            if *hourly_rate <= Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "hourlyRate",
                    "Hourly rate must be greater than zero for hourly billing",
                ));
            }
            if *hours <= Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "hours",
                    "Hours must be greater than zero for hourly billing",
                ));
            }
        }
        Billing::FlatRate { flat_rate } => {
            if *flat_rate <= Decimal::ZERO {
                issues.push(ValidationIssue::error(
                    "flatRate",
                    "Flat rate must be greater than zero for flat rate billing",
                ));
            }
        }
    }

    issues
}

/// Layer 3: statutory minimum object value (warning severity, never blocks)
fn statutory_issues(position: &Position) -> Vec<ValidationIssue> {
    let Billing::ObjectValue { object_value, .. } = &position.billing else {
        return Vec::new();
    };

    if *object_value <= Decimal::ZERO {
        // Completeness already reports the missing value.
        return Vec::new();
    }

    let minimum = minimum_object_value(&position.activity);
    if minimum > Decimal::ZERO && *object_value < minimum {
        return vec![ValidationIssue::warning(
            "objectValue",
            format!(
                "Object value of {} is below the statutory minimum for {}",
                object_value, position.activity
            ),
        )
        .with_suggestion(format!(
            "The statutory minimum object value is {} EUR",
            minimum
        ))];
    }

    Vec::new()
}
