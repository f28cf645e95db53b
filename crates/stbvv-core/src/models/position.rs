//! Position model
//!
//! Represents one billable line item of a fee document. The three billing
//! modes carry mutually exclusive inputs, so they are modeled as a tagged
//! union rather than a flat struct of optional fields: a position cannot
//! hold an hourly rate and a fee-table reference at the same time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Statutory fee table selector (StBVV tables A through D)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FeeTableKind {
    /// Table A, Beratungstabelle (advisory work)
    #[default]
    A,
    /// Table B, Abschlusstabelle (financial statements)
    B,
    /// Table C, Buchführungstabelle (bookkeeping)
    C,
    /// Table D, Landwirtschaftliche Tabelle (agriculture)
    D,
}

impl fmt::Display for FeeTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeTableKind::A => write!(f, "A"),
            FeeTableKind::B => write!(f, "B"),
            FeeTableKind::C => write!(f, "C"),
            FeeTableKind::D => write!(f, "D"),
        }
    }
}

impl FeeTableKind {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(FeeTableKind::A),
            "B" => Some(FeeTableKind::B),
            "C" => Some(FeeTableKind::C),
            "D" => Some(FeeTableKind::D),
            _ => None,
        }
    }

    /// All table kinds in statutory order
    pub fn all() -> [FeeTableKind; 4] {
        [
            FeeTableKind::A,
            FeeTableKind::B,
            FeeTableKind::C,
            FeeTableKind::D,
        ]
    }
}

/// Tenth-rate multiplier (Zehntelsatz)
///
/// Scales the table-looked-up base fee within the statutory discretion
/// range, e.g. 6/10 of the full fee. Denominators other than 10 or 20 are
/// representable but rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenthRate {
    pub numerator: Decimal,
    pub denominator: u32,
}

/// Statutorily permitted tenth-rate denominators
pub const TENTH_RATE_DENOMINATORS: [u32; 2] = [10, 20];

/// Minimum permitted tenth-rate numerator
pub const MIN_TENTH_RATE_NUMERATOR: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

impl TenthRate {
    pub fn new(numerator: Decimal, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Fraction applied to the base fee
    ///
    /// A zero denominator degrades to a zero factor; calculation never
    /// divides by it.
    #[inline]
    pub fn factor(&self) -> Decimal {
        if self.denominator == 0 {
            return Decimal::ZERO;
        }
        self.numerator / Decimal::from(self.denominator)
    }

    /// Whether the denominator is one of the statutory values
    pub fn has_valid_denominator(&self) -> bool {
        TENTH_RATE_DENOMINATORS.contains(&self.denominator)
    }
}

impl fmt::Display for TenthRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Billing mode of a position
///
/// Serialized with a `billingType` discriminant and camelCase fields so the
/// persisted JSON matches the document format the collaborators store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "billingType", rename_all = "camelCase")]
pub enum Billing {
    /// Fee-table lookup on a monetary object value (Gegenstandswert)
    #[serde(rename_all = "camelCase")]
    ObjectValue {
        object_value: Decimal,
        tenth_rate: TenthRate,
        fee_table: FeeTableKind,
    },
    /// Hourly billing (Zeitgebühr)
    #[serde(rename_all = "camelCase")]
    Hourly { hourly_rate: Decimal, hours: Decimal },
    /// Agreed flat rate (Pauschalvergütung)
    #[serde(rename_all = "camelCase")]
    FlatRate { flat_rate: Decimal },
}

impl Billing {
    /// The serialized discriminant, used in validation messages
    pub fn type_label(&self) -> &'static str {
        match self {
            Billing::ObjectValue { .. } => "objectValue",
            Billing::Hourly { .. } => "hourly",
            Billing::FlatRate { .. } => "flatRate",
        }
    }
}

/// Position entity
///
/// One billable line item. Positions are owned by the invoking document
/// context and are fully transient: the engine holds no state between
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Opaque unique identifier
    pub id: Uuid,

    /// Statutory service label, drives the minimum-object-value lookup
    pub activity: String,

    /// Billing mode and its inputs
    #[serde(flatten)]
    pub billing: Billing,

    /// Multiplier applied to the per-unit net fee by the totals aggregator
    pub quantity: u32,

    /// Whether the capped expense-fee surcharge (StBVV §16) applies
    pub apply_expense_fee: bool,
}

impl Position {
    /// Create a position with a fresh id, quantity 1, no expense fee
    pub fn new(activity: impl Into<String>, billing: Billing) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity: activity.into(),
            billing,
            quantity: 1,
            apply_expense_fee: false,
        }
    }
}
