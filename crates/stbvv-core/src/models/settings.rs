//! Document-level settings
//!
//! Discounts, document kind, and the bundled settings struct the document
//! context passes to the engine alongside its positions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document-level discount, applied once before VAT
///
/// Percentage values are validated to be at most 100. Fixed discounts are
/// not clamped to the subtotal; totals may go negative (flagged by the
/// document validator, never corrected).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Discount {
    /// Percentage of the subtotal before discount
    Percentage { value: Decimal },
    /// Fixed currency amount
    Fixed { value: Decimal },
}

impl Discount {
    pub fn value(&self) -> Decimal {
        match self {
            Discount::Percentage { value } | Discount::Fixed { value } => *value,
        }
    }
}

/// Kind of document being produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Invoice (Rechnung)
    #[default]
    Invoice,
    /// Quote (Angebot)
    Quote,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Invoice => write!(f, "invoice"),
            DocumentKind::Quote => write!(f, "quote"),
        }
    }
}

impl DocumentKind {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "invoice" => Some(DocumentKind::Invoice),
            "quote" => Some(DocumentKind::Quote),
            _ => None,
        }
    }
}

/// Bundled document-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSettings {
    /// Document kind, consumed by export collaborators
    #[serde(default)]
    pub document_kind: DocumentKind,

    /// Flat per-document charge added before discount and VAT
    pub document_fee: Decimal,

    /// Whether VAT is added to the discounted net total
    pub include_vat: bool,

    /// Optional document-level discount
    pub discount: Option<Discount>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            document_kind: DocumentKind::Invoice,
            document_fee: Decimal::ZERO,
            include_vat: true,
            discount: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discount_json_shape() {
        let discount = Discount::Percentage { value: dec!(10) };
        let json = serde_json::to_value(discount).unwrap();
        assert_eq!(json["type"], "percentage");
        assert_eq!(json["value"], serde_json::json!("10"));

        let back: Discount = serde_json::from_value(json).unwrap();
        assert_eq!(back, discount);
    }

    #[test]
    fn test_default_settings() {
        let settings = DocumentSettings::default();
        assert!(settings.include_vat);
        assert_eq!(settings.document_fee, Decimal::ZERO);
        assert!(settings.discount.is_none());
    }
}
