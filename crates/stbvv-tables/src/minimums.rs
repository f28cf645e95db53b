//! Minimum object value registry
//!
//! Maps each statutory activity to its legally mandated minimum object
//! value (§ 24 ff. StBVV). The registry is consumed only by validation:
//! a position below its statutory minimum is still calculated as entered,
//! so the user sees the actual result, and flagged with a warning. The
//! engine never silently corrects user input.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Minimum object values in whole euros, keyed by normalized activity label
static MINIMUM_OBJECT_VALUES: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
    HashMap::from([
        ("einkommensteuererklärung", 8_000),
        ("körperschaftsteuererklärung", 16_000),
        ("gewerbesteuererklärung", 8_000),
        ("umsatzsteuererklärung", 8_000),
        ("umsatzsteuer-voranmeldung", 650),
        ("lohnsteuer-anmeldung", 1_000),
        ("einnahmenüberschussrechnung", 17_500),
        ("erbschaftsteuererklärung", 16_000),
        ("schenkungsteuererklärung", 16_000),
        ("feststellungserklärung", 8_000),
    ])
});

fn normalize(activity: &str) -> String {
    activity.trim().to_lowercase()
}

/// Statutory minimum object value for an activity
///
/// Returns zero when the activity has no statutory minimum (including
/// free-text labels the registry does not know). Matching is
/// case-insensitive and ignores surrounding whitespace.
pub fn minimum_object_value(activity: &str) -> Decimal {
    MINIMUM_OBJECT_VALUES
        .get(normalize(activity).as_str())
        .map(|&min| Decimal::from(min))
        .unwrap_or(Decimal::ZERO)
}

/// Activities carrying a statutory minimum, for collaborator hint text
pub fn activities_with_minimums() -> impl Iterator<Item = &'static str> {
    MINIMUM_OBJECT_VALUES.keys().copied()
}
