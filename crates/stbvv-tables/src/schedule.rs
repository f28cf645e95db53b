//! Fee table lookup
//!
//! Tables map a monetary object value (Gegenstandswert) to the statutory
//! full fee via ordered, contiguous, half-open bands. Lookup is pure and
//! side-effect-free; repeated calls with identical inputs return identical
//! results.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use stbvv_core::models::FeeTableKind;
use stbvv_core::{AppError, AppResult};
use tracing::debug;

use crate::data;

/// One fee band: `[min_value, max_value) → fee`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeBand {
    pub min_value: Decimal,
    pub max_value: Decimal,
    pub fee: Decimal,
}

/// A validated statutory fee table
///
/// The constructor enforces the band invariants (non-empty, contiguous,
/// non-overlapping, non-decreasing fees), so a constructed table can never
/// produce an ambiguous lookup. Malformed band data is a configuration
/// defect and fails hard, not a user error.
#[derive(Debug, Clone)]
pub struct FeeTable {
    kind: FeeTableKind,
    bands: Vec<FeeBand>,
}

impl FeeTable {
    /// Build a table from bands, verifying the statutory band invariants
    pub fn new(kind: FeeTableKind, bands: Vec<FeeBand>) -> AppResult<Self> {
        if bands.is_empty() {
            return Err(AppError::MalformedFeeTable {
                table: kind.to_string(),
                reason: "table has no bands".to_string(),
            });
        }

        for (i, band) in bands.iter().enumerate() {
            if band.min_value >= band.max_value {
                return Err(AppError::MalformedFeeTable {
                    table: kind.to_string(),
                    reason: format!(
                        "band {} is empty or inverted ({} >= {})",
                        i, band.min_value, band.max_value
                    ),
                });
            }
            if band.fee < Decimal::ZERO {
                return Err(AppError::MalformedFeeTable {
                    table: kind.to_string(),
                    reason: format!("band {} has a negative fee", i),
                });
            }
        }

        for (i, pair) in bands.windows(2).enumerate() {
            if pair[0].max_value != pair[1].min_value {
                return Err(AppError::MalformedFeeTable {
                    table: kind.to_string(),
                    reason: format!(
                        "bands {} and {} are not contiguous ({} != {})",
                        i,
                        i + 1,
                        pair[0].max_value,
                        pair[1].min_value
                    ),
                });
            }
            if pair[1].fee < pair[0].fee {
                return Err(AppError::MalformedFeeTable {
                    table: kind.to_string(),
                    reason: format!("fee decreases from band {} to band {}", i, i + 1),
                });
            }
        }

        Ok(Self { kind, bands })
    }

    fn from_raw(kind: FeeTableKind, raw: &[(u64, u64, u64)]) -> AppResult<Self> {
        let bands = raw
            .iter()
            .map(|&(min, max, fee)| FeeBand {
                min_value: Decimal::from(min),
                max_value: Decimal::from(max),
                fee: Decimal::from(fee),
            })
            .collect();
        Self::new(kind, bands)
    }

    pub fn kind(&self) -> FeeTableKind {
        self.kind
    }

    pub fn bands(&self) -> &[FeeBand] {
        &self.bands
    }

    /// Look up the full fee for an object value
    ///
    /// Values at or beyond the top band's upper bound receive the top
    /// band's fee (flat continuation, not an extrapolated slope). Negative
    /// values are a caller contract violation; the position calculator
    /// rejects them before reaching here.
    pub fn lookup(&self, object_value: Decimal) -> Decimal {
        debug_assert!(object_value >= Decimal::ZERO);

        for band in &self.bands {
            if object_value >= band.min_value && object_value < band.max_value {
                return band.fee;
            }
        }

        // Constructor guarantees at least one band.
        let top = &self.bands[self.bands.len() - 1];
        debug!(
            table = %self.kind,
            %object_value,
            "object value beyond top band, continuing flat at {}", top.fee
        );
        top.fee
    }
}

static TABLES: Lazy<[FeeTable; 4]> = Lazy::new(|| {
    // A malformed shipped table is corrupted static configuration; fail
    // fast and loudly at first access rather than computing wrong fees.
    let build = |kind, raw| match FeeTable::from_raw(kind, raw) {
        Ok(table) => table,
        Err(e) => panic!("statutory fee table data is corrupted: {}", e),
    };
    [
        build(FeeTableKind::A, data::TABLE_A_BANDS),
        build(FeeTableKind::B, data::TABLE_B_BANDS),
        build(FeeTableKind::C, data::TABLE_C_BANDS),
        build(FeeTableKind::D, data::TABLE_D_BANDS),
    ]
});

/// Accessor for the shipped statutory tables
pub struct FeeSchedule;

impl FeeSchedule {
    /// The shipped table of the given kind
    pub fn table(kind: FeeTableKind) -> &'static FeeTable {
        match kind {
            FeeTableKind::A => &TABLES[0],
            FeeTableKind::B => &TABLES[1],
            FeeTableKind::C => &TABLES[2],
            FeeTableKind::D => &TABLES[3],
        }
    }

    /// Convenience lookup against a shipped table
    pub fn lookup(kind: FeeTableKind, object_value: Decimal) -> Decimal {
        Self::table(kind).lookup(object_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn band(min: u64, max: u64, fee: u64) -> FeeBand {
        FeeBand {
            min_value: Decimal::from(min),
            max_value: Decimal::from(max),
            fee: Decimal::from(fee),
        }
    }

    #[test]
    fn test_all_shipped_tables_are_well_formed() {
        // Forces the Lazy build, which re-runs the band invariants.
        for kind in FeeTableKind::all() {
            let table = FeeSchedule::table(kind);
            assert!(!table.bands().is_empty());
            for pair in table.bands().windows(2) {
                assert_eq!(pair[0].max_value, pair[1].min_value);
                assert!(pair[1].fee >= pair[0].fee);
            }
        }
    }

    #[test]
    fn test_lookup_basic() {
        // 10000 falls into the [10000, 13000) band of table A
        assert_eq!(FeeSchedule::lookup(FeeTableKind::A, dec!(10000)), dec!(618));
        // Band boundaries are half-open: 9999.99 still belongs below
        assert_eq!(
            FeeSchedule::lookup(FeeTableKind::A, dec!(9999.99)),
            dec!(573)
        );
        assert_eq!(FeeSchedule::lookup(FeeTableKind::A, dec!(0)), dec!(29));
    }

    #[test]
    fn test_lookup_flat_continuation_above_top_band() {
        let top_fee = FeeSchedule::lookup(FeeTableKind::A, dec!(599999));
        assert_eq!(FeeSchedule::lookup(FeeTableKind::A, dec!(600000)), top_fee);
        assert_eq!(
            FeeSchedule::lookup(FeeTableKind::A, dec!(25000000)),
            top_fee
        );
    }

    #[test]
    fn test_lookup_is_monotone() {
        let values = [0u64, 250, 300, 999, 5000, 10000, 50000, 200000, 700000];
        for kind in FeeTableKind::all() {
            let mut previous = Decimal::ZERO;
            for v in values {
                let fee = FeeSchedule::lookup(kind, Decimal::from(v));
                assert!(fee >= previous, "table {} decreases at {}", kind, v);
                previous = fee;
            }
        }
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let err = FeeTable::new(FeeTableKind::A, vec![]).unwrap_err();
        assert_eq!(err.error_code(), "malformed_fee_table");
    }

    #[test]
    fn test_new_rejects_gap() {
        let err = FeeTable::new(
            FeeTableKind::B,
            vec![band(0, 1000, 10), band(2000, 3000, 20)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("not contiguous"));
    }

    #[test]
    fn test_new_rejects_decreasing_fee() {
        let err = FeeTable::new(
            FeeTableKind::C,
            vec![band(0, 1000, 50), band(1000, 2000, 40)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("fee decreases"));
    }

    #[test]
    fn test_new_rejects_inverted_band() {
        let err = FeeTable::new(FeeTableKind::D, vec![band(1000, 1000, 10)]).unwrap_err();
        assert!(err.to_string().contains("inverted"));
    }

    #[test]
    fn test_custom_table_lookup() {
        // Amendment path: collaborators can load updated band data.
        let table = FeeTable::new(
            FeeTableKind::A,
            vec![band(0, 10000, 200), band(10000, 50000, 300)],
        )
        .unwrap();
        assert_eq!(table.lookup(dec!(10000)), dec!(300));
        assert_eq!(table.lookup(dec!(75000)), dec!(300));
        assert_eq!(table.lookup(dec!(500)), dec!(200));
    }
}
