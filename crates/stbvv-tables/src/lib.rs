//! Statutory data for the StBVV fee engine
//!
//! This crate holds the four statutory fee tables (A through D) as ordered
//! band data plus the registry of minimum object values per activity. A
//! statutory amendment is a data change in this crate only; the lookup
//! logic and the engine stay untouched.

mod data;
pub mod minimums;
pub mod schedule;

pub use minimums::minimum_object_value;
pub use schedule::{FeeBand, FeeSchedule, FeeTable};
