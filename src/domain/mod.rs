//! Pure domain models: expense entries, vehicle metadata and derived outputs.
//! No I/O and no clock access.

pub mod common;
pub mod expense;
pub mod stats;
pub mod vehicle;

pub use common::{total_amount, Amounted};
pub use expense::{ExpenseRecord, ExpenseType};
pub use stats::{
    CategoryShare, CategoryYearPair, CostPerDistance, DerivedStats, FuelTotals, MileageTrack,
    PricePoint, VehicleReport,
};
pub use vehicle::VehicleMeta;
