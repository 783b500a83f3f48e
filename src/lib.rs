#![doc(test(attr(deny(warnings))))]

//! Vehicle Core turns a raw vehicle expense log into fuel consumption rates,
//! cost-per-distance figures, odometer progress, spend distributions and
//! year-over-year comparisons.
//!
//! ```
//! use chrono::NaiveDate;
//! use vehicle_core::core::{FixedClock, StatsEngine};
//! use vehicle_core::config::EngineConfig;
//! use vehicle_core::domain::{ExpenseRecord, VehicleMeta};
//!
//! let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
//! let car = VehicleMeta::new("Car", day(1, 1));
//! let expenses = vec![
//!     ExpenseRecord::fuel(car.id, day(1, 1), 60.0, 40.0, 10_000),
//!     ExpenseRecord::fuel(car.id, day(2, 1), 65.0, 42.0, 10_600),
//! ];
//! let engine = StatsEngine::with_clock(EngineConfig::default(), FixedClock::on(day(3, 1)));
//! let stats = engine.compute_stats(&expenses, &car).unwrap();
//! assert!((stats.average_fuel_consumption - 7.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::public_api::{
    build_chart_series, build_distribution, build_mileage_track, build_yearly_comparison,
    compute_stats,
};
pub use crate::errors::{Result, VehicleError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(
            "Vehicle Core tracing initialized ({}).",
            utils::build_info::current().summary()
        );
    });
}
