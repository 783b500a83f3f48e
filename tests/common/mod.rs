#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use vehicle_core::config::EngineConfig;
use vehicle_core::core::{FixedClock, StatsEngine};
use vehicle_core::domain::{ExpenseRecord, ExpenseType, VehicleMeta};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Reference day the pinned engine treats as today.
pub fn today() -> NaiveDate {
    date(2025, 6, 30)
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

/// Default engine whose clock is pinned to [`today`].
pub fn pinned_engine() -> StatsEngine<FixedClock> {
    StatsEngine::with_clock(EngineConfig::default(), FixedClock::on(today()))
}

pub fn vehicle() -> VehicleMeta {
    VehicleMeta::new("Family wagon", date(2019, 3, 14))
}

/// A season of mixed expenses for one vehicle, with an odometer correction and a
/// fuel entry missing its volume.
pub fn sample_log(vehicle: &VehicleMeta) -> Vec<ExpenseRecord> {
    let id = vehicle.id;
    vec![
        ExpenseRecord::fuel(id, date(2024, 1, 5), 62.5, 41.0, 48_200),
        ExpenseRecord::new(id, date(2024, 1, 20), ExpenseType::Insurance, 480.0),
        ExpenseRecord::fuel(id, date(2024, 2, 3), 60.25, 39.5, 48_850),
        ExpenseRecord::new(id, date(2024, 2, 18), ExpenseType::Fuel, 20.0).with_mileage(49_000),
        ExpenseRecord::fuel(id, date(2024, 3, 1), 64.0, 42.0, 49_500),
        ExpenseRecord::new(id, date(2024, 3, 10), ExpenseType::Maintenance, 189.75)
            .with_mileage(49_620),
        // Corrected odometer entry, lower than the previous fill.
        ExpenseRecord::fuel(id, date(2024, 3, 28), 58.5, 38.0, 49_400),
        ExpenseRecord::new(id, date(2024, 4, 2), ExpenseType::Toll, 7.5),
        ExpenseRecord::new(id, date(2024, 4, 9), ExpenseType::Fine, 40.0),
        ExpenseRecord::fuel(id, date(2024, 4, 25), 61.0, 40.0, 50_100),
    ]
}
