//! Stable, public-facing helpers that wrap the service layer.
//!
//! These run against the system clock and the default [`EngineConfig`]; callers
//! needing a fixed "now" or custom windows use [`StatsEngine`] directly.

use crate::config::EngineConfig;
use crate::core::engine::StatsEngine;
use crate::domain::{
    CategoryShare, CategoryYearPair, DerivedStats, ExpenseRecord, MileageTrack, PricePoint,
    VehicleMeta,
};

fn engine() -> StatsEngine {
    StatsEngine::new(EngineConfig::default())
}

/// Consumption and cost figures, or `None` when `expenses` is empty.
pub fn compute_stats(expenses: &[ExpenseRecord], vehicle: &VehicleMeta) -> Option<DerivedStats> {
    engine().compute_stats(expenses, vehicle)
}

/// Fuel unit prices over the last 365 days.
pub fn build_chart_series(expenses: &[ExpenseRecord]) -> Vec<PricePoint> {
    engine().build_chart_series(expenses)
}

pub fn build_mileage_track(expenses: &[ExpenseRecord], vehicle: &VehicleMeta) -> MileageTrack {
    engine().build_mileage_track(expenses, vehicle)
}

pub fn build_distribution(expenses: &[ExpenseRecord]) -> Vec<CategoryShare> {
    engine().build_distribution(expenses)
}

pub fn build_yearly_comparison(expenses: &[ExpenseRecord]) -> Vec<CategoryYearPair> {
    engine().build_yearly_comparison(expenses)
}
