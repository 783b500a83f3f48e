//! Entry point tying the services to a configuration and a clock.

use chrono::Datelike;
use tracing::info;

use crate::config::EngineConfig;
use crate::core::services::{
    CategoryService, ChartService, ComparisonService, MileageService, StatsOptions, StatsService,
};
use crate::core::time::{Clock, FixedClock, SystemClock};
use crate::domain::{
    CategoryShare, CategoryYearPair, DerivedStats, ExpenseRecord, MileageTrack, PricePoint,
    VehicleMeta, VehicleReport,
};

/// Computes every derived dataset for a single vehicle.
///
/// Holds no state between calls: each method recomputes from the given expenses,
/// reading "now" from the clock exactly once.
#[derive(Debug, Clone)]
pub struct StatsEngine<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
}

impl StatsEngine<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for StatsEngine<SystemClock> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: Clock> StatsEngine<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Consumption and cost figures, or `None` when `expenses` is empty.
    pub fn compute_stats(
        &self,
        expenses: &[ExpenseRecord],
        vehicle: &VehicleMeta,
    ) -> Option<DerivedStats> {
        tracing::trace!("computing stats for vehicle {}", vehicle.id);
        StatsService::compute(
            expenses,
            StatsOptions {
                today: self.clock.today(),
                recent_months: self.config.recent_months,
                mileage_limit: self.config.mileage_limit,
            },
        )
    }

    pub fn build_chart_series(&self, expenses: &[ExpenseRecord]) -> Vec<PricePoint> {
        ChartService::price_series(
            expenses,
            self.clock.today(),
            self.config.chart_window_days,
            self.config.price_precision,
        )
    }

    pub fn build_mileage_track(
        &self,
        expenses: &[ExpenseRecord],
        vehicle: &VehicleMeta,
    ) -> MileageTrack {
        MileageService::track(expenses, vehicle, self.clock.now())
    }

    pub fn build_distribution(&self, expenses: &[ExpenseRecord]) -> Vec<CategoryShare> {
        CategoryService::distribution(expenses)
    }

    pub fn build_yearly_comparison(&self, expenses: &[ExpenseRecord]) -> Vec<CategoryYearPair> {
        ComparisonService::yearly(expenses, self.clock.today().year())
    }

    /// All datasets at once, evaluated against a single reading of the clock.
    pub fn report(&self, expenses: &[ExpenseRecord], vehicle: &VehicleMeta) -> VehicleReport {
        let pinned = StatsEngine::with_clock(self.config.clone(), FixedClock(self.clock.now()));
        let report = VehicleReport {
            stats: pinned.compute_stats(expenses, vehicle),
            chart_series: pinned.build_chart_series(expenses),
            mileage_track: pinned.build_mileage_track(expenses, vehicle),
            distribution: pinned.build_distribution(expenses),
            yearly_comparison: pinned.build_yearly_comparison(expenses),
        };
        info!(
            "report for vehicle {} built from {} expense(s)",
            vehicle.id,
            expenses.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn report_bundles_every_dataset() {
        let vehicle = VehicleMeta::new("Hatchback", date(2022, 4, 1));
        let expenses = vec![
            ExpenseRecord::fuel(vehicle.id, date(2025, 1, 10), 60.0, 40.0, 30_000),
            ExpenseRecord::fuel(vehicle.id, date(2025, 2, 10), 66.0, 44.0, 30_800),
            ExpenseRecord::new(vehicle.id, date(2024, 9, 1), ExpenseType::Repair, 250.0)
                .with_mileage(29_000),
        ];
        let engine =
            StatsEngine::with_clock(EngineConfig::default(), FixedClock::on(date(2025, 3, 1)));

        let report = engine.report(&expenses, &vehicle);
        let stats = report.stats.expect("stats");
        assert_eq!(stats.lifetime.distance, 800);
        assert_eq!(report.chart_series.len(), 2);
        assert_eq!(report.mileage_track.current, 30_800);
        assert_eq!(report.mileage_track.year_start, 29_000);
        assert_eq!(report.distribution.len(), 2);
        assert_eq!(report.yearly_comparison[2].previous_year, 250.0);
    }

    #[test]
    fn mileage_limit_comes_from_config() {
        let vehicle = VehicleMeta::new("Van", date(2021, 1, 1));
        let expenses = vec![ExpenseRecord::new(
            vehicle.id,
            date(2025, 1, 1),
            ExpenseType::Toll,
            3.0,
        )];
        let engine = StatsEngine::with_clock(
            EngineConfig::default().with_mileage_limit(25_000),
            FixedClock::on(date(2025, 3, 1)),
        );
        let stats = engine.compute_stats(&expenses, &vehicle).expect("stats");
        assert_eq!(stats.mileage_limit, 25_000);
    }
}
