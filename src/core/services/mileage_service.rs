use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::debug;

use crate::core::time::{start_of_year, year_bounds};
use crate::domain::{expense::sorted_by_date, ExpenseRecord, MileageTrack, VehicleMeta};

/// Tracks the odometer against the current calendar year.
pub struct MileageService;

impl MileageService {
    pub fn track(
        expenses: &[ExpenseRecord],
        vehicle: &VehicleMeta,
        now: DateTime<Utc>,
    ) -> MileageTrack {
        if expenses.is_empty() {
            return MileageTrack::default();
        }

        let year = now.year();
        let first_day = start_of_year(year);
        // Chronological, so the last match of each search is the most recent reading.
        let readings: Vec<(NaiveDate, u64)> = sorted_by_date(expenses)
            .into_iter()
            .filter_map(|expense| expense.odometer().map(|mileage| (expense.date, mileage)))
            .collect();

        let latest_this_year = readings
            .iter()
            .rev()
            .find(|(date, _)| date.year() == year)
            .map(|(_, mileage)| *mileage);
        let latest_before_year = readings
            .iter()
            .rev()
            .find(|(date, _)| *date < first_day)
            .map(|(_, mileage)| *mileage);

        // No floor is derived from the acquisition date when the vehicle has no prior-year reading.
        let track = MileageTrack {
            current: latest_this_year.or(latest_before_year).unwrap_or(0),
            year_start: latest_before_year.unwrap_or(0),
            year_progress: Self::year_progress(now),
        };
        debug!(
            "mileage track for vehicle {} (acquired {}): current {} km, year start {} km, {}% of {}",
            vehicle.id,
            vehicle.acquisition_date,
            track.current,
            track.year_start,
            track.year_progress,
            year
        );
        track
    }

    /// Rounded percentage of the calendar year containing `now` that has elapsed.
    pub fn year_progress(now: DateTime<Utc>) -> u8 {
        let (start, end) = year_bounds(now.year());
        let total = (end - start).num_seconds() as f64;
        let elapsed = (now - start).num_seconds() as f64;
        let percent = (elapsed / total * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }
}
