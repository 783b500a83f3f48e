use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::core::utils::{round_to, safe_ratio};
use crate::domain::{expense::sorted_by_date, ExpenseRecord, PricePoint};

const MONTH_LABEL_FORMAT: &str = "%b %y";

/// Builds the fuel unit-price time series.
pub struct ChartService;

impl ChartService {
    /// Every fuel event with a positive volume dated within `window_days` of `today`.
    ///
    /// Unlike pairing, no earlier odometer reading is needed.
    pub fn price_series(
        expenses: &[ExpenseRecord],
        today: NaiveDate,
        window_days: i64,
        precision: u32,
    ) -> Vec<PricePoint> {
        // A window reaching past the calendar's start keeps every event.
        let cutoff = Duration::try_days(window_days)
            .and_then(|window| today.checked_sub_signed(window))
            .unwrap_or(NaiveDate::MIN);
        let series: Vec<PricePoint> = sorted_by_date(expenses)
            .into_iter()
            .filter(|expense| expense.date >= cutoff)
            .filter_map(|expense| {
                let volume = expense.positive_fuel_volume().filter(|_| expense.is_fuel())?;
                Some(PricePoint {
                    date: expense.date,
                    month_label: expense.date.format(MONTH_LABEL_FORMAT).to_string(),
                    price: round_to(safe_ratio(expense.amount, volume), precision),
                    volume,
                    mileage: expense.odometer(),
                })
            })
            .collect();
        debug!("price series since {}: {} point(s)", cutoff, series.len());
        series
    }
}
