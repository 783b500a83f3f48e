//! Pairs chronologically ordered odometer readings of fuel events into travelled distances.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::domain::{expense::sorted_by_date, ExpenseRecord, FuelTotals};

pub struct OdometerService;

impl OdometerService {
    /// Totals over the full expense history.
    pub fn lifetime_totals(expenses: &[ExpenseRecord]) -> FuelTotals {
        let events = Self::fuel_events(expenses);
        Self::accumulate(&events)
    }

    /// Totals over the events dated on or after `since`, paired among themselves only.
    pub fn totals_since(expenses: &[ExpenseRecord], since: NaiveDate) -> FuelTotals {
        let events: Vec<&ExpenseRecord> = Self::fuel_events(expenses)
            .into_iter()
            .filter(|event| event.date >= since)
            .collect();
        Self::accumulate(&events)
    }

    /// Fuel events usable for pairing, in chronological order.
    pub fn fuel_events(expenses: &[ExpenseRecord]) -> Vec<&ExpenseRecord> {
        sorted_by_date(expenses)
            .into_iter()
            .filter(|expense| expense.is_pairable())
            .collect()
    }

    /// Pairs each event with the nearest earlier event whose reading is strictly lower.
    ///
    /// `lower` holds a strictly increasing run of readings; anything at or above the
    /// current reading can never be the nearest lower reading for a later event either,
    /// so it is dropped. Each reading is pushed and popped at most once.
    fn accumulate(events: &[&ExpenseRecord]) -> FuelTotals {
        let mut totals = FuelTotals {
            fuel_events: events.len(),
            ..FuelTotals::default()
        };
        let mut lower: Vec<u64> = Vec::with_capacity(events.len());

        for event in events {
            let (Some(mileage), Some(volume)) = (event.odometer(), event.positive_fuel_volume())
            else {
                continue;
            };
            while lower.last().is_some_and(|previous| *previous >= mileage) {
                lower.pop();
            }
            match lower.last() {
                Some(previous) => {
                    totals.distance = totals.distance.saturating_add(mileage - previous);
                    totals.fuel_volume += volume;
                    totals.fuel_cost += event.amount;
                    totals.paired_events += 1;
                }
                None => trace!(
                    "fuel event {} at {} km has no lower earlier reading",
                    event.id,
                    mileage
                ),
            }
            lower.push(mileage);
        }

        debug!(
            events = totals.fuel_events,
            paired = totals.paired_events,
            distance = totals.distance,
            "odometer pairing complete"
        );
        totals
    }
}
