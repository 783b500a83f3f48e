use chrono::NaiveDate;
use tracing::debug;

use crate::core::services::{ConsumptionService, OdometerService};
use crate::core::time::months_before;
use crate::domain::{common::total_amount, DerivedStats, ExpenseRecord, ExpenseType};

/// Window and reference values `StatsService` needs beyond the expense log.
#[derive(Debug, Clone, Copy)]
pub struct StatsOptions {
    pub today: NaiveDate,
    pub recent_months: u32,
    pub mileage_limit: u64,
}

/// Assembles consumption and cost figures from the pairing totals.
pub struct StatsService;

impl StatsService {
    /// Returns `None` when there are no expenses at all.
    pub fn compute(expenses: &[ExpenseRecord], options: StatsOptions) -> Option<DerivedStats> {
        if expenses.is_empty() {
            return None;
        }

        let total_expenses = total_amount(expenses);
        let total_fuel_spend = total_amount(
            expenses
                .iter()
                .filter(|expense| expense.expense_type == ExpenseType::Fuel),
        );

        let lifetime = OdometerService::lifetime_totals(expenses);
        let recent_since = months_before(options.today, options.recent_months);
        let recent = OdometerService::totals_since(expenses, recent_since);

        let average_fuel_consumption = ConsumptionService::average_consumption(&lifetime);
        let stats = DerivedStats {
            total_expenses,
            total_fuel_spend,
            lifetime,
            recent,
            average_fuel_consumption,
            recent_average_fuel_consumption: ConsumptionService::recent_average_consumption(
                &recent,
                average_fuel_consumption,
            ),
            cost_per_distance: ConsumptionService::cost_per_distance(&lifetime, total_expenses),
            average_fuel_price: ConsumptionService::average_fuel_price(&lifetime),
            has_fuel_expenses: lifetime.fuel_events > 0,
            mileage_limit: options.mileage_limit,
        };
        debug!(
            "stats over {} expense(s), recent window from {}: {:.2} per 100",
            expenses.len(),
            recent_since,
            stats.average_fuel_consumption
        );
        Some(stats)
    }
}
