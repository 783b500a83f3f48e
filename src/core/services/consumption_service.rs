use crate::core::utils::safe_ratio;
use crate::domain::{CostPerDistance, FuelTotals};

/// Derives rates and unit costs from pairing totals. Every zero denominator resolves to `0`.
pub struct ConsumptionService;

impl ConsumptionService {
    /// Volume per 100 distance units.
    pub fn average_consumption(totals: &FuelTotals) -> f64 {
        safe_ratio(totals.fuel_volume * 100.0, totals.distance as f64)
    }

    /// Consumption over the recent window, or `lifetime_average` when nothing was driven in it.
    pub fn recent_average_consumption(recent: &FuelTotals, lifetime_average: f64) -> f64 {
        if recent.distance == 0 {
            lifetime_average
        } else {
            Self::average_consumption(recent)
        }
    }

    pub fn cost_per_distance(totals: &FuelTotals, total_expenses: f64) -> CostPerDistance {
        let distance = totals.distance as f64;
        CostPerDistance {
            fuel: safe_ratio(totals.fuel_cost, distance),
            total: safe_ratio(total_expenses, distance),
        }
    }

    pub fn average_fuel_price(totals: &FuelTotals) -> f64 {
        safe_ratio(totals.fuel_cost, totals.fuel_volume)
    }
}
