//! Output types produced by the analytics services.
//!
//! Every value here is recomputed from the expense log on each call and has no
//! lifecycle of its own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::expense::ExpenseType;

/// Running totals accumulated while pairing odometer readings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FuelTotals {
    /// Sum of accepted, strictly positive odometer deltas.
    pub distance: u64,
    /// Volume of the fuel events that were paired with an earlier reading.
    pub fuel_volume: f64,
    /// Cost of the fuel events that were paired with an earlier reading.
    pub fuel_cost: f64,
    /// Fuel events with a positive volume and an odometer reading.
    pub fuel_events: usize,
    pub paired_events: usize,
}

impl FuelTotals {
    pub fn unpaired_events(&self) -> usize {
        self.fuel_events - self.paired_events
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CostPerDistance {
    pub fuel: f64,
    pub total: f64,
}

/// Consumption and cost figures for a single vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedStats {
    pub total_expenses: f64,
    /// Every fuel-typed amount, including entries excluded from pairing.
    pub total_fuel_spend: f64,
    pub lifetime: FuelTotals,
    pub recent: FuelTotals,
    /// Volume per 100 distance units.
    pub average_fuel_consumption: f64,
    pub recent_average_fuel_consumption: f64,
    pub cost_per_distance: CostPerDistance,
    pub average_fuel_price: f64,
    pub has_fuel_expenses: bool,
    pub mileage_limit: u64,
}

/// Odometer progress over the current calendar year.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MileageTrack {
    pub current: u64,
    pub year_start: u64,
    /// Whole percentage of the calendar year already elapsed.
    pub year_progress: u8,
}

impl MileageTrack {
    pub fn driven_this_year(&self) -> u64 {
        self.current.saturating_sub(self.year_start)
    }
}

/// Total spend of one category, with its display name and colour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: ExpenseType,
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl CategoryShare {
    pub fn new(category: ExpenseType, value: f64) -> Self {
        Self {
            category,
            name: category.label().to_string(),
            value,
            color: category.color().to_string(),
        }
    }
}

/// Spend of one category this calendar year against the previous one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryYearPair {
    pub category: ExpenseType,
    pub name: String,
    pub current_year: f64,
    pub previous_year: f64,
}

/// One point of the fuel price chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub month_label: String,
    /// Unit price, `amount / volume`.
    pub price: f64,
    pub volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u64>,
}

/// All presentation datasets for one vehicle, computed from the same input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleReport {
    pub stats: Option<DerivedStats>,
    pub chart_series: Vec<PricePoint>,
    pub mileage_track: MileageTrack,
    pub distribution: Vec<CategoryShare>,
    pub yearly_comparison: Vec<CategoryYearPair>,
}
