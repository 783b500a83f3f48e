//! Domain types representing vehicle expense entries.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Amounted;

/// Kind of vehicle expense. Unrecognised tags deserialize into [`ExpenseType::Unknown`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    Fuel,
    RentOrLoan,
    Maintenance,
    Insurance,
    Repair,
    Fine,
    Toll,
    Other,
    #[serde(other)]
    Unknown,
}

impl ExpenseType {
    /// The eight categories users can record; `Unknown` is only ever produced by parsing.
    pub const KNOWN: [ExpenseType; 8] = [
        ExpenseType::Fuel,
        ExpenseType::RentOrLoan,
        ExpenseType::Maintenance,
        ExpenseType::Insurance,
        ExpenseType::Repair,
        ExpenseType::Fine,
        ExpenseType::Toll,
        ExpenseType::Other,
    ];

    /// Stable wire tag, matching the serde representation.
    pub fn tag(self) -> &'static str {
        match self {
            ExpenseType::Fuel => "fuel",
            ExpenseType::RentOrLoan => "rent_or_loan",
            ExpenseType::Maintenance => "maintenance",
            ExpenseType::Insurance => "insurance",
            ExpenseType::Repair => "repair",
            ExpenseType::Fine => "fine",
            ExpenseType::Toll => "toll",
            ExpenseType::Other => "other",
            ExpenseType::Unknown => "unknown",
        }
    }

    /// Display name used by distribution and comparison views.
    pub fn label(self) -> &'static str {
        match self {
            ExpenseType::Fuel => "Fuel",
            ExpenseType::RentOrLoan => "Rent / Loan",
            ExpenseType::Maintenance => "Maintenance",
            ExpenseType::Insurance => "Insurance",
            ExpenseType::Repair => "Repair",
            ExpenseType::Fine => "Fine",
            ExpenseType::Toll => "Toll",
            ExpenseType::Other => "Other",
            ExpenseType::Unknown => "Unknown",
        }
    }

    /// Chart colour as a hex RGB string.
    pub fn color(self) -> &'static str {
        match self {
            ExpenseType::Fuel => "#f97316",
            ExpenseType::RentOrLoan => "#6366f1",
            ExpenseType::Maintenance => "#22c55e",
            ExpenseType::Insurance => "#0ea5e9",
            ExpenseType::Repair => "#ef4444",
            ExpenseType::Fine => "#a855f7",
            ExpenseType::Toll => "#eab308",
            ExpenseType::Other => "#64748b",
            ExpenseType::Unknown => "#9ca3af",
        }
    }

    /// Parses a raw tag, falling back to `Unknown` rather than failing.
    pub fn from_tag(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        ExpenseType::KNOWN
            .into_iter()
            .find(|kind| kind.tag() == normalized)
            .unwrap_or(ExpenseType::Unknown)
    }
}

impl FromStr for ExpenseType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ExpenseType::from_tag(s))
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single expense entry recorded against a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub expense_type: ExpenseType,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_volume: Option<f64>,
}

impl ExpenseRecord {
    pub fn new(vehicle_id: Uuid, date: NaiveDate, expense_type: ExpenseType, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            date,
            expense_type,
            amount,
            mileage: None,
            fuel_volume: None,
        }
    }

    /// Convenience constructor for a refuelling entry with an odometer reading.
    pub fn fuel(vehicle_id: Uuid, date: NaiveDate, amount: f64, volume: f64, mileage: u64) -> Self {
        Self::new(vehicle_id, date, ExpenseType::Fuel, amount)
            .with_fuel_volume(volume)
            .with_mileage(mileage)
    }

    pub fn with_mileage(mut self, mileage: u64) -> Self {
        self.mileage = Some(mileage);
        self
    }

    pub fn with_fuel_volume(mut self, volume: f64) -> Self {
        self.fuel_volume = Some(volume);
        self
    }

    pub fn is_fuel(&self) -> bool {
        self.expense_type == ExpenseType::Fuel
    }

    /// Odometer reading, treating a zero entry as absent.
    pub fn odometer(&self) -> Option<u64> {
        self.mileage.filter(|value| *value > 0)
    }

    /// Recorded fuel volume when it is a usable, strictly positive number.
    pub fn positive_fuel_volume(&self) -> Option<f64> {
        self.fuel_volume
            .filter(|volume| volume.is_finite() && *volume > 0.0)
    }

    /// Fuel-typed with a positive volume.
    pub fn is_fuel_event(&self) -> bool {
        self.is_fuel() && self.positive_fuel_volume().is_some()
    }

    /// Fuel event that also carries an odometer reading, so it can take part in pairing.
    pub fn is_pairable(&self) -> bool {
        self.is_fuel_event() && self.odometer().is_some()
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Returns references to `expenses` ordered by date; entries on the same day keep input order.
pub fn sorted_by_date(expenses: &[ExpenseRecord]) -> Vec<&ExpenseRecord> {
    let mut sorted: Vec<&ExpenseRecord> = expenses.iter().collect();
    sorted.sort_by_key(|expense| expense.date);
    sorted
}
