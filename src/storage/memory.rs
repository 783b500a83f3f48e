use std::collections::HashMap;

use uuid::Uuid;

use super::ExpenseSource;
use crate::domain::{ExpenseRecord, VehicleMeta};
use crate::errors::{Result, VehicleError};

/// Keeps vehicles and expenses in memory; useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    vehicles: HashMap<Uuid, VehicleMeta>,
    expenses: Vec<ExpenseRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vehicle and returns its identifier.
    pub fn add_vehicle(&mut self, vehicle: VehicleMeta) -> Uuid {
        let id = vehicle.id;
        self.vehicles.insert(id, vehicle);
        id
    }

    pub fn add_expense(&mut self, expense: ExpenseRecord) {
        self.expenses.push(expense);
    }

    pub fn extend_expenses(&mut self, expenses: impl IntoIterator<Item = ExpenseRecord>) {
        self.expenses.extend(expenses);
    }
}

impl ExpenseSource for InMemoryStore {
    fn get_expenses(&self, vehicle_id: Uuid) -> Result<Vec<ExpenseRecord>> {
        Ok(self
            .expenses
            .iter()
            .filter(|expense| expense.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }

    fn get_vehicle(&self, vehicle_id: Uuid) -> Result<VehicleMeta> {
        self.vehicles
            .get(&vehicle_id)
            .cloned()
            .ok_or(VehicleError::VehicleNotFound(vehicle_id))
    }
}
