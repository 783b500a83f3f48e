//! Boundary to the external expense store.

pub mod json_backend;
pub mod memory;

use uuid::Uuid;

use crate::core::{time::Clock, StatsEngine};
use crate::domain::{ExpenseRecord, VehicleMeta, VehicleReport};
use crate::errors::Result;

/// Read access to stored vehicles and their expense logs.
pub trait ExpenseSource: Send + Sync {
    /// All expenses recorded for the vehicle, in no particular order.
    fn get_expenses(&self, vehicle_id: Uuid) -> Result<Vec<ExpenseRecord>>;
    fn get_vehicle(&self, vehicle_id: Uuid) -> Result<VehicleMeta>;
}

/// Fetches a vehicle and its expenses, then computes every dataset for it.
pub fn load_report<S, C>(
    source: &S,
    vehicle_id: Uuid,
    engine: &StatsEngine<C>,
) -> Result<VehicleReport>
where
    S: ExpenseSource + ?Sized,
    C: Clock,
{
    let vehicle = source.get_vehicle(vehicle_id)?;
    let expenses = source.get_expenses(vehicle_id)?;
    Ok(engine.report(&expenses, &vehicle))
}

pub use json_backend::{JsonExpenseStore, VehicleExport};
pub use memory::InMemoryStore;
