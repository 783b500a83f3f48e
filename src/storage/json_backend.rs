use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::ExpenseSource;
use crate::domain::{ExpenseRecord, VehicleMeta};
use crate::errors::{Result, VehicleError};
use crate::utils::persistence::{load_json_from_file, save_json_to_file};

pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// On-disk document holding vehicles and their expense logs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleExport {
    #[serde(default = "VehicleExport::schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub vehicles: Vec<VehicleMeta>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

impl VehicleExport {
    fn schema_version() -> u32 {
        EXPORT_SCHEMA_VERSION
    }

    pub fn new(vehicles: Vec<VehicleMeta>, expenses: Vec<ExpenseRecord>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            vehicles,
            expenses,
        }
    }
}

/// Serves an exported JSON document loaded once at open time.
#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
    export: VehicleExport,
}

impl JsonExpenseStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let export: VehicleExport = load_json_from_file(&path)?;
        if export.schema_version > EXPORT_SCHEMA_VERSION {
            tracing::warn!(
                "export {} uses schema v{}, newer than supported v{}",
                path.display(),
                export.schema_version,
                EXPORT_SCHEMA_VERSION
            );
        }
        tracing::debug!(
            "loaded {} vehicle(s) and {} expense(s) from {}",
            export.vehicles.len(),
            export.expenses.len(),
            path.display()
        );
        Ok(Self { path, export })
    }

    /// Writes `export` to `path` atomically and opens it.
    pub fn create(path: impl Into<PathBuf>, export: VehicleExport) -> Result<Self> {
        let path = path.into();
        save_json_to_file(&export, &path)?;
        Ok(Self { path, export })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn export(&self) -> &VehicleExport {
        &self.export
    }
}

impl ExpenseSource for JsonExpenseStore {
    fn get_expenses(&self, vehicle_id: Uuid) -> Result<Vec<ExpenseRecord>> {
        Ok(self
            .export
            .expenses
            .iter()
            .filter(|expense| expense.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }

    fn get_vehicle(&self, vehicle_id: Uuid) -> Result<VehicleMeta> {
        self.export
            .vehicles
            .iter()
            .find(|vehicle| vehicle.id == vehicle_id)
            .cloned()
            .ok_or(VehicleError::VehicleNotFound(vehicle_id))
    }
}
