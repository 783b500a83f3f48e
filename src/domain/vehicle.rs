use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehicle metadata owned by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleMeta {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub acquisition_date: NaiveDate,
}

impl VehicleMeta {
    pub fn new(name: impl Into<String>, acquisition_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            acquisition_date,
        }
    }
}
