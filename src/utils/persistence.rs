use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::VehicleError;

/// Writes `value` as pretty JSON, staging to a temporary file so readers never see a partial write.
pub fn save_json_to_file<T: Serialize>(value: &T, path: &Path) -> Result<(), VehicleError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a JSON document from disk, returning structured errors on failure.
pub fn load_json_from_file<T: DeserializeOwned>(path: &Path) -> Result<T, VehicleError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
