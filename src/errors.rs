use thiserror::Error;
use uuid::Uuid;

/// Failures of the I/O-facing surfaces (configuration and expense sources).
///
/// The analytics themselves never fail.
#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(Uuid),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VehicleError>;
