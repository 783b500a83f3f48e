//! Stateless analytics services. Each one is a pure function of the expense log
//! and never fails; degenerate input produces zero or empty results.

pub mod category_service;
pub mod chart_service;
pub mod comparison_service;
pub mod consumption_service;
pub mod mileage_service;
pub mod odometer_service;
pub mod stats_service;

pub use category_service::CategoryService;
pub use chart_service::ChartService;
pub use comparison_service::{ComparisonService, COMPARED_CATEGORIES};
pub use consumption_service::ConsumptionService;
pub use mileage_service::MileageService;
pub use odometer_service::OdometerService;
pub use stats_service::{StatsOptions, StatsService};
