//! Simulation de convertisseurs à erreurs par bit

pub mod converter;
pub mod error_model;
pub mod metrics;

pub use converter::{ConverterSimulator, SimulationConfig, SimulationRun};
pub use error_model::{ErrorDistribution, ErrorModel};
pub use metrics::{LinearityMetrics, MetricsCollector};
