//! Configuration de l'application

use adc_simulation::ErrorDistribution;
use serde::Deserialize;

/// Paramètres du convertisseur
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub reference_voltage: f64,
    pub bits: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            reference_voltage: 1.0,
            bits: 8,
        }
    }
}

/// Paramètres de simulation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    pub distribution: ErrorDistribution,
    pub seed: u64,
    pub iterations: usize,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            distribution: ErrorDistribution::Uniform,
            seed: 42,
            iterations: 100,
        }
    }
}

/// Configuration du logging
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub simulation: SimulationSection,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Charge la configuration depuis un fichier
    ///
    /// Un fichier absent n'est pas une erreur : les valeurs par défaut s'appliquent.
    pub fn load_from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("ADC").separator("__"))
            .build()?;

        settings.try_deserialize::<AppConfig>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_from_file("/nonexistent/adc-config").unwrap();
        assert_eq!(config.model.bits, 8);
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[model]\nreference_voltage = 3.3\nbits = 12\n\n[simulation]\ndistribution = \"stratified-reversed\"\niterations = 10"
        )
        .unwrap();

        // clé propre à ce test : les autres tests lisent aussi l'environnement
        std::env::set_var("ADC__SIMULATION__ITERATIONS", "500");
        let config = AppConfig::load_from_file(file.path().to_str().unwrap());
        std::env::remove_var("ADC__SIMULATION__ITERATIONS");
        let config = config.unwrap();

        // valeurs du fichier
        assert_eq!(config.model.bits, 12);
        assert_eq!(config.model.reference_voltage, 3.3);
        assert_eq!(config.simulation.distribution, ErrorDistribution::StratifiedReversed);
        // l'environnement l'emporte sur le fichier
        assert_eq!(config.simulation.iterations, 500);
        // absent des deux : valeur par défaut
        assert_eq!(config.simulation.seed, 42);
    }
}
