//! Convertisseur simulé

use crate::error_model::ErrorModel;
use crate::metrics::LinearityMetrics;
use adc_core::{AdcModel, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Configuration de la simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Tension de référence `u0`
    pub reference_voltage: f64,

    /// Nombre de bits
    pub bits: u32,

    /// Modèle d'erreur
    pub error_model: ErrorModel,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            reference_voltage: 1.0,
            bits: 8,
            error_model: ErrorModel::default(),
        }
    }
}

impl SimulationConfig {
    /// Modèle de CAN correspondant
    pub fn model(&self) -> AdcModel {
        AdcModel::new(self.reference_voltage, self.bits)
    }
}

/// Résultat d'une simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Erreurs tirées, une par bit
    pub errors: Vec<f64>,

    /// Caractéristique idéale multipliée par `u0`
    pub ideal: Vec<f64>,

    /// Caractéristique réelle
    pub real: Vec<f64>,

    pub metrics: LinearityMetrics,
}

/// Convertisseur simulé avec erreurs reproductibles
pub struct ConverterSimulator {
    config: SimulationConfig,
    model: AdcModel,
    ideal: Vec<f64>,
    rng: ChaCha8Rng,
}

impl ConverterSimulator {
    /// Crée un nouveau simulateur
    pub fn new(config: SimulationConfig) -> Self {
        let model = config.model();
        Self {
            config,
            model,
            ideal: model.ideal_characteristic(),
            rng: ChaCha8Rng::seed_from_u64(config.error_model.seed),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Tire un vecteur d'erreurs et calcule la caractéristique réelle
    pub fn run(&mut self) -> Result<SimulationRun> {
        let errors = self.config.error_model.sample(&self.model, &mut self.rng);
        let real = self.model.real_characteristic(&errors)?;
        let metrics = LinearityMetrics::from_curves(&self.model, &self.ideal, &real);

        tracing::debug!(
            max_inl = metrics.max_inl,
            max_dnl = metrics.max_dnl,
            non_monotonic = metrics.non_monotonic_steps,
            "simulation terminée"
        );

        let u0 = self.model.reference_voltage;
        Ok(SimulationRun {
            errors,
            ideal: self.ideal.iter().map(|v| u0 * v).collect(),
            real,
            metrics,
        })
    }

    /// Simule plusieurs itérations
    pub fn run_iterations(&mut self, n: usize) -> Result<Vec<SimulationRun>> {
        (0..n).map(|_| self.run()).collect()
    }

    /// Réinitialise le RNG
    pub fn reset_rng(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.error_model.seed);
    }
}
