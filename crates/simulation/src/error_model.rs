//! Modèles d'erreur pour la simulation

use adc_core::{AdcModel, UniformSource};
use serde::{Deserialize, Serialize};

/// Loi de tirage des erreurs par bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorDistribution {
    /// Tirages i.i.d. sur tout l'intervalle
    #[default]
    Uniform,
    /// Un tirage par sous-intervalle, dans l'ordre
    Stratified,
    /// Un tirage par sous-intervalle, ordre inversé
    StratifiedReversed,
}

/// Modèle d'erreur pour la simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorModel {
    /// Loi de tirage
    pub distribution: ErrorDistribution,

    /// Seed pour reproductibilité
    pub seed: u64,
}

impl Default for ErrorModel {
    fn default() -> Self {
        Self {
            distribution: ErrorDistribution::Uniform,
            seed: 42,
        }
    }
}

impl ErrorModel {
    /// Crée un nouveau modèle d'erreur
    pub fn new(distribution: ErrorDistribution) -> Self {
        Self {
            distribution,
            seed: 42,
        }
    }

    /// Définit le seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Définit la loi de tirage
    pub fn with_distribution(mut self, distribution: ErrorDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Tire un vecteur d'erreurs pour `model`
    pub fn sample<S: UniformSource + ?Sized>(&self, model: &AdcModel, source: &mut S) -> Vec<f64> {
        match self.distribution {
            ErrorDistribution::Uniform => model.errors_with(source),
            ErrorDistribution::Stratified => model.errors2_with(source),
            ErrorDistribution::StratifiedReversed => model.errors2_inv_with(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_model() {
        let model = ErrorModel::default();
        assert_eq!(model.distribution, ErrorDistribution::Uniform);
        assert_eq!(model.seed, 42);
    }

    #[test]
    fn test_builders() {
        let model = ErrorModel::default()
            .with_seed(123)
            .with_distribution(ErrorDistribution::Stratified);
        assert_eq!(model.seed, 123);
        assert_eq!(model.distribution, ErrorDistribution::Stratified);
    }

    #[test]
    fn test_sample_follows_distribution() {
        let adc = AdcModel::new(1.0, 4);
        let strata = adc.error_strata();

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let reversed = ErrorModel::new(ErrorDistribution::StratifiedReversed).sample(&adc, &mut rng);
        for (i, e) in reversed.iter().enumerate() {
            let (lo, hi) = strata[3 - i];
            assert!((lo..hi).contains(e));
        }
    }

    #[test]
    fn test_distribution_serde_names() {
        let json = serde_json::to_string(&ErrorDistribution::StratifiedReversed).unwrap();
        assert_eq!(json, "\"stratified-reversed\"");

        let parsed: ErrorDistribution = serde_json::from_str("\"stratified\"").unwrap();
        assert_eq!(parsed, ErrorDistribution::Stratified);
    }
}
