//! Commande de génération d'erreurs

use crate::display::curve::print_errors;
use crate::OutputFormat;
use adc_core::AdcModel;
use adc_simulation::{ErrorDistribution, ErrorModel};
use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn run(
    model: AdcModel,
    distribution: ErrorDistribution,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    tracing::info!(
        bits = model.bits,
        upper = model.upper_error_bound(),
        ?distribution,
        "génération des erreurs"
    );

    let errors = match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            ErrorModel::new(distribution).with_seed(seed).sample(&model, &mut rng)
        }
        None => match distribution {
            ErrorDistribution::Uniform => model.errors(),
            ErrorDistribution::Stratified => model.errors2(),
            ErrorDistribution::StratifiedReversed => model.errors2_inv(),
        },
    };

    print_errors(&errors, &format)
}
