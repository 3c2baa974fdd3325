//! Commande de caractéristique réelle

use crate::display::curve::print_curve;
use crate::OutputFormat;
use adc_core::AdcModel;
use anyhow::{Context, Result};

pub fn run(model: AdcModel, errors: Vec<f64>, format: OutputFormat) -> Result<()> {
    tracing::info!(bits = model.bits, u0 = model.reference_voltage, "caractéristique réelle");

    let curve = model
        .real_characteristic(&errors)
        .context("Calcul de la caractéristique réelle impossible")?;
    print_curve(&curve, model.bits, &format)
}
