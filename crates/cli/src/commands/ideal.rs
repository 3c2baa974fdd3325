//! Commande de caractéristique idéale

use crate::display::curve::print_curve;
use crate::OutputFormat;
use adc_core::AdcModel;
use anyhow::Result;

pub fn run(model: AdcModel, format: OutputFormat) -> Result<()> {
    tracing::info!(bits = model.bits, "caractéristique idéale");

    let curve = model.ideal_characteristic();
    print_curve(&curve, model.bits, &format)
}
