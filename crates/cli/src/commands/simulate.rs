//! Commande de simulation

use crate::create_progress_bar;
use crate::display::stats::display_stats;
use adc_core::AdcModel;
use adc_simulation::{
    ConverterSimulator, ErrorDistribution, ErrorModel, MetricsCollector, SimulationConfig,
};
use anyhow::Result;

pub fn run(
    model: AdcModel,
    distribution: ErrorDistribution,
    iterations: usize,
    seed: u64,
    json: bool,
) -> Result<()> {
    // 1. Configurer le simulateur
    let config = SimulationConfig {
        reference_voltage: model.reference_voltage,
        bits: model.bits,
        error_model: ErrorModel::new(distribution).with_seed(seed),
    };
    let mut simulator = ConverterSimulator::new(config);

    // En mode JSON, stdout ne contient que le document
    if !json {
        println!("{}", banner(simulator.config()));
    }

    // 2. Simuler
    let pb = create_progress_bar(iterations as u64, "Simulation en cours...");
    let collector = adc_core::log_operation!("simulation", {
        collect(&mut simulator, iterations, || pb.inc(1))?
    });
    pb.finish_with_message(String::from("Simulation terminée"));

    // 3. Afficher les résultats
    if json {
        println!("{}", collector.to_json()?);
    } else {
        display_stats(&collector);
        println!("\n✅ Simulation terminée!");
    }

    Ok(())
}

/// Ligne d'en-tête décrivant la simulation
fn banner(config: &SimulationConfig) -> String {
    format!(
        "🔬 Simulation d'un CAN {} bits (u0 = {}, {:?}, seed {})",
        config.bits,
        config.reference_voltage,
        config.error_model.distribution,
        config.error_model.seed
    )
}

/// Exécute `iterations` simulations et collecte leurs métriques
fn collect(
    simulator: &mut ConverterSimulator,
    iterations: usize,
    mut on_run: impl FnMut(),
) -> Result<MetricsCollector> {
    let mut collector = MetricsCollector::new();
    for _ in 0..iterations {
        let run = simulator.run()?;
        collector.add(run.metrics);
        on_run();
    }
    Ok(collector)
}
