//! Affichage des statistiques de simulation

use adc_simulation::MetricsCollector;
use console::style;

/// Affiche les métriques agrégées
pub fn display_stats(collector: &MetricsCollector) {
    if collector.is_empty() {
        println!("Aucune simulation à afficher");
        return;
    }

    println!("\n📊 Moyenne sur {} simulations:", collector.len());
    println!("{}", collector.average().format_table());

    println!("\n📈 Statistiques agrégées:");
    println!("   Minimum:");
    println!("{}", collector.min().format_table());

    println!("\n   Maximum:");
    println!("{}", collector.max().format_table());

    let ratio = 100.0 * collector.monotonic_ratio();
    let line = format!("Caractéristiques monotones: {:.1}%", ratio);
    if ratio < 100.0 {
        println!("\n{}", style(line).yellow());
    } else {
        println!("\n{}", style(line).green());
    }
}
