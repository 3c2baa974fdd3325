//! CLI pour le modèle de CAN

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

mod commands;
mod config;
mod display;

use commands::{errors, ideal, real, simulate};
use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "adc")]
#[command(about = "Caractéristiques de transfert d'un CAN à n bits", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fichier de configuration (extension facultative)
    #[arg(short, long, default_value = "adc", global = true)]
    config: String,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Paramètres du convertisseur, prioritaires sur le fichier de configuration
#[derive(clap::Args, Clone)]
pub struct ModelArgs {
    /// Nombre de bits
    #[arg(short = 'n', long)]
    bits: Option<u32>,

    /// Tension de référence
    #[arg(short, long)]
    u0: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calcule la caractéristique idéale
    Ideal {
        #[command(flatten)]
        model: ModelArgs,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Calcule la caractéristique réelle pour un vecteur d'erreurs
    Real {
        #[command(flatten)]
        model: ModelArgs,

        /// Erreurs par bit, séparées par des virgules (bit 0 en premier)
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        errors: Vec<f64>,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Génère un vecteur d'erreurs
    Errors {
        #[command(flatten)]
        model: ModelArgs,

        /// Loi de tirage
        #[arg(short, long, value_enum)]
        distribution: Option<DistributionArg>,

        /// Seed pour reproductibilité
        #[arg(short, long)]
        seed: Option<u64>,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Simule des convertisseurs et agrège leurs métriques de linéarité
    Simulate {
        #[command(flatten)]
        model: ModelArgs,

        /// Loi de tirage
        #[arg(short, long, value_enum)]
        distribution: Option<DistributionArg>,

        /// Nombre d'itérations
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Seed pour reproductibilité
        #[arg(short, long)]
        seed: Option<u64>,

        /// Exporter les métriques en JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::ValueEnum, Clone)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum DistributionArg {
    Uniform,
    Stratified,
    StratifiedReversed,
}

impl From<DistributionArg> for adc_simulation::ErrorDistribution {
    fn from(arg: DistributionArg) -> Self {
        match arg {
            DistributionArg::Uniform => Self::Uniform,
            DistributionArg::Stratified => Self::Stratified,
            DistributionArg::StratifiedReversed => Self::StratifiedReversed,
        }
    }
}

impl ModelArgs {
    /// Applique les valeurs passées en ligne de commande sur la configuration
    pub fn resolve(&self, config: &AppConfig) -> adc_core::AdcModel {
        adc_core::AdcModel::new(
            self.u0.unwrap_or(config.model.reference_voltage),
            self.bits.unwrap_or(config.model.bits),
        )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match AppConfig::load_from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Erreur de chargement de la configuration: {}. Utilisation des valeurs par défaut.",
                e
            );
            AppConfig::default()
        }
    };

    let level = log_level(cli.verbose, &config);
    if std::env::var_os("RUST_LOG").is_some() {
        adc_core::init_logging();
    } else {
        adc_core::init_logging_with(level, &config.logging.format);
    }

    match cli.command {
        Commands::Ideal { model, format } => {
            ideal::run(model.resolve(&config), format)?;
        }
        Commands::Real {
            model,
            errors,
            format,
        } => {
            real::run(model.resolve(&config), errors, format)?;
        }
        Commands::Errors {
            model,
            distribution,
            seed,
            format,
        } => {
            let distribution = distribution
                .map(Into::into)
                .unwrap_or(config.simulation.distribution);
            errors::run(model.resolve(&config), distribution, seed, format)?;
        }
        Commands::Simulate {
            model,
            distribution,
            iterations,
            seed,
            json,
        } => {
            let distribution = distribution
                .map(Into::into)
                .unwrap_or(config.simulation.distribution);
            simulate::run(
                model.resolve(&config),
                distribution,
                iterations.unwrap_or(config.simulation.iterations),
                seed.unwrap_or(config.simulation.seed),
                json,
            )?;
        }
    }

    Ok(())
}

/// Niveau de log : `-v` l'emporte sur `logging.level`
fn log_level(verbose: u8, config: &AppConfig) -> &str {
    match verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message(msg.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_model(bits: u32, reference_voltage: f64) -> AppConfig {
        let mut config = AppConfig::default();
        config.model.bits = bits;
        config.model.reference_voltage = reference_voltage;
        config
    }

    #[test]
    fn test_resolve_without_flags_uses_config() {
        let config = config_with_model(12, 3.3);
        let args = ModelArgs { bits: None, u0: None };

        let model = args.resolve(&config);
        assert_eq!(model.bits, 12);
        assert_eq!(model.reference_voltage, 3.3);
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let config = config_with_model(12, 3.3);

        let model = ModelArgs { bits: Some(4), u0: None }.resolve(&config);
        assert_eq!(model.bits, 4);
        assert_eq!(model.reference_voltage, 3.3);

        let model = ModelArgs { bits: Some(4), u0: Some(5.0) }.resolve(&config);
        assert_eq!(model.bits, 4);
        assert_eq!(model.reference_voltage, 5.0);
    }

    #[test]
    fn test_parsed_flags_reach_model() {
        let cli = Cli::try_parse_from(["adc", "ideal", "-n", "3", "--u0", "2.5"]).unwrap();
        let Commands::Ideal { model, .. } = cli.command else {
            panic!("sous-commande inattendue");
        };

        let model = model.resolve(&config_with_model(12, 1.0));
        assert_eq!(model.bits, 3);
        assert_eq!(model.reference_voltage, 2.5);
    }

    #[test]
    fn test_log_level_verbosity_overrides_config() {
        let mut config = AppConfig::default();
        config.logging.level = "error".to_string();

        assert_eq!(log_level(0, &config), "error");
        assert_eq!(log_level(1, &config), "info");
        assert_eq!(log_level(2, &config), "debug");
        assert_eq!(log_level(5, &config), "trace");
    }
}
