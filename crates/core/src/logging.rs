//! Système de logging pour ADC Core

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging depuis `RUST_LOG`
pub fn init_logging() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
}

/// Initialise le logging avec un niveau et un format explicites
///
/// `format` accepte `json` ou `compact` (valeur par défaut).
pub fn init_logging_with(level: &str, format: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    // try_init : un subscriber global peut déjà être installé (tests, hôte)
    let _ = match format.to_lowercase().as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(EnvFilter::new(filter))
            .try_init(),
        _ => fmt()
            .compact()
            .with_target(false)
            .with_env_filter(EnvFilter::new(filter))
            .try_init(),
    };
}

/// Macro pour le logging des opérations longues
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::info!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::info!("Fin de l'opération: {}", $name);
        result
    }};
}
