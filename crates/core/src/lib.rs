//! ADC Core Library
//!
//! Caractéristiques de transfert idéale et réelle d'un convertisseur
//! analogique-numérique à n bits, et génération des erreurs par bit.

pub mod error;
pub mod logging;
pub mod model;
pub mod sampling;
pub mod term;

// Réexportations principales
pub use error::{AdcError, Result};
pub use logging::{init_logging, init_logging_with};
// La macro log_operation est automatiquement exportée à la racine du crate
pub use model::AdcModel;
pub use sampling::UniformSource;
pub use term::{BinaryWeight, IdealTerm, PerturbedWeight, RealTerm};
