//! Types d'erreurs pour le modèle de CAN

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdcError {
    #[error("Le nombre d'erreurs ne correspond pas au nombre de bits {expected} (reçu {actual})")]
    ErrorCountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, AdcError>;
