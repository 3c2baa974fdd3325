//! Sous-commandes de la CLI

pub mod errors;
pub mod ideal;
pub mod real;
pub mod simulate;
