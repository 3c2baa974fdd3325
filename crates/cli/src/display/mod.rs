//! Affichage des résultats

pub mod curve;
pub mod stats;
