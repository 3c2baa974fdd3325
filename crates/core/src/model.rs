//! Modèle de convertisseur analogique-numérique à n bits
//!
//! Caractéristique idéale :
//! `u(a) = SUM{i = [0; n-1]}(a_i * 2^-(n-1-i))`
//!
//! Caractéristique réelle :
//! `u(a) = u0 * SUM{j = [0; n-1]}(a_j * 2^-((n-1-j) + d_j))`
//!
//! où `a` parcourt `[0; 2^n - 1]`, `a_i` est la valeur du bit `i` de `a`
//! et `d_j` l'erreur associée au bit `j`. La caractéristique idéale n'est
//! pas multipliée par `u0`, la réelle l'est.

use crate::error::{AdcError, Result};
use crate::sampling::UniformSource;
use crate::term::{BinaryWeight, IdealTerm, PerturbedWeight, RealTerm};
use serde::{Deserialize, Serialize};

/// Modèle de CAN : tension de référence et nombre de bits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdcModel {
    /// Tension de référence `u0`
    pub reference_voltage: f64,

    /// Nombre de bits `n`
    ///
    /// Les courbes ont `2^n` points : `n` doit rester petit (≤ 30 en pratique)
    /// et strictement inférieur à `usize::BITS`.
    pub bits: u32,
}

impl AdcModel {
    /// Crée un modèle. Aucune validation n'est faite sur `bits`.
    pub fn new(reference_voltage: f64, bits: u32) -> Self {
        Self {
            reference_voltage,
            bits,
        }
    }

    /// Nombre de codes `2^n`
    ///
    /// Le décalage déborde si `bits >= usize::BITS` (panique en debug).
    pub fn code_count(&self) -> usize {
        1usize << self.bits
    }

    /// Caractéristique idéale pour tous les codes de `0` à `2^n - 1`
    pub fn ideal_characteristic(&self) -> Vec<f64> {
        self.ideal_characteristic_with(&BinaryWeight { bits: self.bits })
    }

    /// Caractéristique idéale avec une formule de terme personnalisée
    pub fn ideal_characteristic_with<T: IdealTerm + ?Sized>(&self, term: &T) -> Vec<f64> {
        let steps = self.code_count();
        tracing::debug!(bits = self.bits, steps, "calcul de la caractéristique idéale");

        (0..steps as u64)
            .map(|a| self.ideal_characteristic_step_with(a, term))
            .collect()
    }

    /// Caractéristique idéale pour un seul code
    pub fn ideal_characteristic_step(&self, a: u64) -> f64 {
        self.ideal_characteristic_step_with(a, &BinaryWeight { bits: self.bits })
    }

    /// Caractéristique idéale pour un seul code, terme personnalisé
    ///
    /// Le terme reçoit `(a_i, i)` pour chaque bit `i` du code.
    pub fn ideal_characteristic_step_with<T: IdealTerm + ?Sized>(&self, a: u64, term: &T) -> f64 {
        let mut sum = 0.0;
        for i in 0..self.bits as usize {
            sum += term.term(bit(a, i), i);
        }
        sum
    }

    /// Caractéristique réelle pour tous les codes
    ///
    /// Échoue si `errors` ne contient pas exactement `n` valeurs.
    pub fn real_characteristic(&self, errors: &[f64]) -> Result<Vec<f64>> {
        self.real_characteristic_with(errors, &PerturbedWeight { bits: self.bits })
    }

    /// Caractéristique réelle avec une formule de terme personnalisée
    pub fn real_characteristic_with<T: RealTerm + ?Sized>(
        &self,
        errors: &[f64],
        term: &T,
    ) -> Result<Vec<f64>> {
        self.check_errors(errors)?;

        let steps = self.code_count();
        tracing::debug!(bits = self.bits, steps, "calcul de la caractéristique réelle");

        Ok((0..steps as u64)
            .map(|a| self.real_sum(a, errors, term))
            .collect())
    }

    /// Caractéristique réelle pour un seul code
    pub fn real_characteristic_step(&self, a: u64, errors: &[f64]) -> Result<f64> {
        self.real_characteristic_step_with(a, errors, &PerturbedWeight { bits: self.bits })
    }

    /// Caractéristique réelle pour un seul code, terme personnalisé
    ///
    /// Le terme reçoit `(a_j, d_j, j)` pour chaque bit `j` du code.
    pub fn real_characteristic_step_with<T: RealTerm + ?Sized>(
        &self,
        a: u64,
        errors: &[f64],
        term: &T,
    ) -> Result<f64> {
        self.check_errors(errors)?;
        Ok(self.real_sum(a, errors, term))
    }

    /// `errors.len() == n` déjà vérifié
    fn real_sum<T: RealTerm + ?Sized>(&self, a: u64, errors: &[f64], term: &T) -> f64 {
        let sum: f64 = errors
            .iter()
            .enumerate()
            .map(|(j, &error)| term.term(bit(a, j), error, j))
            .sum();
        self.reference_voltage * sum
    }

    fn check_errors(&self, errors: &[f64]) -> Result<()> {
        let expected = self.bits as usize;
        if errors.len() != expected {
            tracing::warn!(expected, actual = errors.len(), "nombre d'erreurs invalide");
            return Err(AdcError::ErrorCountMismatch {
                expected,
                actual: errors.len(),
            });
        }
        Ok(())
    }

    /// Borne supérieure des erreurs : `0.5 * u0 / n`
    pub fn upper_error_bound(&self) -> f64 {
        0.5 * self.reference_voltage / f64::from(self.bits)
    }

    /// Découpe `[-upper; upper]` en `n` sous-intervalles contigus de même largeur
    pub fn error_strata(&self) -> Vec<(f64, f64)> {
        let upper = self.upper_error_bound();
        let lower = -upper;
        let width = (upper - lower) / f64::from(self.bits);

        (0..self.bits)
            .map(|i| {
                let step_lower = lower + width * f64::from(i);
                (step_lower, step_lower + width)
            })
            .collect()
    }

    /// Erreurs i.i.d. uniformes sur `[-upper; upper]`
    pub fn errors(&self) -> Vec<f64> {
        self.errors_with(&mut rand::thread_rng())
    }

    /// Comme [`errors`](Self::errors), avec une source uniforme fournie par l'appelant
    pub fn errors_with<S: UniformSource + ?Sized>(&self, source: &mut S) -> Vec<f64> {
        let upper = self.upper_error_bound();
        let mut result = vec![0.0; self.bits as usize];
        source.fill_uniform(-upper, upper, &mut result);
        tracing::debug!(bits = self.bits, upper, "erreurs uniformes générées");
        result
    }

    /// Erreurs stratifiées : l'erreur `i` est tirée dans le sous-intervalle `i`
    pub fn errors2(&self) -> Vec<f64> {
        self.errors2_with(&mut rand::thread_rng())
    }

    /// Comme [`errors2`](Self::errors2), avec une source uniforme fournie par l'appelant
    pub fn errors2_with<S: UniformSource + ?Sized>(&self, source: &mut S) -> Vec<f64> {
        self.error_strata()
            .into_iter()
            .map(|(lo, hi)| source.uniform(lo, hi))
            .collect()
    }

    /// Erreurs stratifiées inversées : le tirage du sous-intervalle `i`
    /// va à l'indice `n - 1 - i`
    pub fn errors2_inv(&self) -> Vec<f64> {
        self.errors2_inv_with(&mut rand::thread_rng())
    }

    /// Comme [`errors2_inv`](Self::errors2_inv), avec une source uniforme fournie par l'appelant
    pub fn errors2_inv_with<S: UniformSource + ?Sized>(&self, source: &mut S) -> Vec<f64> {
        let mut result = self.errors2_with(source);
        result.reverse();
        result
    }
}

/// Valeur du bit `i` de `a`, en flottant
fn bit(a: u64, i: usize) -> f64 {
    match a.checked_shr(i as u32) {
        Some(shifted) => (shifted & 0x1) as f64,
        None => 0.0,
    }
}
