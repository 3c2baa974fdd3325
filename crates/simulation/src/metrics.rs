//! Métriques de linéarité

use adc_core::AdcModel;
use serde::{Deserialize, Serialize};

/// Écarts entre la caractéristique réelle et la caractéristique idéale
/// mise à l'échelle par `u0`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearityMetrics {
    /// Nombre de codes comparés
    pub codes: usize,

    /// Quantum idéal `u0 * 2^-(n-1)`
    pub lsb: f64,

    /// Écart absolu maximal (même unité que `u0`)
    pub max_deviation: f64,

    /// Non-linéarité intégrale maximale, en LSB
    pub max_inl: f64,

    /// Non-linéarité différentielle maximale, en LSB
    pub max_dnl: f64,

    /// Pas dont le sens est opposé à celui de la caractéristique idéale
    pub non_monotonic_steps: usize,

    /// Écart au code pleine échelle
    pub gain_error: f64,
}

impl LinearityMetrics {
    /// Crée de nouvelles métriques vides
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `real` à `u0 * ideal`
    ///
    /// Les deux courbes doivent être indexées par code ; seule la partie
    /// commune est comparée.
    pub fn from_curves(model: &AdcModel, ideal: &[f64], real: &[f64]) -> Self {
        let u0 = model.reference_voltage;
        let codes = ideal.len().min(real.len());
        let lsb = if model.bits == 0 {
            0.0
        } else {
            (u0 * 2f64.powi(1 - model.bits as i32)).abs()
        };

        let deviation = |a: usize| real[a] - u0 * ideal[a];

        let max_deviation = (0..codes).map(|a| deviation(a).abs()).fold(0.0, f64::max);

        let mut max_dnl: f64 = 0.0;
        let mut non_monotonic_steps = 0;
        for a in 1..codes {
            let real_step = real[a] - real[a - 1];
            let ideal_step = u0 * (ideal[a] - ideal[a - 1]);
            if real_step * ideal_step < 0.0 {
                non_monotonic_steps += 1;
            }
            if lsb > 0.0 {
                max_dnl = max_dnl.max(((real_step - ideal_step) / lsb).abs());
            }
        }

        let max_inl = if lsb > 0.0 { max_deviation / lsb } else { 0.0 };
        let gain_error = if codes > 0 { deviation(codes - 1) } else { 0.0 };

        Self {
            codes,
            lsb,
            max_deviation,
            max_inl,
            max_dnl,
            non_monotonic_steps,
            gain_error,
        }
    }

    /// Vrai si la caractéristique réelle garde le sens de l'idéale
    pub fn is_monotonic(&self) -> bool {
        self.non_monotonic_steps == 0
    }

    /// Formate les métriques en tableau
    pub fn format_table(&self) -> String {
        format!(
            "┌────────────────────────────────────────┐\n\
             │ Métriques de linéarité                 │\n\
             ├────────────────────────────────────────┤\n\
             │ Codes             : {:>10}         │\n\
             │ LSB               : {:>10.6}         │\n\
             │ Écart max         : {:>10.6}         │\n\
             │ INL max (LSB)     : {:>10.4}         │\n\
             │ DNL max (LSB)     : {:>10.4}         │\n\
             │ Pas non monotones : {:>10}         │\n\
             │ Erreur de gain    : {:>10.6}         │\n\
             └────────────────────────────────────────┘",
            self.codes,
            self.lsb,
            self.max_deviation,
            self.max_inl,
            self.max_dnl,
            self.non_monotonic_steps,
            self.gain_error
        )
    }
}

/// Collecteur de métriques pour plusieurs simulations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsCollector {
    metrics: Vec<LinearityMetrics>,
}

impl MetricsCollector {
    /// Crée un nouveau collecteur
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute des métriques
    pub fn add(&mut self, metrics: LinearityMetrics) {
        self.metrics.push(metrics);
    }

    /// Retourne les métriques moyennes
    ///
    /// Les champs entiers (`codes`, `non_monotonic_steps`) sont des moyennes
    /// tronquées ; voir [`monotonic_ratio`](Self::monotonic_ratio) pour la
    /// part de simulations monotones.
    pub fn average(&self) -> LinearityMetrics {
        if self.metrics.is_empty() {
            return LinearityMetrics::new();
        }

        let n = self.metrics.len();
        let mean = |f: fn(&LinearityMetrics) -> f64| self.metrics.iter().map(f).sum::<f64>() / n as f64;

        LinearityMetrics {
            codes: self.metrics.iter().map(|m| m.codes).sum::<usize>() / n,
            lsb: mean(|m| m.lsb),
            max_deviation: mean(|m| m.max_deviation),
            max_inl: mean(|m| m.max_inl),
            max_dnl: mean(|m| m.max_dnl),
            non_monotonic_steps: self.metrics.iter().map(|m| m.non_monotonic_steps).sum::<usize>() / n,
            gain_error: mean(|m| m.gain_error),
        }
    }

    /// Retourne les métriques minimales
    pub fn min(&self) -> LinearityMetrics {
        self.reduce(f64::min, usize::min)
    }

    /// Retourne les métriques maximales
    pub fn max(&self) -> LinearityMetrics {
        self.reduce(f64::max, usize::max)
    }

    fn reduce(&self, pick: fn(f64, f64) -> f64, pick_count: fn(usize, usize) -> usize) -> LinearityMetrics {
        let Some(first) = self.metrics.first() else {
            return LinearityMetrics::new();
        };

        self.metrics.iter().skip(1).fold(first.clone(), |acc, m| LinearityMetrics {
            codes: pick_count(acc.codes, m.codes),
            lsb: pick(acc.lsb, m.lsb),
            max_deviation: pick(acc.max_deviation, m.max_deviation),
            max_inl: pick(acc.max_inl, m.max_inl),
            max_dnl: pick(acc.max_dnl, m.max_dnl),
            non_monotonic_steps: pick_count(acc.non_monotonic_steps, m.non_monotonic_steps),
            gain_error: pick(acc.gain_error, m.gain_error),
        })
    }

    /// Part des simulations restées monotones
    pub fn monotonic_ratio(&self) -> f64 {
        if self.metrics.is_empty() {
            return 0.0;
        }
        self.metrics.iter().filter(|m| m.is_monotonic()).count() as f64 / self.metrics.len() as f64
    }

    /// Exporte les métriques collectées en JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.metrics)
    }

    /// Nombre de simulations
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Vérifie si vide
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Vide le collecteur
    pub fn clear(&mut self) {
        self.metrics.clear();
    }
}
