//! Termes de sommation par bit
//!
//! Chaque caractéristique est une somme de termes, un par bit du code.
//! Les stratégies ci-dessous permettent de remplacer la formule d'un terme
//! sans toucher au parcours des codes.

/// Terme de la caractéristique idéale : `(valeur du bit, position du bit)`
pub trait IdealTerm {
    fn term(&self, bit: f64, index: usize) -> f64;
}

/// Terme de la caractéristique réelle : `(valeur du bit, erreur, position du bit)`
pub trait RealTerm {
    fn term(&self, bit: f64, error: f64, index: usize) -> f64;
}

impl<F> IdealTerm for F
where
    F: Fn(f64, usize) -> f64,
{
    fn term(&self, bit: f64, index: usize) -> f64 {
        self(bit, index)
    }
}

impl<F> RealTerm for F
where
    F: Fn(f64, f64, usize) -> f64,
{
    fn term(&self, bit: f64, error: f64, index: usize) -> f64 {
        self(bit, error, index)
    }
}

/// Poids binaire nominal : `bit * 2^-(n-1-index)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryWeight {
    pub bits: u32,
}

impl IdealTerm for BinaryWeight {
    fn term(&self, bit: f64, index: usize) -> f64 {
        bit * 2f64.powi(-(exponent(self.bits, index) as i32))
    }
}

/// Poids binaire dont l'exposant est décalé par l'erreur du bit :
/// `bit * 2^-((n-1-index) + error)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerturbedWeight {
    pub bits: u32,
}

impl RealTerm for PerturbedWeight {
    fn term(&self, bit: f64, error: f64, index: usize) -> f64 {
        bit * 2f64.powf(-(exponent(self.bits, index) + error))
    }
}

/// Exposant nominal du bit `index` pour un code de `bits` bits
fn exponent(bits: u32, index: usize) -> f64 {
    f64::from(bits) - 1.0 - index as f64
}
