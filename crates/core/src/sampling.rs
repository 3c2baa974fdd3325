//! Source de nombres aléatoires uniformes continus

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Échantillonneur uniforme continu sur `[lo, hi)`
pub trait UniformSource {
    /// Tire une valeur dans `[lo, hi)`
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Remplit `out` avec des tirages i.i.d. dans `[lo, hi)`
    fn fill_uniform(&mut self, lo: f64, hi: f64, out: &mut [f64]);
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        match interval(lo, hi) {
            Some(dist) => dist.sample(self),
            None => lo,
        }
    }

    fn fill_uniform(&mut self, lo: f64, hi: f64, out: &mut [f64]) {
        match interval(lo, hi) {
            Some(dist) => {
                for slot in out.iter_mut() {
                    *slot = dist.sample(self);
                }
            }
            None => out.fill(lo),
        }
    }
}

/// Construit la distribution, bornes dans n'importe quel ordre.
/// `None` si l'intervalle est vide ou non fini.
fn interval(lo: f64, hi: f64) -> Option<Uniform<f64>> {
    let (low, high) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if low < high && (high - low).is_finite() {
        Some(Uniform::new(low, high))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sample_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = rng.uniform(-0.25, 0.75);
            assert!((-0.25..0.75).contains(&v));
        }
    }

    #[test]
    fn test_fill_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut out = [0.0; 64];
        rng.fill_uniform(1.0, 2.0, &mut out);
        assert!(out.iter().all(|v| (1.0..2.0).contains(v)));
    }

    #[test]
    fn test_degenerate_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(rng.uniform(0.0, 0.0), 0.0);

        let mut out = [1.0; 4];
        rng.fill_uniform(0.0, 0.0, &mut out);
        assert_eq!(out, [0.0; 4]);
    }

    #[test]
    fn test_reversed_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let v = rng.uniform(1.0, -1.0);
        assert!((-1.0..1.0).contains(&v));
    }
}
