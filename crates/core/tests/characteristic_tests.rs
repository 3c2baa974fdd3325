//! Tests d'intégration pour les caractéristiques du CAN

use adc_core::{AdcError, AdcModel};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_single_bit_regression() {
    // n = 1 : le bit 0 a j = 0, donc un poids de 2^0
    let model = AdcModel::new(1.0, 1);
    assert_eq!(model.ideal_characteristic(), vec![0.0, 1.0]);
}

#[test]
fn test_zero_code_maps_to_zero() {
    for n in 0..12 {
        let model = AdcModel::new(2.5, n);
        assert_eq!(model.ideal_characteristic()[0], 0.0, "n = {}", n);
    }
}

#[test]
fn test_full_scale_code_sums_all_weights() {
    for n in 1..16u32 {
        let model = AdcModel::new(1.0, n);
        let curve = model.ideal_characteristic();
        let expected: f64 = (0..n).map(|j| 2f64.powi(-(j as i32))).sum();
        assert_eq!(curve[(1usize << n) - 1], expected, "n = {}", n);
    }
}

#[test]
fn test_curve_lengths() {
    for n in 0..14u32 {
        let model = AdcModel::new(1.0, n);
        let errors = model.errors();
        assert_eq!(model.ideal_characteristic().len(), 1 << n);
        assert_eq!(model.real_characteristic(&errors).unwrap().len(), 1 << n);
    }
}

#[test]
fn test_length_mismatch_is_reported() {
    let model = AdcModel::new(1.0, 8);

    for len in [0usize, 7, 9, 16] {
        let errors = vec![0.0; len];
        match model.real_characteristic(&errors) {
            Err(AdcError::ErrorCountMismatch { expected, actual }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, len);
            }
            Ok(_) => panic!("longueur {} acceptée", len),
        }
    }
}

#[test]
fn test_ideal_is_monotonic() {
    let model = AdcModel::new(1.0, 10);
    let curve = model.ideal_characteristic();
    assert!(curve.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_stratified_inverse_matches_reversed_strata() {
    let model = AdcModel::new(5.0, 8);
    let strata = model.error_strata();

    for seed in 0..32 {
        let forward = model.errors2_with(&mut ChaCha8Rng::seed_from_u64(seed));
        let inverse = model.errors2_inv_with(&mut ChaCha8Rng::seed_from_u64(seed + 1000));

        for i in 0..8 {
            let (lo, hi) = strata[8 - 1 - i];
            assert!((lo..hi).contains(&inverse[i]));
            assert!((lo..hi).contains(&forward[8 - 1 - i]));
        }
    }
}

#[test]
fn test_generators_with_thread_rng_stay_in_range() {
    let model = AdcModel::new(3.3, 6);
    let upper = model.upper_error_bound();

    for errors in [model.errors(), model.errors2(), model.errors2_inv()] {
        assert_eq!(errors.len(), 6);
        assert!(errors.iter().all(|e| (-upper..upper).contains(e)));
    }
}

proptest! {
    #[test]
    fn prop_zero_errors_give_scaled_ideal(u0 in -10.0f64..10.0, n in 0u32..10) {
        let model = AdcModel::new(u0, n);
        let real = model.real_characteristic(&vec![0.0; n as usize]).unwrap();

        for (a, value) in real.iter().enumerate() {
            let expected = u0 * model.ideal_characteristic_step(a as u64);
            prop_assert!((value - expected).abs() <= 1e-12 * (1.0 + expected.abs()));
        }
    }

    #[test]
    fn prop_step_matches_curve(u0 in 0.1f64..5.0, n in 1u32..8, seed in any::<u64>()) {
        let model = AdcModel::new(u0, n);
        let errors = model.errors_with(&mut ChaCha8Rng::seed_from_u64(seed));
        let curve = model.real_characteristic(&errors).unwrap();

        for (a, value) in curve.iter().enumerate() {
            prop_assert_eq!(*value, model.real_characteristic_step(a as u64, &errors).unwrap());
        }
    }
}
