use super::{
    descriptor::RingDescriptor,
    element::RingElement,
    errors::{RingError, RingResult},
};
use crate::math::sampling::{
    gaussian_coefficients, ternary_coefficients, uniform_coefficients,
};
use rand::Rng;
use std::sync::Arc;
use tracing::instrument;

/// Draws an element of `R_Q` with every coefficient uniform over `(-Q/2, Q/2]`.
///
/// Fails with [`RingError::ModulusRequired`] on a ring without modulus.
#[instrument(level = "debug", skip_all, fields(degree = ring.degree()))]
pub fn sample<R: Rng + ?Sized>(
    ring: &Arc<RingDescriptor>,
    rng: &mut R,
) -> RingResult<RingElement> {
    let interval = ring.residue_interval().ok_or(RingError::ModulusRequired)?;
    let coeffs = uniform_coefficients(
        ring.degree(),
        interval.low(),
        interval.high(),
        rng,
    );
    RingElement::new(coeffs, Arc::clone(ring))
}

/// Draws a ternary element with exactly `hamming_weight` non-zero
/// coefficients, each `1` or `-1` before reduction.
#[instrument(level = "debug", skip(ring, rng), fields(degree = ring.degree()))]
pub fn sample_ternary<R: Rng + ?Sized>(
    ring: &Arc<RingDescriptor>,
    hamming_weight: usize,
    rng: &mut R,
) -> RingResult<RingElement> {
    let degree = ring.degree();
    if hamming_weight > degree {
        return Err(RingError::InvalidHammingWeight {
            weight: hamming_weight,
            degree,
        });
    }
    let coeffs = ternary_coefficients(degree, hamming_weight, rng);
    RingElement::new(coeffs, Arc::clone(ring))
}

/// Draws an element with rounded `N(0, std_dev^2)` coefficients.
#[instrument(level = "debug", skip(ring, rng), fields(degree = ring.degree()))]
pub fn sample_gaussian<R: Rng + ?Sized>(
    ring: &Arc<RingDescriptor>,
    std_dev: f64,
    rng: &mut R,
) -> RingResult<RingElement> {
    if !(std_dev.is_finite() && std_dev > 0.0) {
        return Err(RingError::InvalidStdDev { std_dev });
    }
    let coeffs = gaussian_coefficients(ring.degree(), std_dev, rng);
    RingElement::new(coeffs, Arc::clone(ring))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn ring(degree: usize, modulus: Option<u64>) -> Arc<RingDescriptor> {
        Arc::new(RingDescriptor::new(degree, modulus).unwrap())
    }

    #[test]
    fn uniform_requires_modulus() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(
            sample(&ring(8, None), &mut rng),
            Err(RingError::ModulusRequired)
        );
    }

    #[test]
    fn uniform_samples_stay_in_interval() {
        let ring = ring(16, Some(8));
        let interval = *ring.residue_interval().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..50 {
            let element = sample(&ring, &mut rng).unwrap();
            assert_eq!(element.coefficients().len(), 16);
            assert!(element.coefficients().iter().all(|c| interval.contains(c)));
        }
    }

    #[test]
    fn uniform_hits_both_interval_ends() {
        let ring = ring(64, Some(5));
        let mut rng = ChaCha20Rng::seed_from_u64(77);
        let mut seen = Vec::new();
        for _ in 0..20 {
            seen.extend(sample(&ring, &mut rng).unwrap().to_i64_coeffs().unwrap());
        }
        assert!(seen.contains(&-2));
        assert!(seen.contains(&2));
    }

    #[test]
    fn seeded_sampling_is_deterministic() {
        let ring = ring(32, Some(3329));
        let a = sample(&ring, &mut ChaCha20Rng::seed_from_u64(9)).unwrap();
        let b = sample(&ring, &mut ChaCha20Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ternary_weight_is_exact() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let element = sample_ternary(&ring(64, Some(17)), 20, &mut rng).unwrap();
        let coeffs = element.to_i64_coeffs().unwrap();
        assert_eq!(coeffs.iter().filter(|&&c| c != 0).count(), 20);
        assert!(coeffs.iter().all(|&c| (-1..=1).contains(&c)));
    }

    #[test]
    fn ternary_over_modulus_two_centers_minus_one() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let element = sample_ternary(&ring(16, Some(2)), 16, &mut rng).unwrap();
        assert!(element.to_i64_coeffs().unwrap().iter().all(|&c| c == 1));
    }

    #[test]
    fn ternary_rejects_oversized_weight() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        assert_eq!(
            sample_ternary(&ring(8, None), 9, &mut rng),
            Err(RingError::InvalidHammingWeight {
                weight: 9,
                degree: 8
            })
        );
    }

    #[test]
    fn gaussian_works_without_modulus() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let element = sample_gaussian(&ring(256, None), 3.2, &mut rng).unwrap();
        let coeffs = element.to_i64_coeffs().unwrap();
        assert_eq!(coeffs.len(), 256);
        // 20 is more than six standard deviations out.
        assert!(coeffs.iter().all(|&c| c.abs() <= 20));
    }

    #[test]
    fn wide_gaussian_is_centered_into_small_modulus() {
        let ring = ring(128, Some(7));
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let element = sample_gaussian(&ring, 1000.0, &mut rng).unwrap();
        let coeffs = element.to_i64_coeffs().unwrap();
        assert!(coeffs.iter().all(|&c| (-3..=3).contains(&c)));
    }

    #[test]
    fn ternary_without_modulus_keeps_signs() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let element = sample_ternary(&ring(32, None), 32, &mut rng).unwrap();
        let coeffs = element.to_i64_coeffs().unwrap();
        assert!(coeffs.contains(&1) && coeffs.contains(&-1));
        assert!(coeffs.iter().all(|&c| c == 1 || c == -1));
    }

    #[test]
    fn gaussian_rejects_bad_std_dev() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        assert_eq!(
            sample_gaussian(&ring(8, Some(17)), -1.0, &mut rng),
            Err(RingError::InvalidStdDev { std_dev: -1.0 })
        );
        assert!(matches!(
            sample_gaussian(&ring(8, Some(17)), f64::INFINITY, &mut rng),
            Err(RingError::InvalidStdDev { .. })
        ));
    }
}
