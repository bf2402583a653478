use rand::{
    Rng,
    distr::{Distribution, Uniform},
    seq::index,
};
use rand_distr::Normal;

/// Samples `count` integer coefficients uniformly from `[low, high]`.
///
/// # Panics
///
/// Panics if `low > high`.
pub fn uniform_coefficients<R: Rng + ?Sized>(
    count: usize,
    low: i64,
    high: i64,
    rng: &mut R,
) -> Vec<i64> {
    let distribution = Uniform::new_inclusive(low, high).unwrap_or_else(|_| {
        panic!("uniform_coefficients: invalid range [{low}, {high}]")
    });
    (0..count).map(|_| distribution.sample(rng)).collect()
}

/// Samples `count` rounded Gaussian integers with mean zero.
///
/// # Panics
///
/// Panics if `std_dev` is not finite and positive.
pub fn gaussian_coefficients<R: Rng + ?Sized>(
    count: usize,
    std_dev: f64,
    rng: &mut R,
) -> Vec<i64> {
    let normal = Normal::new(0.0, std_dev)
        .ok()
        .filter(|_| std_dev.is_finite() && std_dev > 0.0)
        .unwrap_or_else(|| {
            panic!("gaussian_coefficients: std_dev must be finite and positive")
        });
    normal
        .sample_iter(rng)
        .take(count)
        .map(|x| x.round() as i64)
        .collect()
}

/// `count` coefficients of which exactly `hamming_weight`, at distinct
/// random positions, are `1` or `-1`.
///
/// # Panics
///
/// Panics if `hamming_weight > count`.
pub fn ternary_coefficients<R: Rng + ?Sized>(
    count: usize,
    hamming_weight: usize,
    rng: &mut R,
) -> Vec<i64> {
    assert!(
        hamming_weight <= count,
        "ternary_coefficients: hamming_weight must be <= count"
    );
    let mut out = vec![0i64; count];
    for position in index::sample(rng, count, hamming_weight) {
        out[position] = if rng.random_bool(0.5) { 1 } else { -1 };
    }
    out
}
