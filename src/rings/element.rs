use super::{
    descriptor::RingDescriptor, errors::RingResult,
    reduction::reduce_coefficients,
};
use crate::math::degree;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use std::sync::Arc;

/// A polynomial in `Z[X]/(X^N + 1)` or `Z_Q[X]/(X^N + 1)`, always reduced.
///
/// # Invariants
/// - `coeffs.len() == ring.degree()`, `coeffs[i]` is the coefficient of `X^i`
/// - if the ring has a modulus, every coefficient is in its residue interval
#[derive(Debug, Clone, PartialEq)]
pub struct RingElement {
    coeffs: Vec<BigInt>,
    ring: Arc<RingDescriptor>,
}

impl RingElement {
    /// Reduces `coeffs` (lowest degree first, any length) into the ring.
    pub fn new<I, T>(coeffs: I, ring: Arc<RingDescriptor>) -> RingResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        let raw: Vec<BigInt> = coeffs.into_iter().map(Into::into).collect();
        let coeffs = reduce_coefficients(&raw, &ring)?;
        Ok(Self { coeffs, ring })
    }

    /// Reduces `coeffs` given highest degree first, so `[1, 2, 3]` is
    /// `X^2 + 2X + 3`.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use toy_cyclotomic_ring::{RingDescriptor, RingElement};
    ///
    /// let ring = Arc::new(RingDescriptor::new(4, Some(8)).unwrap());
    /// let element = RingElement::from_descending([1, 2, 3, 4, 5], ring).unwrap();
    /// assert_eq!(element.to_i64_coeffs(), Some(vec![4, 4, 3, 2]));
    /// ```
    pub fn from_descending<I, T>(
        coeffs: I,
        ring: Arc<RingDescriptor>,
    ) -> RingResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        let mut raw: Vec<BigInt> = coeffs.into_iter().map(Into::into).collect();
        raw.reverse();
        Self::new(raw, ring)
    }

    pub fn zero(ring: Arc<RingDescriptor>) -> Self {
        Self {
            coeffs: vec![BigInt::zero(); ring.degree()],
            ring,
        }
    }

    pub fn coefficients(&self) -> &[BigInt] {
        &self.coeffs
    }

    pub fn ring(&self) -> &Arc<RingDescriptor> {
        &self.ring
    }

    /// Highest power of `X` with a non-zero coefficient.
    pub fn degree(&self) -> Option<usize> {
        degree(&self.coeffs)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Coefficients as `i64`, `None` if any of them does not fit.
    ///
    /// Always `Some` for elements of a ring with a modulus.
    pub fn to_i64_coeffs(&self) -> Option<Vec<i64>> {
        self.coeffs.iter().map(ToPrimitive::to_i64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(degree: usize, modulus: Option<u64>) -> Arc<RingDescriptor> {
        Arc::new(RingDescriptor::new(degree, modulus).unwrap())
    }

    #[test]
    fn reduces_on_construction() {
        let ring = ring(4, Some(8));
        let element = RingElement::new([1, 0, 0, 0, 1], ring.clone()).unwrap();
        assert!(element.is_zero());
        assert_eq!(element.coefficients().len(), 4);
        assert_eq!(element.degree(), None);
        assert_eq!(element, RingElement::zero(ring));
    }

    #[test]
    fn descending_input_reads_leading_coefficient_first() {
        let ring = ring(4, Some(8));
        // x^4 + 2x^3 + 3x^2 + 4x + 5 = 2x^3 + 3x^2 + 4x + 4
        let element =
            RingElement::from_descending([1, 2, 3, 4, 5], ring.clone()).unwrap();
        assert_eq!(element.to_i64_coeffs(), Some(vec![4, 4, 3, 2]));

        // x^4 = -1
        let element =
            RingElement::from_descending([1, 0, 0, 0, 0], ring.clone()).unwrap();
        assert_eq!(element.to_i64_coeffs(), Some(vec![-1, 0, 0, 0]));

        let ascending = RingElement::new([5, 4, 3, 2, 1], ring).unwrap();
        assert_eq!(element.ring(), ascending.ring());
        assert_eq!(ascending.to_i64_coeffs(), Some(vec![4, 4, 3, 2]));
    }

    #[test]
    fn descending_palindrome_matches_ascending() {
        let ring = ring(4, Some(8));
        assert_eq!(
            RingElement::from_descending([1, 0, 0, 0, 1], ring.clone()).unwrap(),
            RingElement::new([1, 0, 0, 0, 1], ring).unwrap()
        );
    }

    #[test]
    fn pads_short_input() {
        let element = RingElement::new([3i64, -2], ring(8, None)).unwrap();
        assert_eq!(element.to_i64_coeffs(), Some(vec![3, -2, 0, 0, 0, 0, 0, 0]));
        assert_eq!(element.degree(), Some(1));
    }

    #[test]
    fn reconstruction_is_idempotent() {
        let ring = ring(8, Some(12_289));
        let raw: Vec<i64> = (0..40).map(|i| i * 7919 - 100_000).collect();
        let first = RingElement::new(raw, ring.clone()).unwrap();
        let second =
            RingElement::new(first.coefficients().to_vec(), ring).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn accepts_big_integers() {
        let huge = BigInt::from(u64::MAX) * 3u32;
        let element = RingElement::new([huge.clone()], ring(2, None)).unwrap();
        assert_eq!(element.coefficients()[0], huge);
        assert_eq!(element.to_i64_coeffs(), None);
    }

    #[test]
    fn shares_descriptor() {
        let ring = ring(4, Some(17));
        let a = RingElement::new([1], ring.clone()).unwrap();
        let b = a.clone();
        assert!(Arc::ptr_eq(a.ring(), &ring));
        assert_eq!(Arc::strong_count(&ring), 3);
        drop(b);
        assert_eq!(Arc::strong_count(&ring), 2);
    }
}
