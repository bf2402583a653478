//! Integer polynomial helpers over `BigInt`.
//!
//! Polynomials are coefficient slices in ascending-degree order: index `i`
//! holds the coefficient of `x^i`.

use crate::rings::{RingError, RingResult};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Index of the highest non-zero coefficient, `None` for the zero polynomial.
pub fn degree(coeffs: &[BigInt]) -> Option<usize> {
    coeffs.iter().rposition(|c| !c.is_zero())
}

/// Polynomial long division over the integers.
///
/// Returns `(quotient, remainder)` with
/// `dividend = quotient * divisor + remainder` and `deg(remainder) < deg(divisor)`.
/// The remainder is returned with exactly `deg(divisor)` coefficients
/// (zero-padded), the quotient with `deg(dividend) - deg(divisor) + 1`
/// coefficients, or empty when the dividend already has smaller degree.
///
/// The divisor's leading coefficient must be `1` or `-1`, which keeps every
/// step exact without rational arithmetic.
pub fn div_rem(
    dividend: &[BigInt],
    divisor: &[BigInt],
) -> RingResult<(Vec<BigInt>, Vec<BigInt>)> {
    let divisor_degree = degree(divisor).ok_or(RingError::NonMonicDivisor)?;
    let lead = &divisor[divisor_degree];
    let lead_is_one = lead.is_one();
    if !lead_is_one && !(-lead).is_one() {
        return Err(RingError::NonMonicDivisor);
    }

    let mut remainder: Vec<BigInt> = dividend.to_vec();
    if remainder.len() < divisor_degree {
        remainder.resize(divisor_degree, BigInt::zero());
    }

    let quotient = match degree(dividend) {
        Some(top) if top >= divisor_degree => {
            let mut quotient = vec![BigInt::zero(); top - divisor_degree + 1];
            for i in (divisor_degree..=top).rev() {
                if remainder[i].is_zero() {
                    continue;
                }
                let factor = if lead_is_one {
                    remainder[i].clone()
                } else {
                    -&remainder[i]
                };
                let shift = i - divisor_degree;
                for (j, d) in divisor[..=divisor_degree].iter().enumerate() {
                    if !d.is_zero() {
                        remainder[shift + j] -= &factor * d;
                    }
                }
                quotient[shift] = factor;
            }
            quotient
        }
        _ => Vec::new(),
    };

    remainder.truncate(divisor_degree);
    Ok((quotient, remainder))
}
