use super::{
    descriptor::{ResidueInterval, RingDescriptor},
    errors::{RingError, RingResult},
};
use crate::math::{centered_remainder, div_rem};
use num_bigint::BigInt;
use tracing::error;

/// Canonical form of `coeffs` in the ring described by `ring`.
///
/// Divides by `X^N + 1` and keeps the remainder (exactly `N` coefficients,
/// lowest degree first). When the ring has a modulus every coefficient is
/// then centered into `(-Q/2, Q/2]` and checked against the residue interval.
///
/// A coefficient outside the interval after centering means the reduction
/// itself is broken; it is logged and reported as
/// [`RingError::ReductionInvariantViolation`].
pub fn reduce_coefficients(
    coeffs: &[BigInt],
    ring: &RingDescriptor,
) -> RingResult<Vec<BigInt>> {
    let (_, mut remainder) = div_rem(coeffs, ring.defining_polynomial())?;

    let (Some(modulus), Some(interval)) =
        (ring.modulus(), ring.residue_interval())
    else {
        return Ok(remainder);
    };

    for coeff in remainder.iter_mut() {
        *coeff = BigInt::from(centered_remainder(coeff, modulus));
    }

    check_in_interval(&remainder, interval, modulus)?;
    Ok(remainder)
}

/// Fails with [`RingError::ReductionInvariantViolation`] on the first
/// coefficient outside `interval`, logging it at `error` level.
pub fn check_in_interval(
    coeffs: &[BigInt],
    interval: &ResidueInterval,
    modulus: u64,
) -> RingResult<()> {
    let Some((index, coefficient)) =
        coeffs.iter().enumerate().find(|(_, c)| !interval.contains(c))
    else {
        return Ok(());
    };
    error!(
        index,
        %coefficient,
        modulus,
        "reduced coefficient escaped the residue interval"
    );
    Err(RingError::ReductionInvariantViolation {
        index,
        coefficient: coefficient.clone(),
        modulus,
    })
}
