use num_bigint::BigInt;
use num_traits::Signed;

/// Maps `x mod modulus` into the centered interval `(-modulus/2, modulus/2]`.
///
/// The non-negative residue `r` is kept when `2r <= modulus` and shifted down
/// by `modulus` otherwise. For odd moduli this yields the symmetric set
/// `{-(q-1)/2, ..., (q-1)/2}`; for even moduli the upper bound `q/2` is
/// included and `-q/2` is not.
///
/// ```
/// use num_bigint::BigInt;
/// use toy_cyclotomic_ring::math::centered_remainder;
///
/// assert_eq!(centered_remainder(&BigInt::from(10), 7), 3);
/// assert_eq!(centered_remainder(&BigInt::from(11), 7), -3);
/// ```
///
/// # Panics
///
/// Panics if `modulus <= 1`.
pub fn centered_remainder(x: &BigInt, modulus: u64) -> i64 {
    assert!(modulus > 1, "centered_remainder: modulus must be > 1");
    let q = BigInt::from(modulus);
    let mut r = x % &q;
    if r.is_negative() {
        r += &q;
    }
    // 0 <= r < modulus, so at most one 64-bit digit remains.
    let residue = r.iter_u64_digits().next().unwrap_or(0);
    center(residue, modulus)
}

/// Fixed-width variant of [`centered_remainder`].
///
/// # Panics
///
/// Panics if `modulus <= 1`.
pub fn centered_remainder_i64(x: i64, modulus: u64) -> i64 {
    assert!(modulus > 1, "centered_remainder: modulus must be > 1");
    let residue = (x as i128).rem_euclid(modulus as i128) as u64;
    center(residue, modulus)
}

// Expects 0 <= residue < modulus. Both branches fit in i64: the kept residue
// is at most modulus/2 and the shifted one at least -(modulus-1)/2.
fn center(residue: u64, modulus: u64) -> i64 {
    if residue <= modulus - residue {
        residue as i64
    } else {
        -((modulus - residue) as i64)
    }
}
