use super::errors::{RingError, RingResult};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use std::ops::RangeInclusive;
use tracing::debug;

/// The centered residue set `(-Q/2, Q/2]` of a modulus `Q`.
///
/// Holds the inclusive bounds `floor(-Q/2) + 1` and `floor(Q/2)`; iteration
/// yields every member in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueInterval {
    low: i64,
    high: i64,
}

impl ResidueInterval {
    /// # Panics
    ///
    /// Panics if `modulus <= 1`.
    pub fn new(modulus: u64) -> Self {
        assert!(modulus > 1, "ResidueInterval: modulus must be > 1");
        Self {
            low: -(((modulus - 1) / 2) as i64),
            high: (modulus / 2) as i64,
        }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Number of members, always equal to the modulus.
    pub fn size(&self) -> u64 {
        self.high.abs_diff(self.low) + 1
    }

    pub fn contains(&self, value: &BigInt) -> bool {
        value.to_i64().is_some_and(|v| self.contains_i64(v))
    }

    pub fn contains_i64(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    pub fn iter(&self) -> RangeInclusive<i64> {
        self.low..=self.high
    }
}

impl IntoIterator for &ResidueInterval {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parameters of `Z[X]/(X^N + 1)`, or of `Z_Q[X]/(X^N + 1)` when a modulus
/// is set.
///
/// # Invariants
/// - `degree` is a power of two
/// - `defining_polynomial` is `[1, 0, ..., 0, 1]` with `degree + 1` entries
/// - `residue_interval.is_some() == modulus.is_some()`, and `modulus > 1`
#[derive(Debug, Clone, PartialEq)]
pub struct RingDescriptor {
    degree: usize,
    defining_polynomial: Vec<BigInt>,
    modulus: Option<u64>,
    residue_interval: Option<ResidueInterval>,
}

impl RingDescriptor {
    pub fn new(degree: usize, modulus: Option<u64>) -> RingResult<Self> {
        if !degree.is_power_of_two() {
            return Err(RingError::InvalidDegree { degree });
        }
        let residue_interval = match modulus {
            Some(q) if q <= 1 => {
                return Err(RingError::InvalidModulus { modulus: q });
            }
            Some(q) => Some(ResidueInterval::new(q)),
            None => None,
        };

        let len = degree
            .checked_add(1)
            .ok_or(RingError::DegreeTooLarge { degree })?;
        let mut defining_polynomial = Vec::new();
        defining_polynomial
            .try_reserve_exact(len)
            .map_err(|_| RingError::DegreeTooLarge { degree })?;
        defining_polynomial.resize(len, BigInt::zero());
        defining_polynomial[0] = BigInt::one();
        defining_polynomial[degree] = BigInt::one();

        debug!(degree, ?modulus, "constructed ring descriptor");
        Ok(Self {
            degree,
            defining_polynomial,
            modulus,
            residue_interval,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Coefficients of `X^N + 1`, lowest degree first.
    pub fn defining_polynomial(&self) -> &[BigInt] {
        &self.defining_polynomial
    }

    pub fn modulus(&self) -> Option<u64> {
        self.modulus
    }

    pub fn residue_interval(&self) -> Option<&ResidueInterval> {
        self.residue_interval.as_ref()
    }

    /// Whether coefficients live in `Z_Q` rather than `Z`.
    pub fn is_finite(&self) -> bool {
        self.modulus.is_some()
    }
}
