use super::{
    descriptor::RingDescriptor,
    errors::{RingError, RingResult},
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModulusChoice {
    Value(u64),
    PowerOfTwo(u32),
}

impl ModulusChoice {
    fn resolve(self) -> RingResult<u64> {
        match self {
            Self::Value(q) => Ok(q),
            Self::PowerOfTwo(bits) => 1u64
                .checked_shl(bits)
                .ok_or(RingError::ModulusTooWide { bits }),
        }
    }
}

/// Builds a shared [`RingDescriptor`].
///
/// ```
/// use toy_cyclotomic_ring::RingBuilder;
///
/// let ring = RingBuilder::new(256).modulus(3329).build().unwrap();
/// assert_eq!(ring.degree(), 256);
/// assert_eq!(ring.modulus(), Some(3329));
/// ```
#[derive(Debug, Clone)]
pub struct RingBuilder {
    degree: usize,
    modulus: Option<ModulusChoice>,
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self::new(8)
    }
}

impl RingBuilder {
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            modulus: None,
        }
    }

    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    pub fn modulus(mut self, modulus: u64) -> Self {
        self.modulus = Some(ModulusChoice::Value(modulus));
        self
    }

    /// Sets `Q = 2^bits`. `build` fails with [`RingError::ModulusTooWide`]
    /// when `bits >= 64`.
    pub fn power_of_two_modulus(mut self, bits: u32) -> Self {
        self.modulus = Some(ModulusChoice::PowerOfTwo(bits));
        self
    }

    /// Drops any modulus, building `Z[X]/(X^N + 1)`.
    pub fn without_modulus(mut self) -> Self {
        self.modulus = None;
        self
    }

    pub fn build(self) -> RingResult<Arc<RingDescriptor>> {
        let modulus = self.modulus.map(ModulusChoice::resolve).transpose()?;
        RingDescriptor::new(self.degree, modulus).map(Arc::new)
    }
}
