//! Reduction and sampling in the cyclotomic rings `Z[X]/(X^N + 1)` and
//! `Z_Q[X]/(X^N + 1)`.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use toy_cyclotomic_ring::{RingBuilder, RingElement, sample};
//!
//! let ring = RingBuilder::new(4).modulus(8).build().unwrap();
//! let element = RingElement::new([1, 0, 0, 0, 1], ring.clone()).unwrap();
//! assert!(element.is_zero());
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let a = sample(&ring, &mut rng).unwrap();
//! assert_eq!(a.coefficients().len(), 4);
//! ```

pub mod math;
pub mod rings;

pub use math::{centered_remainder, centered_remainder_i64};
pub use rings::{
    ResidueInterval, RingBuilder, RingDescriptor, RingElement, RingError,
    RingResult, check_in_interval, reduce_coefficients, sample, sample_gaussian, sample_ternary,
};
