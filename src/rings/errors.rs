use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RingError {
    #[error("ring degree must be a positive power of two, got {degree}")]
    InvalidDegree { degree: usize },
    #[error("ring modulus must be greater than 1, got {modulus}")]
    InvalidModulus { modulus: u64 },
    #[error("ring degree {degree} is too large to allocate")]
    DegreeTooLarge { degree: usize },
    #[error("modulus 2^{bits} does not fit in 64 bits")]
    ModulusTooWide { bits: u32 },
    #[error("operation is only defined over R_Q, but the ring has no modulus")]
    ModulusRequired,
    #[error(
        "reduction produced coefficient {coefficient} at index {index}, \
        outside the residue interval of modulus {modulus}"
    )]
    ReductionInvariantViolation {
        index: usize,
        coefficient: BigInt,
        modulus: u64,
    },
    #[error("divisor must be non-zero with a leading coefficient of 1 or -1")]
    NonMonicDivisor,
    #[error("hamming weight {weight} exceeds ring degree {degree}")]
    InvalidHammingWeight { weight: usize, degree: usize },
    #[error("standard deviation must be finite and positive, got {std_dev}")]
    InvalidStdDev { std_dev: f64 },
}

pub type RingResult<T> = Result<T, RingError>;
