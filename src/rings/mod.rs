pub mod builder;
pub mod descriptor;
pub mod display;
pub mod element;
pub mod errors;
pub mod reduction;
pub mod sampler;

pub use builder::RingBuilder;
pub use descriptor::{ResidueInterval, RingDescriptor};
pub use element::RingElement;
pub use errors::{RingError, RingResult};
pub use reduction::{check_in_interval, reduce_coefficients};
pub use sampler::{sample, sample_gaussian, sample_ternary};
