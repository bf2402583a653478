pub mod modular;
pub mod poly;
pub mod sampling;

pub use modular::{centered_remainder, centered_remainder_i64};
pub use poly::{degree, div_rem};
pub use sampling::{
    gaussian_coefficients, ternary_coefficients, uniform_coefficients,
};
