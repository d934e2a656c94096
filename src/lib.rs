#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod utils;

pub mod algebra;
pub mod structures;

pub use algebra::field::BinaryField;

pub use structures::gf2::Gf2;
pub use structures::gf256;
pub use structures::gf256::{Gf256, ModulusError};
#[cfg(feature = "serde")]
pub use structures::poly::PolynomialSeed;
pub use structures::poly::{FieldPolynomial, PolynomialError};
pub use utils::bit_degree;
