use crate::algebra::field::BinaryField;

/// The two-element field GF(2).
///
/// Elements are `0` and `1`; addition is XOR and multiplication is AND.
/// Any other `u8` is rejected by [`BinaryField::contains`], so polynomials
/// over `Gf2` refuse to store it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gfpoly::{FieldPolynomial, Gf2};
///
/// let field = Arc::new(Gf2);
/// let p = FieldPolynomial::new(&field, vec![1, 0, 1]).unwrap(); // x^2 + 1
/// assert_eq!(p.evaluate_at(1), 0); // (x + 1)^2
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Gf2;

impl BinaryField for Gf2 {
    type Element = u8;

    const ZERO: u8 = 0;
    const ONE: u8 = 1;

    #[inline]
    fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    fn multiply(&self, a: u8, b: u8) -> u8 {
        a & b
    }

    #[inline]
    fn divide(&self, a: u8, b: u8) -> Option<u8> {
        match b {
            0 => None,
            _ => Some(a),
        }
    }

    #[inline]
    fn contains(&self, a: u8) -> bool {
        a <= 1
    }
}
