//! The finite field GF(2^8) built from a primitive polynomial.
//!
//! This module provides:
//! - The `Gf256` struct holding exponent and logarithm tables for one
//!   primitive polynomial
//! - `ModulusError` for polynomials that cannot generate the field
//! - Constructors for the fields used by QR codes and Data Matrix symbols

use core::fmt;

use crate::algebra::field::BinaryField;
use crate::utils::bit_degree;

/// Number of non-zero elements in GF(2^8).
const ORDER: usize = 255;

/// `x^8 + x^4 + x^3 + x^2 + 1`, used by QR codes.
pub const QR_CODE_PRIMITIVE: u16 = 0x11D;

/// `x^8 + x^5 + x^3 + x^2 + 1`, used by Data Matrix and Aztec codes.
pub const DATA_MATRIX_PRIMITIVE: u16 = 0x12D;

/// Error type for primitive polynomial validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulusError {
    /// The polynomial does not have degree 8.
    WrongDegree { got: Option<u32> },
    /// `x` does not generate all 255 non-zero elements modulo the polynomial.
    NotPrimitive { period: usize },
}

impl fmt::Display for ModulusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModulusError::WrongDegree { got } => {
                write!(f, "wrong degree: expected 8, got {:?}", got)
            }
            ModulusError::NotPrimitive { period } => write!(
                f,
                "polynomial is not primitive: x has period {}, expected {}",
                period, ORDER
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModulusError {}

/// Exponent and logarithm tables, plus the multiplicative period of `x`.
///
/// `period` is 0 when the powers of `x` never return to 1, which happens
/// when the polynomial is divisible by `x`.
struct Tables {
    exp: [u8; ORDER],
    log: [u8; 256],
    period: usize,
}

const fn build_tables(primitive: u16) -> Tables {
    let mut exp = [0u8; ORDER];
    let mut log = [0u8; 256];
    let mut period = 0;

    let mut x: u16 = 1;
    let mut i = 0;
    while i < ORDER {
        exp[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= primitive;
        }
        x &= 0xFF;
        i += 1;
        if x == 1 && period == 0 {
            period = i;
        }
    }

    // Later powers overwrite earlier ones only when the period is short,
    // and such tables are rejected by `Gf256::new`.
    let mut i = ORDER;
    while i > 0 {
        i -= 1;
        log[exp[i] as usize] = i as u8;
    }

    Tables { exp, log, period }
}

/// The finite field GF(2^8) with elements stored as `u8`.
///
/// Bit `i` of an element is the coefficient of `α^i`, where `α` is a root of
/// the primitive polynomial. Multiplication and division go through
/// exponent/logarithm tables computed once at construction.
///
/// Two `Gf256` values built from the same polynomial are still different
/// fields as far as [`FieldPolynomial`](crate::FieldPolynomial) is concerned:
/// share one instance behind an `Arc`.
///
/// # Example
///
/// ```
/// use gfpoly::{BinaryField, Gf256};
///
/// let field = Gf256::qr_code();
/// assert_eq!(field.exp(8), 0x1D); // α^8 = α^4 + α^3 + α^2 + 1
/// assert_eq!(field.multiply(0x80, 2), 0x1D);
/// assert_eq!(field.divide(0x1D, 2), Some(0x80));
/// ```
#[derive(Clone)]
pub struct Gf256 {
    exp: [u8; ORDER],
    log: [u8; 256],
    primitive: u16,
    generator_base: u8,
}

impl Gf256 {
    /// Create a new field from a primitive polynomial of degree 8.
    ///
    /// `primitive` packs the polynomial's coefficients into bits, lowest
    /// degree in bit 0. `generator_base` is the exponent `b` of the first
    /// root `α^b` that Reed–Solomon generator polynomials over this field
    /// start from; the field itself does not use it.
    ///
    /// # Errors
    ///
    /// Returns `ModulusError::WrongDegree` if the polynomial is not of degree 8.
    /// Returns `ModulusError::NotPrimitive` if `x` does not generate the
    /// multiplicative group (the polynomial is reducible, or irreducible
    /// but not primitive).
    pub fn new(primitive: u16, generator_base: u8) -> Result<Self, ModulusError> {
        let degree = bit_degree(primitive);
        if degree != Some(8) {
            trace_event!(warn, primitive, ?degree, "rejected GF(256) modulus");
            return Err(ModulusError::WrongDegree { got: degree });
        }

        let tables = build_tables(primitive);
        if tables.period != ORDER {
            trace_event!(
                warn,
                primitive,
                period = tables.period,
                "rejected non-primitive GF(256) modulus"
            );
            return Err(ModulusError::NotPrimitive {
                period: tables.period,
            });
        }

        trace_event!(debug, primitive, generator_base, "built GF(256) tables");
        Ok(Self::from_tables(tables, primitive, generator_base))
    }

    /// Create a new field, skipping validation of the polynomial.
    ///
    /// Use this for polynomials known to be primitive. With any other
    /// polynomial the tables are meaningless.
    pub fn new_unchecked(primitive: u16, generator_base: u8) -> Self {
        Self::from_tables(build_tables(primitive), primitive, generator_base)
    }

    fn from_tables(tables: Tables, primitive: u16, generator_base: u8) -> Self {
        Self {
            exp: tables.exp,
            log: tables.log,
            primitive,
            generator_base,
        }
    }

    /// The field used by QR codes: `x^8 + x^4 + x^3 + x^2 + 1`, generator base 0.
    pub fn qr_code() -> Self {
        Self::new_unchecked(QR_CODE_PRIMITIVE, 0)
    }

    /// The field used by Data Matrix codes: `x^8 + x^5 + x^3 + x^2 + 1`,
    /// generator base 1.
    pub fn data_matrix() -> Self {
        Self::new_unchecked(DATA_MATRIX_PRIMITIVE, 1)
    }

    /// The primitive polynomial, packed into bits.
    pub const fn primitive(&self) -> u16 {
        self.primitive
    }

    /// Exponent of the first root of generator polynomials over this field.
    pub const fn generator_base(&self) -> u8 {
        self.generator_base
    }

    /// Number of elements in the field.
    pub const fn size(&self) -> usize {
        ORDER + 1
    }

    /// Compute `α^power`.
    #[inline]
    pub fn exp(&self, power: usize) -> u8 {
        self.exp[power % ORDER]
    }

    /// Discrete logarithm base `α`. Returns `None` for zero.
    #[inline]
    pub fn log(&self, a: u8) -> Option<u8> {
        if a == 0 {
            None
        } else {
            Some(self.log[a as usize])
        }
    }

    /// Multiplicative inverse. Returns `None` for zero.
    #[inline]
    pub fn inverse(&self, a: u8) -> Option<u8> {
        self.log(a).map(|l| self.exp(ORDER - l as usize))
    }
}

impl BinaryField for Gf256 {
    type Element = u8;

    const ZERO: u8 = 0;
    const ONE: u8 = 1;

    #[inline]
    fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    fn multiply(&self, a: u8, b: u8) -> u8 {
        match (self.log(a), self.log(b)) {
            (Some(la), Some(lb)) => self.exp(la as usize + lb as usize),
            _ => 0,
        }
    }

    #[inline]
    fn divide(&self, a: u8, b: u8) -> Option<u8> {
        let lb = self.log(b)?;
        Some(match self.log(a) {
            Some(la) => self.exp(la as usize + ORDER - lb as usize),
            None => 0,
        })
    }
}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GF(256)[{:#x}, generator base {}]",
            self.primitive, self.generator_base
        )
    }
}
