use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::algebra::field::BinaryField;

/// Error type for polynomial construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialError {
    /// Construction was given no coefficients at all.
    Empty,
    /// A coefficient is not an element of the polynomial's field.
    InvalidElement { index: usize },
    /// Coefficient lookup past the polynomial's degree.
    DegreeOutOfRange { degree: usize, max: usize },
    /// The operands were built over different field instances.
    FieldMismatch,
    /// Division by the zero polynomial.
    DivisionByZero,
}

impl fmt::Display for PolynomialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolynomialError::Empty => write!(f, "polynomial has no coefficients"),
            PolynomialError::InvalidElement { index } => {
                write!(f, "coefficient at index {} is not a field element", index)
            }
            PolynomialError::DegreeOutOfRange { degree, max } => {
                write!(f, "degree {} out of range: polynomial has degree {}", degree, max)
            }
            PolynomialError::FieldMismatch => {
                write!(f, "polynomials belong to different field instances")
            }
            PolynomialError::DivisionByZero => write!(f, "division by the zero polynomial"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolynomialError {}

/// Polynomial over a binary Galois field.
///
/// Coefficients are stored in descending order of degree:
/// `coefficients()[0]` is the leading term and the last entry is the
/// constant term.
///
/// The value is immutable. Leading zero terms are stripped on construction,
/// so the zero polynomial is the only one whose leading coefficient is zero,
/// and it is stored as a single zero coefficient.
///
/// Cloning is cheap: the field handle and the coefficient buffer are both
/// shared. Operations that leave an operand unchanged (adding zero,
/// multiplying by one) return such a clone instead of copying.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gfpoly::{BinaryField, FieldPolynomial, Gf256};
///
/// let field = Arc::new(Gf256::qr_code());
///
/// // x^2 + 3x + 2 = (x + 1)(x + 2)
/// let p = FieldPolynomial::new(&field, vec![1, 3, 2]).unwrap();
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p.evaluate_at(1), 0);
/// assert_eq!(p.evaluate_at(2), 0);
///
/// let zero = field.zero_polynomial();
/// assert!(zero.is_zero());
/// ```
pub struct FieldPolynomial<F: BinaryField> {
    field: Arc<F>,
    coefficients: Arc<[F::Element]>,
}

impl<F: BinaryField> FieldPolynomial<F> {
    /// Create a polynomial from coefficients in descending order of degree.
    ///
    /// Leading zeros are removed, keeping at least the constant term.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::Empty` if `coefficients` is empty.
    /// Returns `PolynomialError::InvalidElement` if a coefficient lies
    /// outside the field. Out-of-range values are never clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gfpoly::{FieldPolynomial, Gf2};
    ///
    /// let field = Arc::new(Gf2);
    /// let p = FieldPolynomial::new(&field, vec![0, 0, 1, 1]).unwrap();
    /// assert_eq!(p.coefficients(), &[1, 1]);
    /// assert_eq!(p.degree(), 1);
    /// ```
    pub fn new(field: &Arc<F>, coefficients: Vec<F::Element>) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::Empty);
        }
        if let Some(index) = coefficients.iter().position(|&c| !field.contains(c)) {
            return Err(PolynomialError::InvalidElement { index });
        }
        Ok(Self::from_raw(field, coefficients))
    }

    /// Build from coefficients produced by field operations.
    ///
    /// `coefficients` must be non-empty and hold only field elements.
    fn from_raw(field: &Arc<F>, coefficients: Vec<F::Element>) -> Self {
        debug_assert!(!coefficients.is_empty());
        debug_assert!(coefficients.iter().all(|&c| field.contains(c)));

        let last = coefficients.len() - 1;
        let first = coefficients[..last]
            .iter()
            .position(|&c| c != F::ZERO)
            .unwrap_or(last);

        let coefficients: Arc<[F::Element]> = if first == 0 {
            Arc::from(coefficients)
        } else {
            Arc::from(&coefficients[first..])
        };

        Self {
            field: Arc::clone(field),
            coefficients,
        }
    }

    /// The zero polynomial over `field`.
    pub fn zero(field: &Arc<F>) -> Self {
        Self::from_raw(field, vec![F::ZERO])
    }

    /// The constant polynomial `1` over `field`.
    pub fn one(field: &Arc<F>) -> Self {
        Self::from_raw(field, vec![F::ONE])
    }

    /// Create a monomial `coefficient * x^degree`.
    ///
    /// A zero coefficient gives the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gfpoly::{FieldPolynomial, Gf256};
    ///
    /// let field = Arc::new(Gf256::qr_code());
    /// let m = FieldPolynomial::monomial(&field, 3, 7).unwrap(); // 7x^3
    /// assert_eq!(m.coefficients(), &[7, 0, 0, 0]);
    /// ```
    pub fn monomial(
        field: &Arc<F>,
        degree: usize,
        coefficient: F::Element,
    ) -> Result<Self, PolynomialError> {
        if !field.contains(coefficient) {
            return Err(PolynomialError::InvalidElement { index: 0 });
        }
        if coefficient == F::ZERO {
            return Ok(Self::zero(field));
        }
        let mut coefficients = vec![F::ZERO; degree + 1];
        coefficients[0] = coefficient;
        Ok(Self::from_raw(field, coefficients))
    }

    /// The field this polynomial is defined over.
    pub fn field(&self) -> &Arc<F> {
        &self.field
    }

    /// Whether `self` and `other` were built over the same field instance.
    pub fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.field, &other.field)
    }

    fn check_same_field(&self, other: &Self) -> Result<(), PolynomialError> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(PolynomialError::FieldMismatch)
        }
    }

    /// Degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// All coefficients, leading term first.
    pub fn coefficients(&self) -> &[F::Element] {
        &self.coefficients
    }

    /// The leading coefficient. Zero only for the zero polynomial.
    pub fn leading_coefficient(&self) -> F::Element {
        self.coefficients[0]
    }

    fn constant_term(&self) -> F::Element {
        self.coefficients[self.coefficients.len() - 1]
    }

    /// Get the coefficient of `x^degree`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DegreeOutOfRange` if `degree` exceeds
    /// [`degree()`](Self::degree).
    pub fn coefficient_at(&self, degree: usize) -> Result<F::Element, PolynomialError> {
        let max = self.degree();
        if degree > max {
            return Err(PolynomialError::DegreeOutOfRange { degree, max });
        }
        Ok(self.coefficients[max - degree])
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == F::ZERO
    }

    /// Check if this is the constant polynomial `1`.
    pub fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == F::ONE
    }

    /// Evaluate the polynomial at a field element using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gfpoly::{FieldPolynomial, Gf256};
    ///
    /// let field = Arc::new(Gf256::qr_code());
    /// // p(x) = 5x + 9
    /// let p = FieldPolynomial::new(&field, vec![5, 9]).unwrap();
    ///
    /// assert_eq!(p.evaluate_at(0), 9);
    /// // 5 + 9 = 5 xor 9 = 12
    /// assert_eq!(p.evaluate_at(1), 12);
    /// ```
    pub fn evaluate_at(&self, x: F::Element) -> F::Element {
        debug_assert!(self.field.contains(x), "{:?} is not a field element", x);
        if x == F::ZERO {
            return self.constant_term();
        }

        let field = &*self.field;
        if x == F::ONE {
            // Every power of one is one: the value is the sum of the coefficients.
            return self
                .coefficients
                .iter()
                .fold(F::ZERO, |acc, &c| field.add(acc, c));
        }

        // Horner's method: p(x) = a_0 + x(a_1 + x(a_2 + ... + x*a_n))
        self.coefficients
            .iter()
            .fold(F::ZERO, |acc, &c| field.add(c, field.multiply(acc, x)))
    }

    /// Add two polynomials.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::FieldMismatch` if `other` belongs to a
    /// different field instance.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gfpoly::{FieldPolynomial, Gf2};
    ///
    /// let field = Arc::new(Gf2);
    /// let p = FieldPolynomial::new(&field, vec![1, 1, 0]).unwrap(); // x^2 + x
    /// let q = FieldPolynomial::new(&field, vec![1, 1]).unwrap(); // x + 1
    /// assert_eq!(p.add(&q).unwrap().coefficients(), &[1, 0, 1]);
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.check_same_field(other)?;

        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }

        let (longer, shorter) = if self.coefficients.len() >= other.coefficients.len() {
            (self, other)
        } else {
            (other, self)
        };

        let field = &*self.field;
        let mut sum = longer.coefficients.to_vec();
        let offset = sum.len() - shorter.coefficients.len();
        for (slot, &c) in sum[offset..].iter_mut().zip(shorter.coefficients.iter()) {
            *slot = field.add(*slot, c);
        }

        // Leading terms may cancel.
        Ok(Self::from_raw(&self.field, sum))
    }

    /// Subtract `other` from `self`.
    ///
    /// In characteristic 2 this is the same as [`add`](Self::add).
    pub fn subtract(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.add(other)
    }

    /// Multiply two polynomials using naive O(n*m) convolution.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::FieldMismatch` if `other` belongs to a
    /// different field instance.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gfpoly::{FieldPolynomial, Gf2};
    ///
    /// let field = Arc::new(Gf2);
    /// let p = FieldPolynomial::new(&field, vec![1, 1, 0]).unwrap(); // x^2 + x
    /// let q = FieldPolynomial::new(&field, vec![1, 1]).unwrap(); // x + 1
    /// assert_eq!(p.multiply(&q).unwrap().coefficients(), &[1, 0, 1, 0]);
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.check_same_field(other)?;

        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero(&self.field));
        }
        if self.is_one() {
            return Ok(other.clone());
        }
        if other.is_one() {
            return Ok(self.clone());
        }

        let field = &*self.field;
        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product = vec![F::ZERO; a.len() + b.len() - 1];

        for (i, &a_coeff) in a.iter().enumerate() {
            for (j, &b_coeff) in b.iter().enumerate() {
                product[i + j] = field.add(product[i + j], field.multiply(a_coeff, b_coeff));
            }
        }

        Ok(Self::from_raw(&self.field, product))
    }

    /// Multiply every coefficient by the field element `scalar`.
    pub fn multiply_scalar(&self, scalar: F::Element) -> Self {
        debug_assert!(self.field.contains(scalar), "{:?} is not a field element", scalar);
        if scalar == F::ZERO {
            return Self::zero(&self.field);
        }
        if scalar == F::ONE {
            return self.clone();
        }

        let field = &*self.field;
        let coefficients = self
            .coefficients
            .iter()
            .map(|&c| field.multiply(c, scalar))
            .collect();
        Self::from_raw(&self.field, coefficients)
    }

    /// Multiply by the monomial `coefficient * x^degree`.
    ///
    /// This is how a message polynomial is shifted up before taking its
    /// remainder modulo a generator polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gfpoly::{FieldPolynomial, Gf256};
    ///
    /// let field = Arc::new(Gf256::qr_code());
    /// let p = FieldPolynomial::new(&field, vec![1, 2]).unwrap(); // x + 2
    /// let shifted = p.multiply_by_monomial(2, 1); // x^3 + 2x^2
    /// assert_eq!(shifted.coefficients(), &[1, 2, 0, 0]);
    /// ```
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: F::Element) -> Self {
        debug_assert!(
            self.field.contains(coefficient),
            "{:?} is not a field element",
            coefficient
        );
        if coefficient == F::ZERO || self.is_zero() {
            return Self::zero(&self.field);
        }

        let field = &*self.field;
        let mut coefficients = Vec::with_capacity(self.coefficients.len() + degree);
        coefficients.extend(self.coefficients.iter().map(|&c| field.multiply(c, coefficient)));
        coefficients.resize(self.coefficients.len() + degree, F::ZERO);
        Self::from_raw(&self.field, coefficients)
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and
    /// `deg(r) < deg(divisor)` (or `r` is zero when the divisor is constant).
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::FieldMismatch` if `divisor` belongs to a
    /// different field instance, and `PolynomialError::DivisionByZero` if
    /// `divisor` is the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gfpoly::{FieldPolynomial, Gf2};
    ///
    /// let field = Arc::new(Gf2);
    /// // (x^2 + x) / (x + 1) = x, remainder 0
    /// let dividend = FieldPolynomial::new(&field, vec![1, 1, 0]).unwrap();
    /// let divisor = FieldPolynomial::new(&field, vec![1, 1]).unwrap();
    /// let (q, r) = dividend.divide(&divisor).unwrap();
    ///
    /// assert_eq!(q.coefficients(), &[1, 0]);
    /// assert!(r.is_zero());
    /// ```
    pub fn divide(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        self.check_same_field(divisor)?;
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if self.is_zero() || divisor.is_one() {
            return Ok((self.clone(), Self::zero(&self.field)));
        }

        let dividend_len = self.coefficients.len();
        let divisor_len = divisor.coefficients.len();
        if dividend_len < divisor_len {
            return Ok((Self::zero(&self.field), self.clone()));
        }

        // Synthetic division on a working copy of the dividend: after the
        // loop the front holds the quotient and the back the remainder.
        let field = &*self.field;
        let mut work = self.coefficients.to_vec();
        let normalizer = divisor.coefficients[0];
        let quotient_len = dividend_len - divisor_len + 1;

        for i in 0..quotient_len {
            let coefficient = field
                .divide(work[i], normalizer)
                .ok_or(PolynomialError::DivisionByZero)?;
            work[i] = coefficient;
            if coefficient != F::ZERO {
                for (j, &d) in divisor.coefficients.iter().enumerate().skip(1) {
                    // Subtraction is addition in characteristic 2.
                    work[i + j] = field.add(work[i + j], field.multiply(coefficient, d));
                }
            }
        }

        let remainder = if divisor_len == 1 {
            vec![F::ZERO]
        } else {
            work[quotient_len..].to_vec()
        };
        work.truncate(quotient_len);

        Ok((
            Self::from_raw(&self.field, work),
            Self::from_raw(&self.field, remainder),
        ))
    }

    /// Compute the remainder of division.
    ///
    /// # Errors
    ///
    /// Same as [`divide`](Self::divide).
    pub fn remainder(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        self.divide(divisor).map(|(_, r)| r)
    }
}

impl<F: BinaryField> Clone for FieldPolynomial<F> {
    fn clone(&self) -> Self {
        Self {
            field: Arc::clone(&self.field),
            coefficients: Arc::clone(&self.coefficients),
        }
    }
}

/// Polynomials are equal when they share a field instance and have the same
/// coefficients.
impl<F: BinaryField> PartialEq for FieldPolynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other) && self.coefficients == other.coefficients
    }
}

impl<F: BinaryField> Eq for FieldPolynomial<F> {}

impl<F: BinaryField> fmt::Debug for FieldPolynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let degree = self.degree();
        let mut first = true;
        for (i, &coeff) in self.coefficients.iter().enumerate() {
            if coeff == F::ZERO {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match degree - i {
                0 => write!(f, "{:?}", coeff)?,
                1 if coeff == F::ONE => write!(f, "x")?,
                1 => write!(f, "{:?}*x", coeff)?,
                n if coeff == F::ONE => write!(f, "x^{}", n)?,
                n => write!(f, "{:?}*x^{}", coeff, n)?,
            }
        }

        Ok(())
    }
}

impl<F: BinaryField> fmt::Display for FieldPolynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl<F> serde::Serialize for FieldPolynomial<F>
where
    F: BinaryField,
    F::Element: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as the coefficient list, leading term first
        serializer.collect_seq(self.coefficients.iter())
    }
}

/// Deserializes a [`FieldPolynomial`] over a field the caller already holds.
///
/// `FieldPolynomial` implements `Serialize` but not `Deserialize`: the field
/// handle cannot be recovered from the serialized coefficients. The seed
/// supplies it and runs the same validation as [`FieldPolynomial::new`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use serde::de::DeserializeSeed;
/// use gfpoly::{FieldPolynomial, Gf256, PolynomialSeed};
///
/// let field = Arc::new(Gf256::qr_code());
/// let mut de = serde_json::Deserializer::from_str("[0, 4, 5]");
/// let p = PolynomialSeed::new(&field).deserialize(&mut de).unwrap();
/// assert_eq!(p.coefficients(), &[4, 5]);
/// ```
#[cfg(feature = "serde")]
pub struct PolynomialSeed<'a, F: BinaryField> {
    field: &'a Arc<F>,
}

#[cfg(feature = "serde")]
impl<'a, F: BinaryField> PolynomialSeed<'a, F> {
    pub fn new(field: &'a Arc<F>) -> Self {
        Self { field }
    }
}

#[cfg(feature = "serde")]
impl<'de, F> serde::de::DeserializeSeed<'de> for PolynomialSeed<'_, F>
where
    F: BinaryField,
    F::Element: serde::Deserialize<'de>,
{
    type Value = FieldPolynomial<F>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        use serde::Deserialize;

        let coefficients = Vec::<F::Element>::deserialize(deserializer)?;
        FieldPolynomial::new(self.field, coefficients).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::gf256::Gf256;
    use crate::structures::gf2::Gf2;
    use alloc::format;

    fn gf2() -> Arc<Gf2> {
        Arc::new(Gf2)
    }

    fn qr() -> Arc<Gf256> {
        Arc::new(Gf256::qr_code())
    }

    fn poly<F: BinaryField>(field: &Arc<F>, coeffs: &[F::Element]) -> FieldPolynomial<F> {
        FieldPolynomial::new(field, coeffs.to_vec()).unwrap()
    }

    // ---- construction ----

    #[test]
    fn new_normalizes() {
        // Leading zeros should be removed
        let field = qr();
        let p = poly(&field, &[0, 0, 7, 0, 3]);
        assert_eq!(p.coefficients(), &[7, 0, 3]);
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn new_all_zeros() {
        let field = qr();
        let p = poly(&field, &[0, 0, 0]);
        assert!(p.is_zero());
        assert_eq!(p.coefficients(), &[0]);
        assert_eq!(p.degree(), 0);
    }

    #[test]
    fn new_keeps_already_canonical() {
        let field = qr();
        let p = poly(&field, &[1, 0, 0]);
        assert_eq!(p.coefficients(), &[1, 0, 0]);
    }

    #[test]
    fn new_empty_fails() {
        let field = qr();
        assert_eq!(
            FieldPolynomial::new(&field, Vec::new()),
            Err(PolynomialError::Empty)
        );
    }

    #[test]
    fn new_rejects_out_of_range_element() {
        let field = gf2();
        assert_eq!(
            FieldPolynomial::new(&field, vec![1, 0, 2]),
            Err(PolynomialError::InvalidElement { index: 2 })
        );
    }

    #[test]
    fn zero_and_one() {
        let field = qr();
        let zero = FieldPolynomial::zero(&field);
        let one = FieldPolynomial::one(&field);
        assert!(zero.is_zero());
        assert!(!zero.is_one());
        assert!(one.is_one());
        assert!(!one.is_zero());
        assert_eq!(field.zero_polynomial(), zero);
        assert_eq!(field.one_polynomial(), one);
    }

    #[test]
    fn constant_two_is_neither_zero_nor_one() {
        let field = qr();
        let p = poly(&field, &[0, 2]);
        assert!(!p.is_zero());
        assert!(!p.is_one());
    }

    #[test]
    fn monomial() {
        let field = qr();
        let m = FieldPolynomial::monomial(&field, 2, 9).unwrap();
        assert_eq!(m.coefficients(), &[9, 0, 0]);
        assert_eq!(m.degree(), 2);
    }

    #[test]
    fn monomial_zero_coeff() {
        let field = qr();
        assert!(field.monomial(5, 0).unwrap().is_zero());
    }

    #[test]
    fn monomial_rejects_out_of_range_coeff() {
        let field = gf2();
        assert_eq!(
            FieldPolynomial::monomial(&field, 1, 3),
            Err(PolynomialError::InvalidElement { index: 0 })
        );
    }

    // ---- accessors ----

    #[test]
    fn coefficient_at_maps_degree_to_index() {
        let field = qr();
        let p = poly(&field, &[5, 6, 7]); // 5x^2 + 6x + 7
        assert_eq!(p.coefficient_at(0), Ok(7));
        assert_eq!(p.coefficient_at(1), Ok(6));
        assert_eq!(p.coefficient_at(2), Ok(5));
        assert_eq!(p.leading_coefficient(), 5);
    }

    #[test]
    fn coefficient_at_out_of_range() {
        let field = qr();
        let p = poly(&field, &[5, 6, 7]);
        assert_eq!(
            p.coefficient_at(3),
            Err(PolynomialError::DegreeOutOfRange { degree: 3, max: 2 })
        );
    }

    // ---- evaluation ----

    #[test]
    fn eval_at_zero_is_constant_term() {
        let field = qr();
        let p = poly(&field, &[5, 6, 7]);
        assert_eq!(p.evaluate_at(0), 7);
    }

    #[test]
    fn eval_at_one_is_coefficient_sum() {
        let field = qr();
        let p = poly(&field, &[5, 6, 7]);
        assert_eq!(p.evaluate_at(1), 5 ^ 6 ^ 7);
    }

    #[test]
    fn eval_matches_explicit_powers() {
        let field = qr();
        let p = poly(&field, &[5, 6, 7]);
        let x = 0x53;
        let x2 = field.multiply(x, x);
        let expected = field.add(
            field.add(field.multiply(5, x2), field.multiply(6, x)),
            7,
        );
        assert_eq!(p.evaluate_at(x), expected);
    }

    #[test]
    fn eval_zero_poly() {
        let field = qr();
        let zero = FieldPolynomial::zero(&field);
        assert_eq!(zero.evaluate_at(0), 0);
        assert_eq!(zero.evaluate_at(1), 0);
        assert_eq!(zero.evaluate_at(200), 0);
    }

    #[test]
    fn eval_finds_roots() {
        // (x + 2)(x + 4) vanishes at 2 and 4
        let field = qr();
        let a = poly(&field, &[1, 2]);
        let b = poly(&field, &[1, 4]);
        let p = a.multiply(&b).unwrap();
        assert_eq!(p.evaluate_at(2), 0);
        assert_eq!(p.evaluate_at(4), 0);
        assert_ne!(p.evaluate_at(3), 0);
    }

    // ---- addition ----

    #[test]
    fn add_toy_field() {
        let field = gf2();
        let p = poly(&field, &[1, 1, 0]);
        let q = poly(&field, &[1, 1]);
        assert_eq!(p.add(&q).unwrap().coefficients(), &[1, 0, 1]);
        assert_eq!(q.add(&p).unwrap().coefficients(), &[1, 0, 1]);
    }

    #[test]
    fn add_with_zero_aliases_operand() {
        let field = qr();
        let p = poly(&field, &[3, 0, 1]);
        let zero = FieldPolynomial::zero(&field);

        let sum = p.add(&zero).unwrap();
        assert!(core::ptr::eq(sum.coefficients(), p.coefficients()));

        let sum = zero.add(&p).unwrap();
        assert!(core::ptr::eq(sum.coefficients(), p.coefficients()));
    }

    #[test]
    fn add_cancellation() {
        let field = qr();
        let p = poly(&field, &[9, 4, 1]);
        let q = poly(&field, &[9, 4, 3]);
        let sum = p.add(&q).unwrap();
        assert_eq!(sum.coefficients(), &[2]);
        assert_eq!(sum.degree(), 0);
    }

    #[test]
    fn add_self_is_zero() {
        let field = qr();
        let p = poly(&field, &[9, 4, 1]);
        assert!(p.add(&p).unwrap().is_zero());
        assert!(p.subtract(&p).unwrap().is_zero());
    }

    #[test]
    fn add_field_mismatch() {
        let p = poly(&qr(), &[1, 2]);
        let q = poly(&qr(), &[1, 2]);
        assert_eq!(p.add(&q), Err(PolynomialError::FieldMismatch));
    }

    // ---- multiplication ----

    #[test]
    fn mul_toy_field() {
        let field = gf2();
        let p = poly(&field, &[1, 1, 0]);
        let q = poly(&field, &[1, 1]);
        assert_eq!(p.multiply(&q).unwrap().coefficients(), &[1, 0, 1, 0]);
    }

    #[test]
    fn mul_by_zero_poly() {
        let field = qr();
        let p = poly(&field, &[3, 0, 1]);
        let zero = FieldPolynomial::zero(&field);
        assert!(p.multiply(&zero).unwrap().is_zero());
        assert!(zero.multiply(&p).unwrap().is_zero());
    }

    #[test]
    fn mul_by_one_aliases_operand() {
        let field = qr();
        let p = poly(&field, &[3, 0, 1]);
        let one = FieldPolynomial::one(&field);

        let product = p.multiply(&one).unwrap();
        assert!(core::ptr::eq(product.coefficients(), p.coefficients()));

        let product = one.multiply(&p).unwrap();
        assert!(core::ptr::eq(product.coefficients(), p.coefficients()));
    }

    #[test]
    fn mul_degree_sum() {
        let field = qr();
        let p = poly(&field, &[3, 0, 1]);
        let q = poly(&field, &[200, 17, 0, 5]);
        assert_eq!(p.multiply(&q).unwrap().degree(), 5);
    }

    #[test]
    fn mul_linear_factors() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let field = qr();
        let a = poly(&field, &[1, 1]);
        let b = poly(&field, &[1, 2]);
        assert_eq!(a.multiply(&b).unwrap().coefficients(), &[1, 3, 2]);
    }

    #[test]
    fn mul_field_mismatch() {
        let p = poly(&gf2(), &[1, 1]);
        let q = poly(&gf2(), &[1, 1]);
        assert_eq!(p.multiply(&q), Err(PolynomialError::FieldMismatch));
    }

    #[test]
    fn mul_scalar() {
        let field = qr();
        let p = poly(&field, &[1, 2, 3]);
        let scaled = p.multiply_scalar(2);
        assert_eq!(scaled.coefficients(), &[2, 4, 6]);
    }

    #[test]
    fn mul_scalar_zero() {
        let field = qr();
        let p = poly(&field, &[1, 2, 3]);
        assert!(p.multiply_scalar(0).is_zero());
    }

    #[test]
    fn mul_scalar_one_aliases() {
        let field = qr();
        let p = poly(&field, &[1, 2, 3]);
        let same = p.multiply_scalar(1);
        assert!(core::ptr::eq(same.coefficients(), p.coefficients()));
    }

    #[test]
    fn mul_by_monomial_shifts() {
        let field = qr();
        let p = poly(&field, &[1, 2]);
        let shifted = p.multiply_by_monomial(3, 2);
        assert_eq!(shifted.coefficients(), &[2, 4, 0, 0, 0]);

        let m = FieldPolynomial::monomial(&field, 3, 2).unwrap();
        assert_eq!(p.multiply(&m).unwrap(), shifted);
    }

    #[test]
    fn mul_by_monomial_zero() {
        let field = qr();
        let p = poly(&field, &[1, 2]);
        assert!(p.multiply_by_monomial(4, 0).is_zero());
        assert!(FieldPolynomial::zero(&field)
            .multiply_by_monomial(4, 9)
            .is_zero());
    }

    // ---- division ----

    #[test]
    fn div_toy_field() {
        let field = gf2();
        let p = poly(&field, &[1, 1, 0]);
        let q = poly(&field, &[1, 1]);
        let (quotient, remainder) = p.divide(&q).unwrap();
        assert_eq!(quotient.coefficients(), &[1, 0]);
        assert!(remainder.is_zero());
    }

    #[test]
    fn div_with_remainder() {
        // (x^2 + 1) / (x + 3) over GF(256)
        let field = qr();
        let dividend = poly(&field, &[1, 0, 1]);
        let divisor = poly(&field, &[1, 3]);
        let (q, r) = dividend.divide(&divisor).unwrap();

        let reconstructed = q.multiply(&divisor).unwrap().add(&r).unwrap();
        assert_eq!(reconstructed, dividend);
        assert_eq!(r.degree(), 0);
        assert!(!r.is_zero());
    }

    #[test]
    fn div_non_monic_divisor() {
        let field = qr();
        let a = poly(&field, &[7, 1]);
        let b = poly(&field, &[33, 0, 9]);
        let dividend = a.multiply(&b).unwrap();
        let (q, r) = dividend.divide(&a).unwrap();
        assert_eq!(q, b);
        assert!(r.is_zero());
    }

    #[test]
    fn div_by_constant_gives_zero_remainder() {
        let field = qr();
        let dividend = poly(&field, &[4, 6, 8]);
        let divisor = poly(&field, &[2]);
        let (q, r) = dividend.divide(&divisor).unwrap();
        assert_eq!(q.coefficients(), &[2, 3, 4]);
        assert_eq!(r.coefficients(), &[0]);
    }

    #[test]
    fn div_by_one() {
        let field = qr();
        let dividend = poly(&field, &[4, 6, 8]);
        let (q, r) = dividend.divide(&FieldPolynomial::one(&field)).unwrap();
        assert!(core::ptr::eq(q.coefficients(), dividend.coefficients()));
        assert!(r.is_zero());
    }

    #[test]
    fn div_zero_dividend() {
        let field = qr();
        let zero = FieldPolynomial::zero(&field);
        let divisor = poly(&field, &[1, 1]);
        let (q, r) = zero.divide(&divisor).unwrap();
        assert!(q.is_zero());
        assert!(r.is_zero());
    }

    #[test]
    fn div_dividend_smaller() {
        let field = qr();
        let dividend = poly(&field, &[1, 1]);
        let divisor = poly(&field, &[1, 0, 1]);
        let (q, r) = dividend.divide(&divisor).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, dividend);
    }

    #[test]
    fn div_by_zero_poly() {
        let field = qr();
        let dividend = poly(&field, &[1, 1]);
        assert_eq!(
            dividend.divide(&FieldPolynomial::zero(&field)),
            Err(PolynomialError::DivisionByZero)
        );
    }

    #[test]
    fn div_field_mismatch() {
        let p = poly(&qr(), &[1, 1]);
        let q = poly(&qr(), &[1, 1]);
        assert_eq!(p.divide(&q), Err(PolynomialError::FieldMismatch));
    }

    #[test]
    fn remainder_matches_divide() {
        let field = qr();
        let a = poly(&field, &[12, 0, 99, 1, 250]);
        let b = poly(&field, &[3, 7, 1]);
        let (_, r) = a.divide(&b).unwrap();
        assert_eq!(a.remainder(&b).unwrap(), r);
    }

    // ---- equality and formatting ----

    #[test]
    fn equality_requires_same_field() {
        let p = poly(&qr(), &[1, 2]);
        let q = poly(&qr(), &[1, 2]);
        assert_ne!(p, q);
        assert_eq!(p, p.clone());
    }

    #[test]
    fn debug_format() {
        let field = qr();
        let p = poly(&field, &[1, 0, 3, 1]);
        assert_eq!(format!("{:?}", p), "x^3 + 3*x + 1");
    }

    #[test]
    fn debug_format_with_coefficients() {
        let field = qr();
        let p = poly(&field, &[5, 1, 0]);
        assert_eq!(format!("{}", p), "5*x^2 + x");
    }

    #[test]
    fn debug_format_zero() {
        let field = qr();
        assert_eq!(format!("{}", FieldPolynomial::zero(&field)), "0");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            format!("{}", PolynomialError::DegreeOutOfRange { degree: 4, max: 2 }),
            "degree 4 out of range: polynomial has degree 2"
        );
        assert_eq!(
            format!("{}", PolynomialError::DivisionByZero),
            "division by the zero polynomial"
        );
    }
}
