use alloc::sync::Arc;
use core::fmt;

use crate::structures::poly::{FieldPolynomial, PolynomialError};

/// A binary Galois field GF(2^m), seen through the handful of operations
/// polynomial arithmetic needs.
///
/// Implementors own whatever tables they use; polynomials only call these
/// methods and never look inside. A field is shared between polynomials as
/// an `Arc<Self>`, and two polynomials belong to the same field only when
/// their handles point at the same allocation.
///
/// Laws (you should test these for concrete types):
/// - `(F, add)` is an abelian group with identity `ZERO`, and `add(a, a) == ZERO`
/// - `(F \ {0}, multiply)` is an abelian group with identity `ONE`
/// - `divide(a, b) == Some(c)` iff `b != ZERO` and `multiply(c, b) == a`
pub trait BinaryField: Sized {
    /// Fixed-width representation of one field element.
    type Element: Copy + Eq + fmt::Debug;

    const ZERO: Self::Element;
    const ONE: Self::Element;

    /// Field addition (XOR for the usual bit representation).
    fn add(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// Field multiplication.
    fn multiply(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// Field division: returns `None` when `b` is zero.
    fn divide(&self, a: Self::Element, b: Self::Element) -> Option<Self::Element>;

    /// Whether `a` is a valid element of this field.
    ///
    /// Fields whose element type has no spare values can keep the default.
    #[inline]
    fn contains(&self, _a: Self::Element) -> bool {
        true
    }

    /// The additive identity polynomial `0` over this field.
    fn zero_polynomial(self: &Arc<Self>) -> FieldPolynomial<Self> {
        FieldPolynomial::zero(self)
    }

    /// The multiplicative identity polynomial `1` over this field.
    fn one_polynomial(self: &Arc<Self>) -> FieldPolynomial<Self> {
        FieldPolynomial::one(self)
    }

    /// The monomial `coefficient * x^degree` over this field.
    fn monomial(
        self: &Arc<Self>,
        degree: usize,
        coefficient: Self::Element,
    ) -> Result<FieldPolynomial<Self>, PolynomialError> {
        FieldPolynomial::monomial(self, degree, coefficient)
    }
}
