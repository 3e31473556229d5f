//! Equality, addition, geometric product, and reciprocal.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;

use super::Cliffor;
use crate::grades::Grades;
use crate::util;
use crate::Float;

/// Structural equality over the full 8-coefficient embedding, so values of
/// different variants compare equal when they represent the same element.
/// IEEE semantics: any NaN coefficient makes equality false.
impl PartialEq for Cliffor {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients() == other.coefficients()
    }
}

/// Coefficient-wise approximate equality over the full embedding, so values
/// of different variants can be compared. [`crate::TOL`] is the default
/// epsilon.
impl AbsDiffEq for Cliffor {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::TOL
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(self.coefficients(), other.coefficients())
            .all(|(a, b)| Float::abs_diff_eq(&a, &b, epsilon))
    }
}

impl Neg for Cliffor {
    type Output = Cliffor;

    fn neg(self) -> Self::Output {
        let c = self.coefficients().map(|x| -x);
        Self::from_coefficients(self.grades(), c)
    }
}
impl Neg for &Cliffor {
    type Output = Cliffor;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Add<&Cliffor> for &Cliffor {
    type Output = Cliffor;

    fn add(self, rhs: &Cliffor) -> Self::Output {
        let a = self.coefficients();
        let b = rhs.coefficients();
        let mut sum = [0.0; 8];
        for k in 0..8 {
            sum[k] = a[k] + b[k];
        }
        // The result keeps the union support even if a coefficient cancels
        // to exactly zero; reduction is never applied implicitly.
        Cliffor::from_coefficients(self.grades() | rhs.grades(), sum)
    }
}

impl Sub<&Cliffor> for &Cliffor {
    type Output = Cliffor;

    fn sub(self, rhs: &Cliffor) -> Self::Output {
        self + &-rhs
    }
}

impl Mul<&Cliffor> for &Cliffor {
    type Output = Cliffor;

    fn mul(self, rhs: &Cliffor) -> Self::Output {
        // Fast paths for the single-grade hot pairs.
        match (*self, *rhs) {
            (Cliffor::V3 { a1, a2, a3 }, Cliffor::V3 { a1: b1, a2: b2, a3: b3 }) => {
                // v·w plus the bivector dual to v×w.
                let a = [a1, a2, a3];
                let b = [b1, b2, b3];
                let x = util::cross3(a, b);
                return Cliffor::h(util::dot3(a, b), x[0], x[1], x[2]);
            }
            (
                Cliffor::Bv { a23, a31, a12 },
                Cliffor::Bv { a23: b23, a31: b31, a12: b12 },
            ) => {
                // The bivector basis is a quaternion triple: -B·C - (B×C)*.
                let a = [a23, a31, a12];
                let b = [b23, b31, b12];
                let x = util::cross3(a, b);
                return Cliffor::h(-util::dot3(a, b), -x[0], -x[1], -x[2]);
            }
            _ => (),
        }

        let product = self.to_pauli().mul(&rhs.to_pauli());
        // The result variant is chosen symbolically from the operand
        // variants, so coefficients outside its support are exactly zero.
        Cliffor::from_coefficients(
            Grades::product(self.grades(), rhs.grades()),
            product.coefficients(),
        )
    }
}

impl Div<&Cliffor> for &Cliffor {
    type Output = Cliffor;

    fn div(self, rhs: &Cliffor) -> Self::Output {
        self * &rhs.recip()
    }
}

impl_forward_bin_ops_to_ref! {
    impl Add for Cliffor { fn add() }
    impl Sub for Cliffor { fn sub() }
    impl Mul for Cliffor { fn mul() }
    impl Div for Cliffor { fn div() }
}

impl Mul<Float> for Cliffor {
    type Output = Cliffor;

    fn mul(self, rhs: Float) -> Self::Output {
        let c = self.coefficients().map(|x| x * rhs);
        Self::from_coefficients(self.grades(), c)
    }
}
impl Mul<Float> for &Cliffor {
    type Output = Cliffor;

    fn mul(self, rhs: Float) -> Self::Output {
        *self * rhs
    }
}
impl Div<Float> for Cliffor {
    type Output = Cliffor;

    fn div(self, rhs: Float) -> Self::Output {
        let c = self.coefficients().map(|x| x / rhs);
        Self::from_coefficients(self.grades(), c)
    }
}
impl Div<Float> for &Cliffor {
    type Output = Cliffor;

    fn div(self, rhs: Float) -> Self::Output {
        *self / rhs
    }
}

impl AddAssign for Cliffor {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign for Cliffor {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign for Cliffor {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl MulAssign<Float> for Cliffor {
    fn mul_assign(&mut self, rhs: Float) {
        *self = *self * rhs;
    }
}
impl DivAssign<Float> for Cliffor {
    fn div_assign(&mut self, rhs: Float) {
        *self = *self / rhs;
    }
}

impl Cliffor {
    /// Returns the multiplicative inverse.
    ///
    /// Zero-norm input degrades to IEEE infinities or NaNs (matching the
    /// pole of `1/x` at 0), never to an error. The division sub-algebras
    /// (scalar, complex, quaternion shapes) use their conjugate-over-squared-
    /// norm forms; single-grade and `x·bar(x)`-scalar variants divide their
    /// Clifford conjugate by that scalar; the general shapes go through the
    /// spectral engine.
    #[must_use]
    pub fn recip(&self) -> Self {
        match *self {
            Self::R { a0 } => Self::r(a0.recip()),
            Self::C { a0, a123 } => {
                let n = a0 * a0 + a123 * a123;
                Self::c(a0 / n, -a123 / n)
            }
            Self::H { a0, a23, a31, a12 } => {
                let n = a0 * a0 + a23 * a23 + a31 * a31 + a12 * a12;
                Self::h(a0 / n, -a23 / n, -a31 / n, -a12 / n)
            }
            Self::V3 { .. }
            | Self::Bv { .. }
            | Self::I { .. }
            | Self::Pv { .. }
            | Self::Odd { .. }
            | Self::Tpv { .. } => {
                // For these variants x·bar(x) is a pure scalar.
                let conj = self.bar();
                let n = (self * conj).to_r().coefficients()[0];
                conj / n
            }
            Self::Bpv { .. } | Self::Aps { .. } => {
                self.spectral_map(|z| z.inv(), |z| -(z * z).inv())
            }
        }
    }
}
