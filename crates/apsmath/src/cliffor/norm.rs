//! Singular-value norms, sign, magnitude ordering, and grade reduction.

use std::cmp::Ordering;

use float_ord::FloatOrd;

use super::Cliffor;
use crate::grades::Grades;
use crate::{Float, TOL};

impl Cliffor {
    /// Both singular values of the 2×2 matrix representation, largest first.
    ///
    /// For `x = z0 + z·σ`, `x†x = S + w·σ` with `S` the sum of squares of
    /// all eight coefficients and `w = 2(a0·a + a123·b − a×b)`; the squared
    /// singular values are `S ± |w|`.
    fn singular_values(&self) -> (Float, Float) {
        let [a0, a1, a2, a3, a23, a31, a12, a123] = self.coefficients();
        let a = [a1, a2, a3];
        let b = [a23, a31, a12];
        let s = a0 * a0 + a123 * a123 + crate::util::dot3(a, a) + crate::util::dot3(b, b);
        let x = crate::util::cross3(a, b);
        let w = [
            2.0 * (a0 * a[0] + a123 * b[0] - x[0]),
            2.0 * (a0 * a[1] + a123 * b[1] - x[1]),
            2.0 * (a0 * a[2] + a123 * b[2] - x[2]),
        ];
        let wn = crate::util::norm3(w);
        ((s + wn).sqrt(), Float::max(s - wn, 0.0).sqrt())
    }

    /// The largest singular value as a plain float.
    pub fn mag(&self) -> Float {
        self.singular_values().0
    }
    /// The smallest singular value as a plain float.
    pub fn lsv_mag(&self) -> Float {
        self.singular_values().1
    }

    /// The largest singular value, wrapped as a scalar cliffor.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::r(self.mag())
    }
    /// The smallest singular value, wrapped as a scalar cliffor.
    #[must_use]
    pub fn lsv(&self) -> Self {
        Self::r(self.lsv_mag())
    }

    /// Returns `self` scaled to unit magnitude, keeping the variant.
    ///
    /// A value whose magnitude is exactly `0.0` (which forces every
    /// coefficient to be zero) is returned unchanged; near-zero values are
    /// NOT treated as zero here, since the spectral engine relies on exact
    /// semantics.
    #[must_use]
    pub fn signum(&self) -> Self {
        let mag = self.mag();
        if mag == 0.0 { *self } else { *self / mag }
    }

    /// Compares two cliffors by largest singular value, breaking ties with
    /// the smallest singular value.
    ///
    /// This is a total preorder, not a total order: distinct values related
    /// by a unitary factor share singular values and compare `Equal` without
    /// being `==`. It deliberately does not back a `PartialOrd` impl, which
    /// would have to agree with `PartialEq`. NaN magnitudes are totalized by
    /// [`FloatOrd`].
    pub fn magnitude_cmp(&self, other: &Self) -> Ordering {
        let (a_max, a_min) = self.singular_values();
        let (b_max, b_min) = other.singular_values();
        FloatOrd(a_max)
            .cmp(&FloatOrd(b_max))
            .then_with(|| FloatOrd(a_min).cmp(&FloatOrd(b_min)))
    }

    /// Simplifies to the sparsest variant that represents this value up to
    /// tolerance: every grade component whose Euclidean norm is within
    /// [`TOL`](crate::TOL) of zero is dropped, and the remaining grades pick
    /// the minimal variant.
    ///
    /// Idempotent, and never grows the grade support. Grades containing NaN
    /// or infinite coefficients are always kept.
    #[must_use]
    pub fn reduce(&self) -> Self {
        let c = self.coefficients();
        let component_norms = [
            (Grades::SCALAR, c[0].abs()),
            (Grades::VECTOR, crate::util::norm3([c[1], c[2], c[3]])),
            (Grades::BIVECTOR, crate::util::norm3([c[4], c[5], c[6]])),
            (Grades::TRIVECTOR, c[7].abs()),
        ];

        let mut mask = Grades::empty();
        for (grade, norm) in component_norms {
            // `!(norm <= TOL)` rather than `norm > TOL` so NaN survives.
            if self.grades().contains(grade) && !(norm <= TOL) {
                mask |= grade;
            }
        }

        let mut out = [0.0; 8];
        if mask.contains(Grades::SCALAR) {
            out[0] = c[0];
        }
        if mask.contains(Grades::VECTOR) {
            out[1..4].copy_from_slice(&c[1..4]);
        }
        if mask.contains(Grades::BIVECTOR) {
            out[4..7].copy_from_slice(&c[4..7]);
        }
        if mask.contains(Grades::TRIVECTOR) {
            out[7] = c[7];
        }
        Self::from_coefficients(mask, out)
    }
}
