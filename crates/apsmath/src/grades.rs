//! Sets of grades present in a Cl(3,0) element.

use bitflags::bitflags;

bitflags! {
    /// Set of grades spanned by a [`Cliffor`](crate::Cliffor) variant.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Grades: u8 {
        /// Grade 0 (scalar)
        const SCALAR = 1 << 0;
        /// Grade 1 (vector)
        const VECTOR = 1 << 1;
        /// Grade 2 (bivector)
        const BIVECTOR = 1 << 2;
        /// Grade 3 (trivector / pseudoscalar)
        const TRIVECTOR = 1 << 3;
    }
}

impl Grades {
    /// All four grades.
    pub const ALL: Self = Self::all();

    /// Returns the grades that can appear in the geometric product of a
    /// grade-`a` element and a grade-`b` element, where `a` and `b` are
    /// single grades 0..=3.
    ///
    /// This is the symbolic Cl(3,0) grade table: the product of a grade-j and
    /// a grade-k homogeneous element spans grades |j-k| and (when within
    /// range) j+k and intermediate steps of 2; in three dimensions that
    /// collapses to the cases below.
    fn single_product(a: u8, b: u8) -> Grades {
        match (a.min(b), a.max(b)) {
            (0, g) => Grades::from_bits_truncate(1 << g),
            (1, 1) | (2, 2) => Grades::SCALAR | Grades::BIVECTOR,
            (1, 2) => Grades::VECTOR | Grades::TRIVECTOR,
            (1, 3) => Grades::BIVECTOR,
            (2, 3) => Grades::VECTOR,
            (3, 3) => Grades::SCALAR,
            _ => unreachable!("grades out of range"),
        }
    }

    /// Returns the grade support of the geometric product of an element
    /// supported on `lhs` with an element supported on `rhs`.
    ///
    /// The result is symbolic (per variant pair, not per value): it is the
    /// union over all pairs of present grades, independent of whether any
    /// particular coefficient happens to be zero.
    pub fn product(lhs: Self, rhs: Self) -> Self {
        let mut ret = Grades::empty();
        for a in 0..4u8 {
            if lhs.bits() & (1 << a) == 0 {
                continue;
            }
            for b in 0..4u8 {
                if rhs.bits() & (1 << b) != 0 {
                    ret |= Self::single_product(a, b);
                }
            }
        }
        ret
    }

    /// Returns whether this set contains only the scalar and/or trivector
    /// grade, i.e. lies in the complex-number sub-algebra.
    pub fn is_complex_subalgebra(self) -> bool {
        (Self::VECTOR | Self::BIVECTOR).intersection(self).is_empty()
    }

    /// The grade support of the minimal variant able to represent this set:
    /// the set itself for up to two grades (the empty set collapses to the
    /// scalar), and all four grades beyond that, since there is no
    /// three-grade variant.
    pub fn spanning_variant(self) -> Self {
        match self.bits().count_ones() {
            0 => Self::SCALAR,
            1 | 2 => self,
            _ => Self::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_grades() {
        let v = Grades::VECTOR;
        let bv = Grades::BIVECTOR;
        let i = Grades::TRIVECTOR;
        assert_eq!(Grades::product(v, v), Grades::SCALAR | bv);
        assert_eq!(Grades::product(v, bv), v | i);
        assert_eq!(Grades::product(bv, i), v);
        assert_eq!(Grades::product(i, i), Grades::SCALAR);
        assert_eq!(Grades::product(Grades::SCALAR, v | bv), v | bv);
        assert_eq!(Grades::product(v | bv, v | bv), Grades::ALL);
    }

    #[test]
    fn test_spanning_variant() {
        assert_eq!(Grades::empty().spanning_variant(), Grades::SCALAR);
        assert_eq!(Grades::VECTOR.spanning_variant(), Grades::VECTOR);
        let sv = Grades::SCALAR | Grades::VECTOR;
        assert_eq!(sv.spanning_variant(), sv);
        assert_eq!((sv | Grades::BIVECTOR).spanning_variant(), Grades::ALL);
    }

    #[test]
    fn test_complex_subalgebra() {
        assert!(Grades::SCALAR.is_complex_subalgebra());
        assert!((Grades::SCALAR | Grades::TRIVECTOR).is_complex_subalgebra());
        assert!(!(Grades::SCALAR | Grades::VECTOR).is_complex_subalgebra());
    }
}
