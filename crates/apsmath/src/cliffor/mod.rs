//! The [`Cliffor`] value type and its grade projections.

use crate::grades::Grades;
use crate::Float;

mod arith;
mod display;
mod norm;
mod pauli;
mod spectral;

/// An element of Cl(3,0), the geometric algebra of physical space.
///
/// The algebra is 8-dimensional over the reals, with one basis element per
/// subset of {e1, e2, e3}. A `Cliffor` stores only the grades its variant
/// supports; every variant embeds faithfully into the full 8-coefficient
/// space `[a0, a1, a2, a3, a23, a31, a12, a123]`, with missing coefficients
/// implicitly zero. Two cliffors are equal iff their full embeddings are
/// equal field by field, so e.g. `Cliffor::r(0.0) == Cliffor::i(0.0)`.
///
/// All operations are pure functions returning new values.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cliffor {
    /// Scalar (grade 0).
    R {
        /// Coefficient of 1.
        a0: Float,
    },
    /// Vector (grade 1).
    V3 {
        /// Coefficient of e1.
        a1: Float,
        /// Coefficient of e2.
        a2: Float,
        /// Coefficient of e3.
        a3: Float,
    },
    /// Bivector (grade 2).
    Bv {
        /// Coefficient of e23.
        a23: Float,
        /// Coefficient of e31.
        a31: Float,
        /// Coefficient of e12.
        a12: Float,
    },
    /// Trivector, also called the pseudoscalar (grade 3).
    I {
        /// Coefficient of e123.
        a123: Float,
    },
    /// Paravector (grades 0 and 1).
    Pv {
        /// Coefficient of 1.
        a0: Float,
        /// Coefficient of e1.
        a1: Float,
        /// Coefficient of e2.
        a2: Float,
        /// Coefficient of e3.
        a3: Float,
    },
    /// Scalar plus bivector (grades 0 and 2); the quaternion sub-algebra.
    H {
        /// Coefficient of 1.
        a0: Float,
        /// Coefficient of e23.
        a23: Float,
        /// Coefficient of e31.
        a31: Float,
        /// Coefficient of e12.
        a12: Float,
    },
    /// Scalar plus trivector (grades 0 and 3); the complex sub-algebra.
    C {
        /// Coefficient of 1.
        a0: Float,
        /// Coefficient of e123.
        a123: Float,
    },
    /// Vector plus bivector (grades 1 and 2); a "biparavector".
    Bpv {
        /// Coefficient of e1.
        a1: Float,
        /// Coefficient of e2.
        a2: Float,
        /// Coefficient of e3.
        a3: Float,
        /// Coefficient of e23.
        a23: Float,
        /// Coefficient of e31.
        a31: Float,
        /// Coefficient of e12.
        a12: Float,
    },
    /// Vector plus trivector (grades 1 and 3); the odd sub-space.
    Odd {
        /// Coefficient of e1.
        a1: Float,
        /// Coefficient of e2.
        a2: Float,
        /// Coefficient of e3.
        a3: Float,
        /// Coefficient of e123.
        a123: Float,
    },
    /// Bivector plus trivector (grades 2 and 3).
    Tpv {
        /// Coefficient of e23.
        a23: Float,
        /// Coefficient of e31.
        a31: Float,
        /// Coefficient of e12.
        a12: Float,
        /// Coefficient of e123.
        a123: Float,
    },
    /// A general element with all four grades.
    Aps {
        /// Coefficient of 1.
        a0: Float,
        /// Coefficient of e1.
        a1: Float,
        /// Coefficient of e2.
        a2: Float,
        /// Coefficient of e3.
        a3: Float,
        /// Coefficient of e23.
        a23: Float,
        /// Coefficient of e31.
        a31: Float,
        /// Coefficient of e12.
        a12: Float,
        /// Coefficient of e123.
        a123: Float,
    },
}

impl Default for Cliffor {
    fn default() -> Self {
        Self::zero()
    }
}

/// Grade-specific constructors.
impl Cliffor {
    /// Constructs the scalar zero.
    pub const fn zero() -> Self {
        Self::r(0.0)
    }
    /// Constructs the scalar one, the multiplicative identity.
    pub const fn one() -> Self {
        Self::r(1.0)
    }

    /// Constructs a scalar.
    pub const fn r(a0: Float) -> Self {
        Self::R { a0 }
    }
    /// Constructs a vector.
    pub const fn v3(a1: Float, a2: Float, a3: Float) -> Self {
        Self::V3 { a1, a2, a3 }
    }
    /// Constructs a bivector.
    pub const fn bv(a23: Float, a31: Float, a12: Float) -> Self {
        Self::Bv { a23, a31, a12 }
    }
    /// Constructs a trivector.
    pub const fn i(a123: Float) -> Self {
        Self::I { a123 }
    }
    /// Constructs a paravector.
    pub const fn pv(a0: Float, a1: Float, a2: Float, a3: Float) -> Self {
        Self::Pv { a0, a1, a2, a3 }
    }
    /// Constructs a scalar-plus-bivector (quaternion-shaped) element.
    pub const fn h(a0: Float, a23: Float, a31: Float, a12: Float) -> Self {
        Self::H { a0, a23, a31, a12 }
    }
    /// Constructs a scalar-plus-trivector (complex-shaped) element.
    pub const fn c(a0: Float, a123: Float) -> Self {
        Self::C { a0, a123 }
    }
    /// Constructs a vector-plus-bivector element.
    pub const fn bpv(
        a1: Float,
        a2: Float,
        a3: Float,
        a23: Float,
        a31: Float,
        a12: Float,
    ) -> Self {
        Self::Bpv { a1, a2, a3, a23, a31, a12 }
    }
    /// Constructs an odd (vector-plus-trivector) element.
    pub const fn odd(a1: Float, a2: Float, a3: Float, a123: Float) -> Self {
        Self::Odd { a1, a2, a3, a123 }
    }
    /// Constructs a bivector-plus-trivector element.
    pub const fn tpv(a23: Float, a31: Float, a12: Float, a123: Float) -> Self {
        Self::Tpv { a23, a31, a12, a123 }
    }
    /// Constructs a general element from all eight coefficients.
    #[allow(clippy::too_many_arguments)]
    pub const fn aps(
        a0: Float,
        a1: Float,
        a2: Float,
        a3: Float,
        a23: Float,
        a31: Float,
        a12: Float,
        a123: Float,
    ) -> Self {
        Self::Aps { a0, a1, a2, a3, a23, a31, a12, a123 }
    }
}

impl Cliffor {
    /// Returns the set of grades supported by this value's variant.
    ///
    /// This is the variant's support, not the set of numerically nonzero
    /// grades; `Cliffor::pv(1.0, 0.0, 0.0, 0.0)` still reports
    /// `SCALAR | VECTOR`.
    pub fn grades(&self) -> Grades {
        match self {
            Self::R { .. } => Grades::SCALAR,
            Self::V3 { .. } => Grades::VECTOR,
            Self::Bv { .. } => Grades::BIVECTOR,
            Self::I { .. } => Grades::TRIVECTOR,
            Self::Pv { .. } => Grades::SCALAR | Grades::VECTOR,
            Self::H { .. } => Grades::SCALAR | Grades::BIVECTOR,
            Self::C { .. } => Grades::SCALAR | Grades::TRIVECTOR,
            Self::Bpv { .. } => Grades::VECTOR | Grades::BIVECTOR,
            Self::Odd { .. } => Grades::VECTOR | Grades::TRIVECTOR,
            Self::Tpv { .. } => Grades::BIVECTOR | Grades::TRIVECTOR,
            Self::Aps { .. } => Grades::ALL,
        }
    }

    /// Returns the full 8-coefficient embedding
    /// `[a0, a1, a2, a3, a23, a31, a12, a123]`, with zeros for grades the
    /// variant does not support.
    pub fn coefficients(&self) -> [Float; 8] {
        match *self {
            Self::R { a0 } => [a0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            Self::V3 { a1, a2, a3 } => [0.0, a1, a2, a3, 0.0, 0.0, 0.0, 0.0],
            Self::Bv { a23, a31, a12 } => [0.0, 0.0, 0.0, 0.0, a23, a31, a12, 0.0],
            Self::I { a123 } => [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, a123],
            Self::Pv { a0, a1, a2, a3 } => [a0, a1, a2, a3, 0.0, 0.0, 0.0, 0.0],
            Self::H { a0, a23, a31, a12 } => [a0, 0.0, 0.0, 0.0, a23, a31, a12, 0.0],
            Self::C { a0, a123 } => [a0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, a123],
            Self::Bpv { a1, a2, a3, a23, a31, a12 } => [0.0, a1, a2, a3, a23, a31, a12, 0.0],
            Self::Odd { a1, a2, a3, a123 } => [0.0, a1, a2, a3, 0.0, 0.0, 0.0, a123],
            Self::Tpv { a23, a31, a12, a123 } => [0.0, 0.0, 0.0, 0.0, a23, a31, a12, a123],
            Self::Aps { a0, a1, a2, a3, a23, a31, a12, a123 } => {
                [a0, a1, a2, a3, a23, a31, a12, a123]
            }
        }
    }

    /// Builds the minimal variant whose support is exactly `grades`, reading
    /// coefficients from a full embedding. Coefficients outside `grades` are
    /// discarded.
    ///
    /// This is the "minimal variant spanning a grade set" rule used by
    /// addition and the geometric product; note that it never inspects the
    /// coefficients themselves.
    pub fn from_coefficients(grades: Grades, c: [Float; 8]) -> Self {
        let s = Grades::SCALAR;
        let v = Grades::VECTOR;
        let b = Grades::BIVECTOR;
        let t = Grades::TRIVECTOR;
        match grades {
            g if g == Grades::empty() || g == s => Self::r(c[0]),
            g if g == v => Self::v3(c[1], c[2], c[3]),
            g if g == b => Self::bv(c[4], c[5], c[6]),
            g if g == t => Self::i(c[7]),
            g if g == s | v => Self::pv(c[0], c[1], c[2], c[3]),
            g if g == s | b => Self::h(c[0], c[4], c[5], c[6]),
            g if g == s | t => Self::c(c[0], c[7]),
            g if g == v | b => Self::bpv(c[1], c[2], c[3], c[4], c[5], c[6]),
            g if g == v | t => Self::odd(c[1], c[2], c[3], c[7]),
            g if g == b | t => Self::tpv(c[4], c[5], c[6], c[7]),
            // There is no three-grade variant, so anything bigger is APS.
            _ => Self::aps(c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]),
        }
    }
}

/// Grade projections ("casts"). Each maps an arbitrary cliffor to the named
/// variant, keeping the coefficients of grades the target supports and
/// discarding the rest. Idempotent; lossless whenever the input's support is
/// a subset of the target's.
impl Cliffor {
    /// Projects to the scalar variant.
    #[must_use]
    pub fn to_r(&self) -> Self {
        Self::r(self.coefficients()[0])
    }
    /// Projects to the vector variant.
    #[must_use]
    pub fn to_v3(&self) -> Self {
        let c = self.coefficients();
        Self::v3(c[1], c[2], c[3])
    }
    /// Projects to the bivector variant.
    #[must_use]
    pub fn to_bv(&self) -> Self {
        let c = self.coefficients();
        Self::bv(c[4], c[5], c[6])
    }
    /// Projects to the trivector variant.
    #[must_use]
    pub fn to_i(&self) -> Self {
        Self::i(self.coefficients()[7])
    }
    /// Projects to the paravector variant.
    #[must_use]
    pub fn to_pv(&self) -> Self {
        let c = self.coefficients();
        Self::pv(c[0], c[1], c[2], c[3])
    }
    /// Projects to the scalar-plus-bivector variant.
    #[must_use]
    pub fn to_h(&self) -> Self {
        let c = self.coefficients();
        Self::h(c[0], c[4], c[5], c[6])
    }
    /// Projects to the scalar-plus-trivector variant.
    #[must_use]
    pub fn to_c(&self) -> Self {
        let c = self.coefficients();
        Self::c(c[0], c[7])
    }
    /// Projects to the vector-plus-bivector variant.
    #[must_use]
    pub fn to_bpv(&self) -> Self {
        let c = self.coefficients();
        Self::bpv(c[1], c[2], c[3], c[4], c[5], c[6])
    }
    /// Projects to the odd variant.
    #[must_use]
    pub fn to_odd(&self) -> Self {
        let c = self.coefficients();
        Self::odd(c[1], c[2], c[3], c[7])
    }
    /// Projects to the bivector-plus-trivector variant.
    #[must_use]
    pub fn to_tpv(&self) -> Self {
        let c = self.coefficients();
        Self::tpv(c[4], c[5], c[6], c[7])
    }
    /// Projects to the full 8-coefficient variant. Always lossless.
    #[must_use]
    pub fn to_aps(&self) -> Self {
        let c = self.coefficients();
        Self::aps(c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7])
    }
}

/// Conjugations.
impl Cliffor {
    /// Returns the Clifford conjugate, which negates the grade-1 and grade-2
    /// components. An involution and an anti-automorphism of the product.
    #[must_use]
    pub fn bar(&self) -> Self {
        let [a0, a1, a2, a3, a23, a31, a12, a123] = self.coefficients();
        Self::from_coefficients(
            self.grades(),
            [a0, -a1, -a2, -a3, -a23, -a31, -a12, a123],
        )
    }

    /// Returns the complex (Hermitian) conjugate, which negates the grade-2
    /// and grade-3 components. An involution and an anti-automorphism of the
    /// product.
    #[must_use]
    pub fn dag(&self) -> Self {
        let [a0, a1, a2, a3, a23, a31, a12, a123] = self.coefficients();
        Self::from_coefficients(
            self.grades(),
            [a0, a1, a2, a3, -a23, -a31, -a12, -a123],
        )
    }
}

impl Cliffor {
    /// The vector (grade 1) components as a 3-array.
    pub(crate) fn vector3(&self) -> [Float; 3] {
        let c = self.coefficients();
        [c[1], c[2], c[3]]
    }

    /// The bivector (grade 2) components as a 3-array, read as the vector
    /// dual to the bivector: `[a23, a31, a12]`.
    pub(crate) fn bivector3(&self) -> [Float; 3] {
        let c = self.coefficients();
        [c[4], c[5], c[6]]
    }
}
