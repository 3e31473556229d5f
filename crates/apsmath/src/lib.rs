//! Clifford algebra Cl(3,0), the algebra of physical space.
//!
//! The one value type is [`Cliffor`], a closed tagged union over the eleven
//! grade-combination variants of the 8-dimensional algebra (scalar, vector,
//! bivector, trivector, and their useful sums). Arithmetic operators follow
//! the non-commutative graded structure; transcendental functions (`exp`,
//! `log`, trigonometric and hyperbolic families) are computed by spectral
//! decomposition into idempotent projectors, with a Jordan-normal-form
//! fallback for nilpotent-like elements.

pub use {approx, num_complex, num_traits as num, rand};

/// Floating-point type used for coefficients.
pub type Float = f64;

/// Tolerance used for comparisons, classification, and grade reduction:
/// 128 times the unit roundoff of `f64` (2⁻⁵³), i.e. 2⁻⁴⁶, applied as an
/// absolute threshold on norms.
pub const TOL: Float = 128.0 * (0.5 * Float::EPSILON);

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::TOL)
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

#[macro_use]
mod impl_macros;

pub mod approx_cmp;
pub mod cliffor;
pub mod grades;
pub mod packed;
pub mod random;
pub mod util;

pub use cliffor::Cliffor;
pub use grades::Grades;
pub use packed::PackedCliffor;
pub use random::MagnitudeRange;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::approx_cmp::*;
    pub use crate::cliffor::Cliffor;
    pub use crate::grades::Grades;
    pub use crate::packed::PackedCliffor;
    pub use crate::random::MagnitudeRange;
    pub use crate::{Float, TOL};
}
