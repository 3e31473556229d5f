//! Approximate comparison functions that automatically use [`TOL`].

pub use approx::AbsDiffEq;
use num_traits::Zero;

use crate::{Float, TOL};

/// Compares two numbers, but considers them equal if they are separated by
/// less than [`TOL`].
///
/// Handles infinity specially.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T) -> bool {
    // use native float equality to handle infinities
    a == b || approx::abs_diff_eq!(a, b, epsilon = TOL)
}

/// Compares two numbers, but considers them equal if they are separated by
/// less than [`TOL`].
pub fn approx_cmp<T: AbsDiffEq<Epsilon = Float> + PartialOrd>(a: &T, b: &T) -> std::cmp::Ordering {
    if approx_eq(a, b) {
        std::cmp::Ordering::Equal
    } else if a < b {
        std::cmp::Ordering::Less
    } else {
        std::cmp::Ordering::Greater
    }
}

/// Returns whether `x` has an absolute value greater than [`TOL`].
pub fn is_approx_nonzero<T: AbsDiffEq<Epsilon = Float> + Zero>(x: &T) -> bool {
    !approx_eq(x, &T::zero())
}
