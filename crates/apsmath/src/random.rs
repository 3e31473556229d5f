//! Pseudo-random cliffors for testing and sampling.

use rand::distr::Distribution;
use rand::Rng;

use crate::grades::Grades;
use crate::{Cliffor, Float};

/// The grade support of each of the eleven variants, in a fixed order.
pub(crate) const VARIANT_GRADES: [Grades; 11] = [
    Grades::SCALAR,
    Grades::VECTOR,
    Grades::BIVECTOR,
    Grades::TRIVECTOR,
    Grades::SCALAR.union(Grades::VECTOR),
    Grades::SCALAR.union(Grades::BIVECTOR),
    Grades::SCALAR.union(Grades::TRIVECTOR),
    Grades::VECTOR.union(Grades::BIVECTOR),
    Grades::VECTOR.union(Grades::TRIVECTOR),
    Grades::BIVECTOR.union(Grades::TRIVECTOR),
    Grades::ALL,
];

/// Distribution of cliffors with magnitude (largest singular value) bounded
/// by a range.
///
/// Sampling picks one of the eleven variants uniformly, a magnitude
/// uniformly in `[lo, hi)`, and a uniformly random direction and sign for
/// the variant's coefficients. Given the same generator state the sampled
/// value is deterministic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MagnitudeRange {
    lo: Float,
    hi: Float,
}

impl MagnitudeRange {
    /// Constructs a distribution over values whose magnitude lies in
    /// `[|lo|, |hi|)`. The bounds may be given in either order.
    pub fn new(lo: Float, hi: Float) -> Self {
        let (lo, hi) = (lo.abs(), hi.abs());
        Self {
            lo: Float::min(lo, hi),
            hi: Float::max(lo, hi),
        }
    }
}

impl Distribution<Cliffor> for MagnitudeRange {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cliffor {
        let grades = VARIANT_GRADES[rng.random_range(0..VARIANT_GRADES.len())];
        let mag = self.lo + rng.random::<Float>() * (self.hi - self.lo);

        loop {
            let mut c = [0.0; 8];
            for (k, coefficient) in c.iter_mut().enumerate() {
                if grades.contains(grade_of_slot(k)) {
                    *coefficient = standard_normal(rng);
                }
            }
            let direction = Cliffor::from_coefficients(grades, c);
            let norm = direction.mag();
            // Zero draws have probability zero but would break the rescale.
            if norm > 0.0 {
                return direction * (mag / norm);
            }
        }
    }
}

/// The grade owning slot `k` of the 8-coefficient embedding.
fn grade_of_slot(k: usize) -> Grades {
    match k {
        0 => Grades::SCALAR,
        1..=3 => Grades::VECTOR,
        4..=6 => Grades::BIVECTOR,
        _ => Grades::TRIVECTOR,
    }
}

/// A standard normal draw via Box–Muller.
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Float {
    loop {
        let u: Float = rng.random();
        if u > 0.0 {
            let v: Float = rng.random();
            return (-2.0 * u.ln()).sqrt() * (std::f64::consts::TAU * v).cos();
        }
    }
}
