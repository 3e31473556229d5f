//! Human-readable formatting.
//!
//! Every term of the variant's grade support is printed in embedding order,
//! so the output shape is deterministic per variant. Real basis labels are
//! `e0..e3`; the bivector coefficients `a23, a31, a12` print against the
//! imaginary labels `i*e1, i*e2, i*e3` (`e23 = i·e1` and cyclic) and the
//! trivector against `i*e0`.

use std::fmt;

use itertools::Itertools;

use super::Cliffor;
use crate::grades::Grades;

/// `(basis label, whether the term is an imaginary multiple of it)` for each
/// slot of the 8-coefficient embedding.
const TERM_LABELS: [(&str, bool); 8] = [
    ("e0", false),
    ("e1", false),
    ("e2", false),
    ("e3", false),
    ("e1", true),
    ("e2", true),
    ("e3", true),
    ("e0", true),
];

/// The grade owning each slot of the embedding.
const TERM_GRADES: [Grades; 8] = [
    Grades::SCALAR,
    Grades::VECTOR,
    Grades::VECTOR,
    Grades::VECTOR,
    Grades::BIVECTOR,
    Grades::BIVECTOR,
    Grades::BIVECTOR,
    Grades::TRIVECTOR,
];

impl fmt::Display for Cliffor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grades = self.grades();
        let c = self.coefficients();
        let terms = (0..8usize)
            .filter(|&k| grades.contains(TERM_GRADES[k]))
            .map(|k| {
                let (label, imag) = TERM_LABELS[k];
                match imag {
                    false => format!("{}*{}", c[k], label),
                    true => format!("{}i*{}", c[k], label),
                }
            })
            .join(" + ");
        f.write_str(&terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(Cliffor::r(2.0).to_string(), "2*e0");
        assert_eq!(Cliffor::v3(1.0, -2.0, 0.0).to_string(), "1*e1 + -2*e2 + 0*e3");
        assert_eq!(Cliffor::bv(3.0, 0.0, 0.0).to_string(), "3i*e1 + 0i*e2 + 0i*e3");
        assert_eq!(Cliffor::i(-1.5).to_string(), "-1.5i*e0");
        assert_eq!(Cliffor::c(1.0, 2.0).to_string(), "1*e0 + 2i*e0");
    }
}
