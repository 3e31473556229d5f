//! Internal complex-matrix model of Cl(3,0).
//!
//! Cl(3,0) is isomorphic to the algebra of 2×2 complex matrices: writing
//! `i = e123` (central, squares to -1) and `σk = ek`, every element is
//! `z0 + z·σ` with a complex scalar `z0 = a0 + i·a123` and a complex
//! 3-vector `zk = ak + i·bk`, where `b = (a23, a31, a12)` collects the
//! bivector coefficients (`e23 = i·e1` and cyclic). The geometric product
//! and the singular-value norms have short closed forms in this model, so
//! the arithmetic and spectral engines both go through it.

use num_complex::Complex64 as Complex;

use super::Cliffor;
use crate::Float;

/// The Pauli (2×2 complex matrix) form of a cliffor: `z0 + z·σ`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct PauliRep {
    /// Complex scalar part `a0 + i·a123`.
    pub s: Complex,
    /// Complex vector part `(a + i·b)·σ`.
    pub v: [Complex; 3],
}

impl PauliRep {
    /// Geometric product. With `x = z0 + z·σ` and `y = w0 + w·σ`:
    /// `x·y = (z0·w0 + z·w) + (z0·w + w0·z + i·(z×w))·σ`.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        let z0 = self.s;
        let w0 = rhs.s;
        let z = self.v;
        let w = rhs.v;
        let i = Complex::new(0.0, 1.0);
        let cross = [
            z[1] * w[2] - z[2] * w[1],
            z[2] * w[0] - z[0] * w[2],
            z[0] * w[1] - z[1] * w[0],
        ];
        Self {
            s: z0 * w0 + z[0] * w[0] + z[1] * w[1] + z[2] * w[2],
            v: [
                z0 * w[0] + w0 * z[0] + i * cross[0],
                z0 * w[1] + w0 * z[1] + i * cross[1],
                z0 * w[2] + w0 * z[2] + i * cross[2],
            ],
        }
    }

    /// The full 8-coefficient embedding of this element.
    pub fn coefficients(&self) -> [Float; 8] {
        [
            self.s.re,
            self.v[0].re,
            self.v[1].re,
            self.v[2].re,
            self.v[0].im,
            self.v[1].im,
            self.v[2].im,
            self.s.im,
        ]
    }
}

impl Cliffor {
    /// Converts to the Pauli representation.
    pub(crate) fn to_pauli(&self) -> PauliRep {
        let [a0, a1, a2, a3, a23, a31, a12, a123] = self.coefficients();
        PauliRep {
            s: Complex::new(a0, a123),
            v: [
                Complex::new(a1, a23),
                Complex::new(a2, a31),
                Complex::new(a3, a12),
            ],
        }
    }
}
