//! Spectral decomposition and the transcendental function family.
//!
//! A function `f` of a general element is computed by splitting the element
//! into a pair of complementary idempotent projectors and applying `f` to
//! the two complex eigenvalues. The split needs the vector and bivector
//! parts to share a real direction ("colinear"); elements where the two
//! parts are orthogonal with equal magnitude are nilpotent-like (the
//! projector split is singular) and take a Jordan-normal-form fallback,
//! and everything else is first conjugated by a non-unitary boost factor
//! that makes it colinear. The boost happens at most once; the boosted form
//! is colinear by construction.

use num_complex::Complex64 as Complex;

use super::Cliffor;
use crate::util;
use crate::{Float, TOL};

/// Terminal branch of the decomposition state machine.
enum Class {
    /// No vector or bivector content; `f` applies directly in the complex
    /// scalar ⊕ trivector sub-algebra.
    Subalgebra,
    /// Vector and bivector parts share a real direction (or one is absent).
    Colinear,
    /// Vector and bivector parts orthogonal with equal magnitude.
    Nilpotent,
    /// General element; a boost transform reduces it to the colinear case.
    NeedsBoost,
}

/// Classifies a *reduced* element.
fn classify(v: &Cliffor) -> Class {
    let a = v.vector3();
    let b = v.bivector3();
    let na = util::norm3(a);
    let nb = util::norm3(b);
    if na == 0.0 && nb == 0.0 {
        Class::Subalgebra
    } else if na == 0.0 || nb == 0.0 || v.is_colinear() {
        Class::Colinear
    } else if v.has_nilpotent_part() {
        Class::Nilpotent
    } else {
        Class::NeedsBoost
    }
}

/// The unit 3-vector giving the element's real direction: the direction of
/// the vector part if present, otherwise the bivector axis. `None` for
/// elements with neither.
fn real_direction(v: &Cliffor) -> Option<[Float; 3]> {
    let a = v.vector3();
    let na = util::norm3(a);
    if na > 0.0 {
        return Some(a.map(|x| x / na));
    }
    let b = v.bivector3();
    let nb = util::norm3(b);
    (nb > 0.0).then(|| b.map(|x| x / nb))
}

/// The complementary projector pair `½(1 ± m·σ)` for a unit direction `m`.
fn projector_pair(m: [Float; 3]) -> (Cliffor, Cliffor) {
    let p = Cliffor::pv(0.5, 0.5 * m[0], 0.5 * m[1], 0.5 * m[2]);
    (p, p.bar())
}

/// Grade projection onto the complex scalar ⊕ trivector sub-algebra.
fn spec_c(v: &Cliffor) -> Complex {
    let c = v.coefficients();
    Complex::new(c[0], c[7])
}

/// Embeds a complex number as a scalar ⊕ trivector element.
fn from_complex(z: Complex) -> Cliffor {
    Cliffor::c(z.re, z.im)
}

/// Both eigenvalues of a colinear element, reduced into `R`, `I`, or `C`.
fn colinear_eigenvalues(v: &Cliffor) -> (Cliffor, Cliffor) {
    match real_direction(v) {
        Some(m) => {
            let (p, p_bar) = projector_pair(m);
            let eig1 = spec_c(&(p * *v * p)) * 2.0;
            let eig2 = spec_c(&(p_bar * *v * p_bar)) * 2.0;
            (from_complex(eig1).reduce(), from_complex(eig2).reduce())
        }
        None => {
            let e = v.to_c().reduce();
            (e, e)
        }
    }
}

/// Applies `f` to a colinear element by eigen-reconstruction:
/// `f(eig1)·p + f(eig2)·p̄` with `eig = 2·spec(p·v·p)`.
fn colinear_apply(v: &Cliffor, f: &dyn Fn(Complex) -> Complex) -> Cliffor {
    let Some(m) = real_direction(v) else {
        return from_complex(f(spec_c(v)));
    };
    let (p, p_bar) = projector_pair(m);
    let eig1 = spec_c(&(p * *v * p)) * 2.0;
    let eig2 = spec_c(&(p_bar * *v * p_bar)) * 2.0;
    from_complex(f(eig1)) * p + from_complex(f(eig2)) * p_bar
}

/// Applies `f` to a nilpotent-like element via its Jordan normal form:
/// `f(eig) + f'(eig)·n`, where `eig` is the complex scalar part and `n` the
/// nilpotent vector ⊕ bivector part.
fn jordan_apply(
    v: &Cliffor,
    f: &dyn Fn(Complex) -> Complex,
    df: &dyn Fn(Complex) -> Complex,
) -> Cliffor {
    let eig = spec_c(v);
    let n = v.to_bpv();
    from_complex(f(eig)) + from_complex(df(eig)) * n
}

impl Cliffor {
    /// Returns whether the vector part and the bivector part are both
    /// nonzero and parallel or antiparallel: the magnitude of the wedge of
    /// their unit directions is within [`TOL`](crate::TOL) of zero.
    pub fn is_colinear(&self) -> bool {
        let a = self.vector3();
        let b = self.bivector3();
        let na = util::norm3(a);
        let nb = util::norm3(b);
        na > TOL
            && nb > TOL
            && util::norm3(util::cross3(a, b)) / (na * nb) <= TOL
    }

    /// Returns whether the vector part and the bivector part are both
    /// nonzero, orthogonal, and equal in magnitude within
    /// [`TOL`](crate::TOL), i.e. the directional part squares to zero.
    ///
    /// Mutually exclusive with [`Self::is_colinear()`].
    pub fn has_nilpotent_part(&self) -> bool {
        let a = self.vector3();
        let b = self.bivector3();
        let na = util::norm3(a);
        let nb = util::norm3(b);
        na > TOL
            && nb > TOL
            && util::dot3(a, b).abs() / (na * nb) <= TOL
            && (na - nb).abs() <= TOL * Float::max(na, nb)
    }

    /// Returns the complementary idempotent projector pair
    /// `(p, bar(p))` with `p = ½(1 + signum(d))`, where `d` is the
    /// element's real direction (the vector part if present, otherwise the
    /// bivector axis).
    ///
    /// Returns `None` if the reduced element has no real direction: either
    /// no directional content at all, or vector and bivector parts that are
    /// not colinear.
    pub fn projectors(&self) -> Option<(Cliffor, Cliffor)> {
        let v = self.reduce();
        match classify(&v) {
            Class::Colinear => Some(projector_pair(real_direction(&v)?)),
            _ => None,
        }
    }

    /// Returns both eigenvalues of the element as scalar ⊕ trivector
    /// cliffors, reduced into the `R`, `I`, or `C` variant.
    ///
    /// Colinear elements get `2·spec(p·v·p)` and `2·spec(p̄·v·p̄)`;
    /// nilpotent-like elements have one defective eigenvalue (returned
    /// twice); general elements are boosted first, which preserves the
    /// spectrum.
    pub fn eigenvalues(&self) -> (Cliffor, Cliffor) {
        let v = self.reduce();
        match classify(&v) {
            Class::Subalgebra | Class::Nilpotent => {
                let e = v.to_c().reduce();
                (e, e)
            }
            Class::Colinear => colinear_eigenvalues(&v),
            Class::NeedsBoost => {
                // A similarity transform, so the spectrum is unchanged.
                let boost = v.boost_factor();
                colinear_eigenvalues(&(boost.bar() * v * boost).reduce())
            }
        }
    }

    /// Returns the non-unitary factor `B` such that `bar(B)·v·B` is
    /// colinear and `B·bar(B) = 1`.
    ///
    /// Returns `R(1)` if the element is already colinear (or has no
    /// directional content), and `None` for a nilpotent-like element, where
    /// the boost is singular.
    pub fn boost_to_colinear(&self) -> Option<Cliffor> {
        let v = self.reduce();
        match classify(&v) {
            Class::Nilpotent => None,
            Class::NeedsBoost => Some(v.boost_factor()),
            Class::Subalgebra | Class::Colinear => Some(Cliffor::one()),
        }
    }

    /// The boost factor for an element classified [`Class::NeedsBoost`]:
    /// `cosh(α) + sinh(α)·n̂·σ` with `n̂ = (a×b)/|a×b|` and
    /// `α = ¼·artanh(2|a×b| / (|a|²+|b|²))`. The artanh argument reaches 1
    /// exactly on the nilpotent cone, which is excluded by classification.
    fn boost_factor(&self) -> Cliffor {
        let a = self.vector3();
        let b = self.bivector3();
        let n = util::cross3(a, b);
        let nn = util::norm3(n);
        let t = 2.0 * nn / (util::dot3(a, a) + util::dot3(b, b));
        let alpha = t.atanh() / 4.0;
        let (sh, ch) = (alpha.sinh(), alpha.cosh());
        Cliffor::pv(ch, sh * n[0] / nn, sh * n[1] / nn, sh * n[2] / nn)
    }

    /// Computes `f` of this element by spectral decomposition, given `f` and
    /// its derivative `df` on the complex plane.
    ///
    /// The input is reduced, classified, and dispatched: direct complex
    /// evaluation for the scalar ⊕ trivector sub-algebra, projector
    /// eigen-reconstruction for colinear elements, the Jordan form
    /// `f(eig) + f'(eig)·n` for nilpotent-like elements (the only place
    /// `df` is used), and boost-conjugation `B·f(bar(B)·v·B)·bar(B)` for
    /// the rest. The result is reduced.
    pub fn spectral_map(
        &self,
        f: impl Fn(Complex) -> Complex,
        df: impl Fn(Complex) -> Complex,
    ) -> Cliffor {
        let v = self.reduce();
        match classify(&v) {
            Class::Subalgebra => from_complex(f(spec_c(&v))).reduce(),
            Class::Colinear => colinear_apply(&v, &f).reduce(),
            Class::Nilpotent => jordan_apply(&v, &f, &df).reduce(),
            Class::NeedsBoost => {
                let boost = v.boost_factor();
                let colinear = (boost.bar() * v * boost).reduce();
                if !matches!(classify(&colinear), Class::Colinear | Class::Subalgebra) {
                    // Can only happen through numerical degradation very
                    // close to the nilpotent cone.
                    debug_panic!("boost failed to colinearize {v:?}");
                }
                (boost * colinear_apply(&colinear, &f) * boost.bar()).reduce()
            }
        }
    }
}

/// The transcendental function family. Each function is evaluated on the
/// eigenvalues by its standard complex principal branch, so the real-axis
/// analytic continuations come out exactly: `log` of a negative real scalar
/// is a `C` with imaginary part π, `sqrt` of a negative real scalar is a
/// pure `I`, and so on. Each entry carries its derivative for the Jordan
/// branch.
impl Cliffor {
    /// Exponential.
    #[must_use]
    pub fn exp(&self) -> Self {
        self.spectral_map(Complex::exp, Complex::exp)
    }

    /// Natural logarithm. The pole at zero degrades to IEEE infinities.
    #[must_use]
    pub fn log(&self) -> Self {
        self.spectral_map(Complex::ln, |z| z.inv())
    }

    /// Square root.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.spectral_map(Complex::sqrt, |z| (z.sqrt() * 2.0).inv())
    }

    /// Sine.
    #[must_use]
    pub fn sin(&self) -> Self {
        self.spectral_map(Complex::sin, Complex::cos)
    }
    /// Cosine.
    #[must_use]
    pub fn cos(&self) -> Self {
        self.spectral_map(Complex::cos, |z| -z.sin())
    }
    /// Tangent. Poles at odd multiples of π/2 are the caller's to avoid.
    #[must_use]
    pub fn tan(&self) -> Self {
        self.spectral_map(Complex::tan, |z| {
            let c = z.cos();
            (c * c).inv()
        })
    }

    /// Inverse sine.
    #[must_use]
    pub fn asin(&self) -> Self {
        self.spectral_map(Complex::asin, |z| {
            (Complex::new(1.0, 0.0) - z * z).sqrt().inv()
        })
    }
    /// Inverse cosine.
    #[must_use]
    pub fn acos(&self) -> Self {
        self.spectral_map(Complex::acos, |z| {
            -(Complex::new(1.0, 0.0) - z * z).sqrt().inv()
        })
    }
    /// Inverse tangent.
    #[must_use]
    pub fn atan(&self) -> Self {
        self.spectral_map(Complex::atan, |z| {
            (Complex::new(1.0, 0.0) + z * z).inv()
        })
    }

    /// Hyperbolic sine.
    #[must_use]
    pub fn sinh(&self) -> Self {
        self.spectral_map(Complex::sinh, Complex::cosh)
    }
    /// Hyperbolic cosine.
    #[must_use]
    pub fn cosh(&self) -> Self {
        self.spectral_map(Complex::cosh, Complex::sinh)
    }
    /// Hyperbolic tangent.
    #[must_use]
    pub fn tanh(&self) -> Self {
        self.spectral_map(Complex::tanh, |z| {
            let c = z.cosh();
            (c * c).inv()
        })
    }

    /// Inverse hyperbolic sine.
    #[must_use]
    pub fn asinh(&self) -> Self {
        self.spectral_map(Complex::asinh, |z| {
            (z * z + Complex::new(1.0, 0.0)).sqrt().inv()
        })
    }
    /// Inverse hyperbolic cosine.
    #[must_use]
    pub fn acosh(&self) -> Self {
        self.spectral_map(Complex::acosh, |z| {
            // Branch-correct form of 1/sqrt(z² - 1).
            let one = Complex::new(1.0, 0.0);
            ((z - one).sqrt() * (z + one).sqrt()).inv()
        })
    }
    /// Inverse hyperbolic tangent. Poles at ±1 degrade to IEEE infinities.
    #[must_use]
    pub fn atanh(&self) -> Self {
        self.spectral_map(Complex::atanh, |z| {
            (Complex::new(1.0, 0.0) - z * z).inv()
        })
    }
}
