// SPDX-License-Identifier: AGPL-3.0-only

//! 4×4 complex matrices on spinor space.
//!
//! Gamma matrices in the Dirac representation with metric g = (+,−,−,−),
//! satisfying {γ^μ, γ^ν} = 2 g^{μν} I. Derived objects: γ5 = iγ0γ1γ2γ3,
//! chiral projectors P_L = (I−γ5)/2 and P_R = (I+γ5)/2, the spin tensor
//! σ^{μν} = i(γ^μγ^ν − g^{μν} I), and the contraction p-slash = p_μ γ^μ.
//!
//! Storage: row-major, 16 Complex64 values. Equality is exact complex
//! comparison; the gamma-identity tests rely on entries staying in
//! {0, ±½, ±1, ±i} where f64 products are exact.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use super::complex_f64::Complex64;
use crate::four_vector::FourVector;

const O: Complex64 = Complex64::ZERO;
const P1: Complex64 = Complex64::ONE;
const M1: Complex64 = Complex64::new(-1.0, 0.0);
const II: Complex64 = Complex64::I;
const MI: Complex64 = Complex64::new(0.0, -1.0);
const PH: Complex64 = Complex64::new(0.5, 0.0);
const MH: Complex64 = Complex64::new(-0.5, 0.0);

/// 4×4 complex matrix acting on spinor indices.
///
/// Row-major storage: `m[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use]
pub struct SpinMatrix {
    /// Matrix elements m[row][col].
    pub m: [[Complex64; 4]; 4],
}

impl SpinMatrix {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        m: [[O; 4]; 4],
    };

    /// 4×4 identity.
    pub const IDENTITY: Self = Self {
        m: [
            [P1, O, O, O],
            [O, P1, O, O],
            [O, O, P1, O],
            [O, O, O, P1],
        ],
    };

    /// γ0 = diag(1, 1, −1, −1).
    pub const GAMMA0: Self = Self {
        m: [
            [P1, O, O, O],
            [O, P1, O, O],
            [O, O, M1, O],
            [O, O, O, M1],
        ],
    };

    /// γ1 (Dirac representation).
    pub const GAMMA1: Self = Self {
        m: [
            [O, O, O, P1],
            [O, O, P1, O],
            [O, M1, O, O],
            [M1, O, O, O],
        ],
    };

    /// γ2 (Dirac representation).
    pub const GAMMA2: Self = Self {
        m: [
            [O, O, O, MI],
            [O, O, II, O],
            [O, II, O, O],
            [MI, O, O, O],
        ],
    };

    /// γ3 (Dirac representation).
    pub const GAMMA3: Self = Self {
        m: [
            [O, O, P1, O],
            [O, O, O, M1],
            [M1, O, O, O],
            [O, P1, O, O],
        ],
    };

    /// γ5 = iγ0γ1γ2γ3, off-diagonal identity blocks in this representation.
    pub const GAMMA5: Self = Self {
        m: [
            [O, O, P1, O],
            [O, O, O, P1],
            [P1, O, O, O],
            [O, P1, O, O],
        ],
    };

    /// Left-chiral projector P_L = (I − γ5)/2.
    pub const PL: Self = Self {
        m: [
            [PH, O, MH, O],
            [O, PH, O, MH],
            [MH, O, PH, O],
            [O, MH, O, PH],
        ],
    };

    /// Right-chiral projector P_R = (I + γ5)/2.
    pub const PR: Self = Self {
        m: [
            [PH, O, PH, O],
            [O, PH, O, PH],
            [PH, O, PH, O],
            [O, PH, O, PH],
        ],
    };

    /// γ^μ for μ ∈ {0, 1, 2, 3}.
    ///
    /// # Panics
    ///
    /// Panics on a Lorentz index outside 0..=3.
    pub fn gamma(mu: usize) -> Self {
        match mu {
            0 => Self::GAMMA0,
            1 => Self::GAMMA1,
            2 => Self::GAMMA2,
            3 => Self::GAMMA3,
            _ => panic!("Lorentz index out of range: {mu}"),
        }
    }

    /// Metric component g^{μν}, signature (+,−,−,−).
    fn metric(mu: usize, nu: usize) -> f64 {
        if mu != nu {
            0.0
        } else if mu == 0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Spin tensor σ^{μν} = i(γ^μγ^ν − g^{μν} I).
    ///
    /// Antisymmetric in (μ, ν); zero on the diagonal.
    pub fn sigma_mu_nu(mu: usize, nu: usize) -> Self {
        Complex64::I * (Self::gamma(mu) * Self::gamma(nu) - Self::metric(mu, nu) * Self::IDENTITY)
    }

    /// p-slash = p_μ γ^μ = p⁰γ0 − p¹γ1 − p²γ2 − p³γ3.
    pub fn slashed(p: &FourVector) -> Self {
        p.e * Self::GAMMA0 - p.px * Self::GAMMA1 - p.py * Self::GAMMA2 - p.pz * Self::GAMMA3
    }
}

impl Default for SpinMatrix {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for SpinMatrix {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut r = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                r.m[i][j] = self.m[i][j] + rhs.m[i][j];
            }
        }
        r
    }
}

impl AddAssign for SpinMatrix {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for SpinMatrix {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut r = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                r.m[i][j] = self.m[i][j] - rhs.m[i][j];
            }
        }
        r
    }
}

impl Neg for SpinMatrix {
    type Output = Self;
    fn neg(self) -> Self {
        let mut r = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                r.m[i][j] = -self.m[i][j];
            }
        }
        r
    }
}

impl Mul for SpinMatrix {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut r = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                let mut s = Complex64::ZERO;
                for k in 0..4 {
                    s += self.m[i][k] * rhs.m[k][j];
                }
                r.m[i][j] = s;
            }
        }
        r
    }
}

impl Mul<Complex64> for SpinMatrix {
    type Output = Self;
    fn mul(self, rhs: Complex64) -> Self {
        let mut r = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                r.m[i][j] = self.m[i][j] * rhs;
            }
        }
        r
    }
}

impl Mul<SpinMatrix> for Complex64 {
    type Output = SpinMatrix;
    fn mul(self, rhs: SpinMatrix) -> SpinMatrix {
        rhs * self
    }
}

impl Mul<f64> for SpinMatrix {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self * Complex64::new(rhs, 0.0)
    }
}

impl Mul<SpinMatrix> for f64 {
    type Output = SpinMatrix;
    fn mul(self, rhs: SpinMatrix) -> SpinMatrix {
        rhs * self
    }
}
