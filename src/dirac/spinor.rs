// SPDX-License-Identifier: AGPL-3.0-only

//! Helicity spinors for external fermion legs.
//!
//! Closed-form construction in the Dirac representation: the two-spinor χ_h
//! is the σ·p̂ eigenstate for helicity h = ±1, and the four-spinor stacks
//! χ_h scaled by ω± = √(E ± m),
//!
//!   u(h, p)  = ( ω₊ χ_h ,  h ω₋ χ_h )
//!   ū(h, p)  = ( ω₊ χ_h† , −h ω₋ χ_h† )
//!
//! normalized to the completeness relation Σ_h u⊗ū = p-slash + m I and the
//! inner product ū(j)·u(i) = 2m δ_ij. The square roots continue onto the
//! imaginary axis for negated (crossed) incoming legs; the adjoint
//! conjugates χ but not ω so the continuation stays consistent.
//!
//! # References
//!
//! - Haber, "Spin formalism and applications to new physics searches" (1994)

use std::ops::Mul;

use super::complex_f64::Complex64;
use super::spin_matrix::SpinMatrix;
use crate::constants::{DOWN_Z_GUARD, REST_FRAME_GUARD};
use crate::four_vector::FourVector;

/// Four-component Dirac wavefunction for one helicity and momentum.
///
/// The same storage serves both flavors: `u` builds the particle (column)
/// spinor, `u_bar` the Dirac adjoint with row-vector semantics. The `*`
/// operator contracts components without conjugation — the adjoint already
/// carries it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spinor {
    /// Spinor components.
    pub c: [Complex64; 4],
}

/// σ·p̂ eigenstate χ_h for helicity h = ±1.
///
/// Generic branch from (P + p_z, px ± i py); the momentum-along−z and
/// rest-frame degeneracies get explicit branches (rest frame quantizes
/// along +z by convention).
fn helicity_two_spinor(helicity: i32, mom: &FourVector) -> [Complex64; 2] {
    debug_assert!(helicity == 1 || helicity == -1, "helicity must be ±1");
    let pmag = mom.p();
    if pmag < REST_FRAME_GUARD {
        return if helicity == 1 {
            [Complex64::ONE, Complex64::ZERO]
        } else {
            [Complex64::ZERO, Complex64::ONE]
        };
    }
    let ppz = pmag + mom.pz;
    if ppz < pmag * DOWN_Z_GUARD {
        // p̂ = −ẑ: θ = π limit of the generic branch
        return if helicity == 1 {
            [Complex64::ZERO, Complex64::ONE]
        } else {
            [Complex64::new(-1.0, 0.0), Complex64::ZERO]
        };
    }
    let denom = (2.0 * pmag * ppz).sqrt();
    if helicity == 1 {
        [
            Complex64::new(ppz / denom, 0.0),
            Complex64::new(mom.px / denom, mom.py / denom),
        ]
    } else {
        [
            Complex64::new(-mom.px / denom, mom.py / denom),
            Complex64::new(ppz / denom, 0.0),
        ]
    }
}

impl Spinor {
    /// Particle spinor u(h, p).
    pub fn u(helicity: i32, mom: &FourVector) -> Self {
        let chi = helicity_two_spinor(helicity, mom);
        let m = mom.m();
        let omega_p = Complex64::sqrt_real(mom.e + m);
        let omega_m = Complex64::sqrt_real(mom.e - m).scale(f64::from(helicity));
        Self {
            c: [
                omega_p * chi[0],
                omega_p * chi[1],
                omega_m * chi[0],
                omega_m * chi[1],
            ],
        }
    }

    /// Adjoint spinor ū(h, p) = u†γ0, stored as a row vector.
    pub fn u_bar(helicity: i32, mom: &FourVector) -> Self {
        let chi = helicity_two_spinor(helicity, mom);
        let m = mom.m();
        let omega_p = Complex64::sqrt_real(mom.e + m);
        let omega_m = Complex64::sqrt_real(mom.e - m).scale(-f64::from(helicity));
        Self {
            c: [
                omega_p * chi[0].conj(),
                omega_p * chi[1].conj(),
                omega_m * chi[0].conj(),
                omega_m * chi[1].conj(),
            ],
        }
    }

    /// Outer product u ⊗ ū, a 4×4 matrix on spinor space.
    pub fn outer(&self, bar: &Spinor) -> SpinMatrix {
        let mut r = SpinMatrix::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                r.m[i][j] = self.c[i] * bar.c[j];
            }
        }
        r
    }
}

/// Inner product ū·u: plain component contraction (the adjoint carries the
/// conjugation).
impl Mul for Spinor {
    type Output = Complex64;
    fn mul(self, rhs: Self) -> Complex64 {
        let mut s = Complex64::ZERO;
        for k in 0..4 {
            s += self.c[k] * rhs.c[k];
        }
        s
    }
}

/// Row × matrix: (ū M)_j = Σ_i ū_i M_ij.
impl Mul<SpinMatrix> for Spinor {
    type Output = Spinor;
    fn mul(self, rhs: SpinMatrix) -> Spinor {
        let mut r = [Complex64::ZERO; 4];
        for (j, rj) in r.iter_mut().enumerate() {
            for i in 0..4 {
                *rj += self.c[i] * rhs.m[i][j];
            }
        }
        Spinor { c: r }
    }
}

/// Matrix × column: (M u)_i = Σ_j M_ij u_j.
impl Mul<Spinor> for SpinMatrix {
    type Output = Spinor;
    fn mul(self, rhs: Spinor) -> Spinor {
        let mut r = [Complex64::ZERO; 4];
        for (i, ri) in r.iter_mut().enumerate() {
            for j in 0..4 {
                *ri += self.m[i][j] * rhs.c[j];
            }
        }
        Spinor { c: r }
    }
}
