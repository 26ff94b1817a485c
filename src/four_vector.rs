// SPDX-License-Identifier: AGPL-3.0-only

//! Minkowski four-vectors with metric signature (+,−,−,−).
//!
//! Immutable value type for energy-momentum bookkeeping. Components are in
//! MeV. `m()` clamps tiny negative `m2()` roundoff to zero so lightlike
//! vectors stay constructible as spinor arguments.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Energy-momentum four-vector (E, px, py, pz). MeV
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FourVector {
    pub e: f64,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
}

impl FourVector {
    #[inline]
    #[must_use]
    pub const fn new(e: f64, px: f64, py: f64, pz: f64) -> Self {
        Self { e, px, py, pz }
    }

    /// Minkowski inner product p·q = E E' − p⃗·q⃗.
    #[inline]
    #[must_use]
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.e * rhs.e - self.px * rhs.px - self.py * rhs.py - self.pz * rhs.pz
    }

    /// Invariant mass squared p² = E² − |p⃗|². MeV²
    #[inline]
    #[must_use]
    pub fn m2(&self) -> f64 {
        self.dot(self)
    }

    /// Invariant mass √(p²), with sub-roundoff negative p² clamped to zero.
    /// Spacelike vectors belong in `m2()`, not here.
    #[inline]
    #[must_use]
    pub fn m(&self) -> f64 {
        self.m2().max(0.0).sqrt()
    }

    /// Three-momentum magnitude squared. MeV²
    #[inline]
    #[must_use]
    pub fn p2(&self) -> f64 {
        self.px * self.px + self.py * self.py + self.pz * self.pz
    }

    /// Three-momentum magnitude. MeV
    #[inline]
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p2().sqrt()
    }
}

impl Add for FourVector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            e: self.e + rhs.e,
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
        }
    }
}

impl Sub for FourVector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            e: self.e - rhs.e,
            px: self.px - rhs.px,
            py: self.py - rhs.py,
            pz: self.pz - rhs.pz,
        }
    }
}

impl Neg for FourVector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            e: -self.e,
            px: -self.px,
            py: -self.py,
            pz: -self.pz,
        }
    }
}

impl Mul<f64> for FourVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            e: self.e * rhs,
            px: self.px * rhs,
            py: self.py * rhs,
            pz: self.pz * rhs,
        }
    }
}

impl Mul<FourVector> for f64 {
    type Output = FourVector;
    #[inline]
    fn mul(self, rhs: FourVector) -> FourVector {
        rhs * self
    }
}

impl Index<usize> for FourVector {
    type Output = f64;
    fn index(&self, mu: usize) -> &f64 {
        match mu {
            0 => &self.e,
            1 => &self.px,
            2 => &self.py,
            3 => &self.pz,
            _ => panic!("Lorentz index out of range: {mu}"),
        }
    }
}
