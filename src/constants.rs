// SPDX-License-Identifier: AGPL-3.0-only

//! Electroweak constants (PDG 2020) and runtime numerical guards.
//!
//! All masses, widths, and energies are in MeV throughout the crate.
//! Cross sections come out in nanobarns via `HBARC2` (MeV²·mb) and `TO_NB`.

/// Fine-structure constant α (CODATA 2018).
pub const ALPHA: f64 = 7.297_352_569_3e-3;

/// Electromagnetic coupling e = √(4πα), dimensionless (Gaussian units).
pub const EE: f64 = 0.302_822_12;

/// Weak mixing angle, sin²θ_W (on-shell scheme).
pub const SIN2W: f64 = 0.231_21;

/// W boson mass. MeV
pub const MW: f64 = 80_379.0;

/// W boson total width. MeV
pub const GAMW: f64 = 2_085.0;

/// Z boson mass. MeV
pub const MZ: f64 = 91_187.6;

/// Z boson total width. MeV
pub const GAMZ: f64 = 2_495.2;

/// Electron mass. MeV
pub const M_ELECTRON: f64 = 0.510_998_95;

/// Muon mass. MeV
pub const M_MUON: f64 = 105.658_375_5;

/// Tau mass. MeV
pub const M_TAU: f64 = 1_776.86;

/// Proton mass. MeV
pub const M_PROTON: f64 = 938.272_088_16;

/// Neutron mass. MeV
pub const M_NEUTRON: f64 = 939.565_420_52;

/// Carbon-12 nuclear mass (atomic mass minus 6 electrons). MeV
pub const M_CARBON12: f64 = 11_174.863;

/// ħc. MeV·fm
pub const HBARC: f64 = 197.326_980_4;

/// (ħc)² in MeV²·mb: HBARC² = 38937.9 MeV²·fm², and 1 fm² = 10 mb.
pub const HBARC2: f64 = 389_379.372;

/// Millibarn → nanobarn.
pub const TO_NB: f64 = 1e6;

/// Floor on |q² − M² − iMΓ|² below which the propagator counts as sitting
/// on its pole and evaluation aborts instead of producing Inf/NaN. MeV⁴
pub const PROPAGATOR_POLE_GUARD: f64 = 1e-20;

/// Below this three-momentum magnitude a spinor is built in the rest-frame
/// convention (quantization axis +z). MeV
pub const REST_FRAME_GUARD: f64 = 1e-10;

/// Relative floor on P + p_z; below it the momentum points along −z and the
/// degenerate two-spinor branch is taken (the generic branch divides by
/// √(2P(P+p_z))).
pub const DOWN_Z_GUARD: f64 = 1e-10;

/// sin θ_W.
#[inline]
#[must_use]
pub fn sw() -> f64 {
    SIN2W.sqrt()
}

/// cos θ_W.
#[inline]
#[must_use]
pub fn cw() -> f64 {
    (1.0 - SIN2W).sqrt()
}
