// SPDX-License-Identifier: AGPL-3.0-only

//! PDG-coded particle species.
//!
//! Integer identity codes following the PDG Monte Carlo numbering scheme;
//! the sign encodes particle vs. antiparticle. `Pid` is `Ord`/`Hash` by
//! code value and is the map key for currents and form-factor tables.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    M_CARBON12, M_ELECTRON, M_MUON, M_NEUTRON, M_PROTON, M_TAU, MW, MZ,
};

/// Particle species identity (PDG Monte Carlo code).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pid(pub i64);

impl Pid {
    pub const ELECTRON: Pid = Pid(11);
    pub const NU_E: Pid = Pid(12);
    pub const MUON: Pid = Pid(13);
    pub const NU_MU: Pid = Pid(14);
    pub const TAU: Pid = Pid(15);
    pub const NU_TAU: Pid = Pid(16);
    pub const PHOTON: Pid = Pid(22);
    pub const Z_BOSON: Pid = Pid(23);
    pub const W_PLUS: Pid = Pid(24);
    pub const W_MINUS: Pid = Pid(-24);
    pub const PROTON: Pid = Pid(2212);
    pub const NEUTRON: Pid = Pid(2112);
    /// ¹²C nucleus (10LZZZAAAI convention).
    pub const CARBON: Pid = Pid(1_000_060_120);

    /// Raw PDG code (signed).
    #[inline]
    #[must_use]
    pub const fn code(self) -> i64 {
        self.0
    }

    /// Antiparticles carry negative codes.
    #[inline]
    #[must_use]
    pub const fn is_antiparticle(self) -> bool {
        self.0 < 0
    }

    /// ν_e, ν_μ, ν_τ or their antiparticles.
    #[inline]
    #[must_use]
    pub const fn is_neutrino(self) -> bool {
        matches!(self.0.abs(), 12 | 14 | 16)
    }

    /// e, μ, τ or their antiparticles.
    #[inline]
    #[must_use]
    pub const fn is_charged_lepton(self) -> bool {
        matches!(self.0.abs(), 11 | 13 | 15)
    }

    /// Pole mass in MeV. Species without a tabulated mass (and neutrinos)
    /// are treated as massless.
    #[must_use]
    pub fn mass(self) -> f64 {
        match self.0.abs() {
            11 => M_ELECTRON,
            13 => M_MUON,
            15 => M_TAU,
            23 => MZ,
            24 => MW,
            2112 => M_NEUTRON,
            2212 => M_PROTON,
            1_000_060_120 => M_CARBON12,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
