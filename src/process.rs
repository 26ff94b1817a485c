// SPDX-License-Identifier: AGPL-3.0-only

//! Process classification and electroweak coupling resolution.
//!
//! A process descriptor lists the lepton legs in order (index 0 = beam,
//! last = outgoing; intermediate entries are spectators). Classification
//! selects exactly one mediator:
//!
//! | Class | Condition | Mediator |
//! |-------|-----------|----------|
//! | neutral current | beam species = outgoing species | Z (ν beam) or γ (charged beam) |
//! | charged current | codes differ by one unit of charge | W± |
//!
//! Anything else fails with `UnclassifiedProcess`. The resolved
//! `CouplingParameters` are the single source of truth for the couplings,
//! mediator mass and width used downstream, and stay immutable for the
//! process lifetime.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{cw, sw, EE, GAMW, GAMZ, MW, MZ};
use crate::dirac::complex_f64::Complex64;
use crate::error::RiptideError;
use crate::pid::Pid;

/// Ordered lepton legs of a scattering process.
///
/// Index 0 is the beam lepton, the last entry the outgoing lepton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Lepton species, beam first, outgoing last.
    pub leptons: Vec<Pid>,
}

impl ProcessInfo {
    #[must_use]
    pub fn new(leptons: Vec<Pid>) -> Self {
        Self { leptons }
    }

    /// Beam lepton species.
    #[must_use]
    pub fn beam(&self) -> Pid {
        self.leptons[0]
    }

    /// Outgoing lepton species.
    #[must_use]
    pub fn outgoing(&self) -> Pid {
        *self.leptons.last().expect("process has at least one lepton")
    }
}

/// Electroweak couplings of a resolved process. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CouplingParameters {
    /// Mediating boson identity (W±, Z, or photon).
    pub mediator: Pid,
    /// Coupling on the left-chiral projector.
    pub coupl_left: Complex64,
    /// Coupling on the right-chiral projector.
    pub coupl_right: Complex64,
    /// Mediator pole mass. MeV
    pub mass: f64,
    /// Mediator total width. MeV
    pub width: f64,
    /// Beam lepton is an antiparticle.
    pub anti: bool,
}

impl CouplingParameters {
    /// Classify the process and resolve mediator, couplings, mass, width.
    ///
    /// Exactly one of the neutral-/charged-current branches applies;
    /// otherwise resolution fails.
    pub fn resolve(process: &ProcessInfo) -> Result<Self, RiptideError> {
        if process.leptons.len() < 2 {
            return Err(RiptideError::UnclassifiedProcess {
                beam: process.leptons.first().copied().unwrap_or(Pid(0)),
                outgoing: Pid(0),
            });
        }
        let beam = process.beam();
        let outgoing = process.outgoing();
        let init_neutrino = beam.is_neutrino();
        let neutral_current = beam == outgoing;
        let charged_current =
            beam.code() - (2 * i64::from(init_neutrino) - 1) == outgoing.code();
        if !neutral_current && !charged_current {
            return Err(RiptideError::UnclassifiedProcess { beam, outgoing });
        }

        let i = Complex64::I;
        let anti = beam.is_antiparticle();
        let params = if charged_current {
            let mediator = if init_neutrino != anti {
                Pid::W_PLUS
            } else {
                Pid::W_MINUS
            };
            Self {
                mediator,
                coupl_left: i * (EE / (sw() * 2.0_f64.sqrt())),
                coupl_right: Complex64::ZERO,
                mass: MW,
                width: GAMW,
                anti,
            }
        } else if init_neutrino {
            Self {
                mediator: Pid::Z_BOSON,
                coupl_left: i * (EE * (cw() / (2.0 * sw()) + sw() / (2.0 * cw()))),
                coupl_right: Complex64::ZERO,
                mass: MZ,
                width: GAMZ,
                anti,
            }
        } else {
            let coupl = -(i * EE);
            Self {
                mediator: Pid::PHOTON,
                coupl_left: coupl,
                coupl_right: coupl,
                mass: 0.0,
                width: 0.0,
                anti,
            }
        };
        debug!(
            "Resolved process {} -> {}: mediator {}",
            beam, outgoing, params.mediator
        );
        Ok(params)
    }
}
