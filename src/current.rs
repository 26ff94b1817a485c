// SPDX-License-Identifier: AGPL-3.0-only

//! Helicity-resolved leptonic currents.
//!
//! For each of the four helicity pairs (ū helicity × u helicity) and each
//! Lorentz index μ the builder evaluates
//!
//!   J[2i+j][μ] = ū_i (g_L γ^μ P_L + g_R γ^μ P_R) u_j · i/(q² − M² − iMΓ)
//!
//! with the beam leg crossed into the amplitude (momentum negated; the u
//! and ū roles swap for an antiparticle beam). The builder sits behind the
//! `LeptonicModel` trait so an external amplitude backend can replace the
//! built-in Standard-Model one at configuration time.

use std::collections::BTreeMap;

use tracing::trace;

use crate::constants::PROPAGATOR_POLE_GUARD;
use crate::dirac::complex_f64::Complex64;
use crate::dirac::spin_matrix::SpinMatrix;
use crate::dirac::spinor::Spinor;
use crate::error::RiptideError;
use crate::form_factor::{standard_model_table, FfDictionary};
use crate::four_vector::FourVector;
use crate::pid::Pid;
use crate::process::{CouplingParameters, ProcessInfo};

/// One helicity pair's current: four complex values, one per Lorentz index.
pub type Current = [Complex64; 4];

/// Mediator identity → ordered helicity-pair currents (pair index 2i+j,
/// helicities ordered −1, +1 on each leg).
pub type Currents = BTreeMap<Pid, Vec<Current>>;

/// Strategy seam for leptonic-current computation.
///
/// The Standard-Model builder is the default; an external matrix-element
/// backend plugs in here without touching the cross-section assembler.
pub trait LeptonicModel {
    /// Helicity-resolved currents for one kinematic configuration.
    ///
    /// Momentum role convention: index 0 = beam lepton, index 1 = target,
    /// last = outgoing lepton.
    fn currents(&self, momenta: &[FourVector]) -> Result<Currents, RiptideError>;

    /// Form-factor coupling table for every supported target species.
    fn form_factors(&self) -> Result<FfDictionary, RiptideError>;
}

/// Built-in Standard-Model current builder.
#[derive(Clone, Copy, Debug)]
pub struct SmCurrents {
    params: CouplingParameters,
}

impl SmCurrents {
    /// Resolve the process and freeze its couplings.
    pub fn new(process: &ProcessInfo) -> Result<Self, RiptideError> {
        Ok(Self {
            params: CouplingParameters::resolve(process)?,
        })
    }

    /// The resolved electroweak couplings.
    #[must_use]
    pub fn couplings(&self) -> &CouplingParameters {
        &self.params
    }
}

impl LeptonicModel for SmCurrents {
    fn currents(&self, momenta: &[FourVector]) -> Result<Currents, RiptideError> {
        assert!(
            momenta.len() >= 2,
            "need at least beam and outgoing lepton momenta"
        );
        let beam = momenta[0];
        let out = *momenta.last().expect("momenta non-empty");

        // Cross the incoming leg into the amplitude. For an antiparticle
        // beam the crossed leg is the adjoint one.
        let (p_u, p_ubar) = if self.params.anti {
            (out, -beam)
        } else {
            (-beam, out)
        };
        let ubar = [Spinor::u_bar(-1, &p_ubar), Spinor::u_bar(1, &p_ubar)];
        let u = [Spinor::u(-1, &p_u), Spinor::u(1, &p_u)];

        let q2 = (beam - out).m2();
        let mass = self.params.mass;
        let denom = Complex64::new(q2 - mass * mass, -mass * self.params.width);
        if denom.abs_sq() < PROPAGATOR_POLE_GUARD {
            return Err(RiptideError::PropagatorPole { q2 });
        }
        let prop = Complex64::I / denom;

        // γ^μ (g_L P_L + g_R P_R) is the same for all helicity pairs
        let vertices: [SpinMatrix; 4] = std::array::from_fn(|mu| {
            self.params.coupl_left * (SpinMatrix::gamma(mu) * SpinMatrix::PL)
                + self.params.coupl_right * (SpinMatrix::gamma(mu) * SpinMatrix::PR)
        });

        trace!("Calculating current for {}", self.params.mediator);
        let mut result = Vec::with_capacity(4);
        for i in 0..2 {
            for j in 0..2 {
                let mut subcur = [Complex64::ZERO; 4];
                for (mu, vertex) in vertices.iter().enumerate() {
                    subcur[mu] = (ubar[i] * *vertex) * u[j] * prop;
                    trace!("Current[{}][{}] = {}", 2 * i + j, mu, subcur[mu]);
                }
                result.push(subcur);
            }
        }

        let mut currents = Currents::new();
        currents.insert(self.params.mediator, result);
        Ok(currents)
    }

    fn form_factors(&self) -> Result<FfDictionary, RiptideError> {
        standard_model_table(self.params.mediator)
    }
}
