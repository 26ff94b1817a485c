// SPDX-License-Identifier: AGPL-3.0-only

//! Beam flux variants.
//!
//! Closed tagged enum over the flux types the generator drives the engine
//! with. A monochromatic beam points along +z and needs no sampling
//! variables; an energy-spectrum variant would slot in here with one
//! sampling variable and a tabulated flux.

use serde::{Deserialize, Serialize};

use crate::four_vector::FourVector;

/// Beam flux model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Beam {
    /// Fixed-energy beam along +z. MeV
    Monochromatic { energy: f64 },
}

impl Beam {
    /// Number of sampling variables the flux consumes.
    #[must_use]
    pub fn n_variables(&self) -> usize {
        match self {
            Self::Monochromatic { .. } => 0,
        }
    }

    /// Beam four-momentum for the given sampling variables.
    #[must_use]
    pub fn flux(&self, _rans: &[f64]) -> FourVector {
        match self {
            Self::Monochromatic { energy } => FourVector::new(*energy, 0.0, 0.0, *energy),
        }
    }

    /// Importance-sampling weight for a generated beam momentum.
    #[must_use]
    pub fn generate_weight(&self, _momentum: &FourVector, _rans: &mut [f64]) -> f64 {
        match self {
            Self::Monochromatic { .. } => 1.0,
        }
    }

    /// Flux density at a beam momentum.
    #[must_use]
    pub fn evaluate_flux(&self, _momentum: &FourVector) -> f64 {
        match self {
            Self::Monochromatic { .. } => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monochromatic_is_forward_and_lightlike() {
        let beam = Beam::Monochromatic { energy: 1000.0 };
        assert_eq!(beam.n_variables(), 0);
        let p = beam.flux(&[]);
        assert_eq!(p, FourVector::new(1000.0, 0.0, 0.0, 1000.0));
        assert_eq!(p.m2(), 0.0);
    }

    #[test]
    fn monochromatic_weight_is_unit() {
        let beam = Beam::Monochromatic { energy: 500.0 };
        let p = beam.flux(&[]);
        assert_eq!(beam.generate_weight(&p, &mut []), 1.0);
        assert_eq!(beam.evaluate_flux(&p), 1.0);
    }
}
