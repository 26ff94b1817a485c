// SPDX-License-Identifier: AGPL-3.0-only

//! riptide — lepton–nucleus hard-scattering amplitude engine.
//!
//! Computes differential cross sections for lepton–nucleon/nucleus
//! scattering inside a Monte Carlo event generator: electroweak leptonic
//! currents built from helicity spinors, contracted against hadronic
//! currents supplied by an external nuclear model, normalized by
//! relativistic flux into nanobarns.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `dirac` | Gamma matrices, projectors, helicity spinors (4×4 complex algebra) |
//! | `pid` | PDG-coded particle species and their static properties |
//! | `four_vector` | Minkowski four-vectors, metric (+,−,−,−) |
//! | `process` | Process classification and electroweak coupling resolution |
//! | `current` | Helicity-resolved leptonic currents with Breit–Wigner propagator |
//! | `form_factor` | Standard-Model form-factor coupling tables per target species |
//! | `hard_scattering` | Lepton–hadron contraction, spin sums, flux normalization |
//! | `beam` | Beam flux variants (closed enum) |
//! | `constants` | PDG electroweak constants and numerical guards |
//! | `tolerances` | Centralized test tolerances with justification |
//!
//! # References
//!
//! - Peskin & Schroeder, "An Introduction to Quantum Field Theory" (1995), Ch. 3
//! - Particle Data Group, Prog. Theor. Exp. Phys. 2020, 083C01

pub mod beam;
pub mod constants;
pub mod current;
pub mod dirac;
pub mod error;
pub mod form_factor;
pub mod four_vector;
pub mod hard_scattering;
pub mod pid;
pub mod process;
pub mod tolerances;

pub use beam::Beam;
pub use current::{Current, Currents, LeptonicModel, SmCurrents};
pub use dirac::complex_f64::Complex64;
pub use dirac::spin_matrix::SpinMatrix;
pub use dirac::spinor::Spinor;
pub use error::RiptideError;
pub use form_factor::{FfDictionary, FfInfoMap, FormFactorInfo, FormFactorType};
pub use four_vector::FourVector;
pub use hard_scattering::{Event, HardScattering, NuclearModel};
pub use pid::Pid;
pub use process::{CouplingParameters, ProcessInfo};
