// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for process resolution and amplitude evaluation.
//!
//! A proper enum instead of `Result<_, String>` so event-generation callers
//! can pattern-match on failure modes (skip the event, abort the run)
//! rather than parsing opaque strings. All conditions are unrecoverable at
//! the point of detection; none are retried internally.

use std::fmt;

use crate::pid::Pid;

/// Errors arising from process setup or per-event amplitude evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum RiptideError {
    /// The lepton pair is neither a neutral- nor a charged-current process.
    UnclassifiedProcess {
        /// Beam lepton species.
        beam: Pid,
        /// Outgoing lepton species.
        outgoing: Pid,
    },

    /// A form-factor table or current was requested for a mediator outside
    /// the supported set (W±, Z, photon).
    UnsupportedMediator(Pid),

    /// Amplitude evaluation was invoked before `set_process`.
    UninitializedProcess,

    /// The mediator propagator was evaluated at its pole (q² at the mass
    /// shell with vanishing width). Carries q² in MeV².
    PropagatorPole {
        /// Squared momentum transfer at which the denominator vanished.
        q2: f64,
    },

    /// A computed cross section came out NaN or infinite.
    NonFiniteCrossSection {
        /// Target-species index within the hadronic-current collection.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for RiptideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclassifiedProcess { beam, outgoing } => write!(
                f,
                "Process {beam} -> {outgoing} is neither neutral- nor charged-current"
            ),
            Self::UnsupportedMediator(pid) => {
                write!(f, "No form factors defined for mediator {pid}")
            }
            Self::UninitializedProcess => {
                write!(f, "Amplitude requested before a process was resolved")
            }
            Self::PropagatorPole { q2 } => {
                write!(f, "Propagator pole at q² = {q2} MeV²")
            }
            Self::NonFiniteCrossSection { index, value } => {
                write!(f, "Cross section for target {index} is non-finite: {value}")
            }
        }
    }
}

impl std::error::Error for RiptideError {}
