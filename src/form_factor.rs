// SPDX-License-Identifier: AGPL-3.0-only

//! Standard-Model form-factor coupling tables.
//!
//! Static mapping from (target species, mediator) to a weighted list of
//! form-factor channel contributions, following the vector/axial-vector
//! decomposition of the electroweak current. The list order is a contract
//! with the hadronic-current provider: it contracts channels in insertion
//! order. Pairs that are present with an empty list mean "this mediator
//! does not couple to this target"; pairs that are absent are lookup
//! failures.

use std::collections::BTreeMap;

use crate::constants::{cw, sw, EE};
use crate::dirac::complex_f64::Complex64;
use crate::error::RiptideError;
use crate::pid::Pid;

/// Form-factor channel selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormFactorType {
    /// Dirac form factor, proton.
    F1p,
    /// Dirac form factor, neutron.
    F1n,
    /// Pauli form factor, proton.
    F2p,
    /// Pauli form factor, neutron.
    F2n,
    /// Axial form factor.
    FA,
    /// Coherent nuclear form factor.
    FCoh,
}

/// One weighted form-factor channel contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormFactorInfo {
    pub ff_type: FormFactorType,
    /// Complex coupling weight multiplying the channel.
    pub coupling: Complex64,
}

impl FormFactorInfo {
    #[must_use]
    pub const fn new(ff_type: FormFactorType, coupling: Complex64) -> Self {
        Self { ff_type, coupling }
    }
}

/// (target species, mediator) → ordered channel contributions.
pub type FfDictionary = BTreeMap<(Pid, Pid), Vec<FormFactorInfo>>;

/// Per-target view handed to the hadronic provider: mediator → channels.
pub type FfInfoMap = BTreeMap<Pid, Vec<FormFactorInfo>>;

/// Target species the engine produces cross sections for, in output order.
pub const TARGET_SPECIES: [Pid; 3] = [Pid::PROTON, Pid::NEUTRON, Pid::CARBON];

/// Build the Standard-Model form-factor table for one mediator.
///
/// Covers W±, Z, and the photon; anything else is an unsupported mediator.
pub fn standard_model_table(mediator: Pid) -> Result<FfDictionary, RiptideError> {
    use FormFactorType::{F1n, F1p, F2n, F2p, FCoh, FA};
    let i = Complex64::I;
    let mut table = FfDictionary::new();
    match mediator.code() {
        24 => {
            let coupl = i * (EE / (sw() * 2.0_f64.sqrt() * 2.0));
            table.insert(
                (Pid::PROTON, mediator),
                vec![
                    FormFactorInfo::new(F1p, coupl),
                    FormFactorInfo::new(F1n, -coupl),
                    FormFactorInfo::new(F2p, coupl),
                    FormFactorInfo::new(F2n, -coupl),
                    FormFactorInfo::new(FA, coupl),
                ],
            );
            table.insert((Pid::NEUTRON, mediator), vec![]);
            table.insert((Pid::CARBON, mediator), vec![]);
        }
        -24 => {
            let coupl = i * (EE / (sw() * 2.0_f64.sqrt() * 2.0));
            table.insert(
                (Pid::NEUTRON, mediator),
                vec![
                    FormFactorInfo::new(F1p, coupl),
                    FormFactorInfo::new(F1n, -coupl),
                    FormFactorInfo::new(F2p, coupl),
                    FormFactorInfo::new(F2n, -coupl),
                    FormFactorInfo::new(FA, coupl),
                ],
            );
            table.insert((Pid::PROTON, mediator), vec![]);
            table.insert((Pid::CARBON, mediator), vec![]);
        }
        23 => {
            let coupl1 = i * (EE * (cw() / (2.0 * sw()) - sw() / (2.0 * cw())));
            let coupl2 = -(i * (EE * cw() / (2.0 * sw())));
            table.insert(
                (Pid::PROTON, mediator),
                vec![
                    FormFactorInfo::new(F1p, coupl1),
                    FormFactorInfo::new(F1n, coupl2),
                    FormFactorInfo::new(F2p, coupl1),
                    FormFactorInfo::new(F2n, coupl2),
                    FormFactorInfo::new(FA, coupl2),
                ],
            );
            table.insert(
                (Pid::NEUTRON, mediator),
                vec![
                    FormFactorInfo::new(F1n, coupl1),
                    FormFactorInfo::new(F1p, coupl2),
                    FormFactorInfo::new(F2n, coupl1),
                    FormFactorInfo::new(F2p, coupl2),
                    FormFactorInfo::new(FA, coupl2),
                ],
            );
            table.insert((Pid::CARBON, mediator), vec![]);
        }
        22 => {
            let coupl = i * EE;
            table.insert(
                (Pid::PROTON, mediator),
                vec![
                    FormFactorInfo::new(F1p, coupl),
                    FormFactorInfo::new(F2p, coupl),
                ],
            );
            table.insert(
                (Pid::NEUTRON, mediator),
                vec![
                    FormFactorInfo::new(F1n, coupl),
                    FormFactorInfo::new(F2n, coupl),
                ],
            );
            // coherent scattering off all 6 protons
            table.insert(
                (Pid::CARBON, mediator),
                vec![FormFactorInfo::new(FCoh, 6.0 * coupl)],
            );
        }
        _ => return Err(RiptideError::UnsupportedMediator(mediator)),
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn w_plus_couples_proton_only() {
        let table = standard_model_table(Pid::W_PLUS).expect("W+ supported");
        let proton = &table[&(Pid::PROTON, Pid::W_PLUS)];
        assert_eq!(proton.len(), 5, "F1p, F1n, F2p, F2n, FA");
        assert_eq!(proton[0].ff_type, FormFactorType::F1p);
        assert_eq!(proton[4].ff_type, FormFactorType::FA);
        // isovector: neutron channels enter with opposite sign
        assert_eq!(proton[1].coupling, -proton[0].coupling);
        assert!(table[&(Pid::NEUTRON, Pid::W_PLUS)].is_empty());
        assert!(table[&(Pid::CARBON, Pid::W_PLUS)].is_empty());
    }

    #[test]
    fn w_minus_mirrors_onto_neutron() {
        let table = standard_model_table(Pid::W_MINUS).expect("W- supported");
        assert_eq!(table[&(Pid::NEUTRON, Pid::W_MINUS)].len(), 5);
        assert!(table[&(Pid::PROTON, Pid::W_MINUS)].is_empty());
    }

    #[test]
    fn z_couples_both_nucleons() {
        let table = standard_model_table(Pid::Z_BOSON).expect("Z supported");
        let proton = &table[&(Pid::PROTON, Pid::Z_BOSON)];
        let neutron = &table[&(Pid::NEUTRON, Pid::Z_BOSON)];
        assert_eq!(proton.len(), 5);
        assert_eq!(neutron.len(), 5);
        // isospin rotation: leading channels swap between p and n
        assert_eq!(proton[0].coupling, neutron[0].coupling);
        assert_eq!(proton[0].ff_type, FormFactorType::F1p);
        assert_eq!(neutron[0].ff_type, FormFactorType::F1n);
    }

    #[test]
    fn photon_carbon_is_coherent_over_protons() {
        let table = standard_model_table(Pid::PHOTON).expect("photon supported");
        let carbon = &table[&(Pid::CARBON, Pid::PHOTON)];
        assert_eq!(carbon.len(), 1);
        assert_eq!(carbon[0].ff_type, FormFactorType::FCoh);
        let single = table[&(Pid::PROTON, Pid::PHOTON)][0].coupling;
        assert_eq!(carbon[0].coupling, 6.0 * single);
    }

    #[test]
    fn unsupported_mediator_fails() {
        let err = standard_model_table(Pid(25)).unwrap_err();
        assert_eq!(err, RiptideError::UnsupportedMediator(Pid(25)));
    }

    #[test]
    fn every_target_has_an_entry_per_mediator() {
        for mediator in [Pid::W_PLUS, Pid::W_MINUS, Pid::Z_BOSON, Pid::PHOTON] {
            let table = standard_model_table(mediator).expect("supported");
            for target in TARGET_SPECIES {
                assert!(
                    table.contains_key(&(target, mediator)),
                    "missing ({target}, {mediator})"
                );
            }
        }
    }
}
