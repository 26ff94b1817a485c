// SPDX-License-Identifier: AGPL-3.0-only

//! Lepton–hadron contraction and cross-section assembly.
//!
//! Contracts the helicity-resolved leptonic currents against hadronic
//! currents from an external nuclear model, sums spin states, and
//! normalizes by the relativistic flux into nanobarns:
//!
//!   amp[k](i,j) = Σ_μ sign(μ) · J_lep[boson][i][μ] · J_had[k][boson][j][μ]
//!   amp2[k]     = Σ_{i,j} |amp[k](i,j)|²
//!   xsec[k]     = amp2[k] · (ħc)² / spin_avg / flux · (mb → nb)
//!
//! where sign(0) = +1 and sign(1..3) = −1 (metric contraction). Mediators
//! present for the same spin pairing interfere inside the μ-sum; distinct
//! spin pairings add incoherently.
//!
//! Per-event evaluation is pure over the immutable resolved process, so
//! batches of independent events fan out in parallel.

use rayon::prelude::*;
use tracing::debug;

use crate::constants::{HBARC2, TO_NB};
use crate::current::{Currents, LeptonicModel, SmCurrents};
use crate::dirac::complex_f64::Complex64;
use crate::error::RiptideError;
use crate::form_factor::{FfInfoMap, TARGET_SPECIES};
use crate::four_vector::FourVector;
use crate::process::ProcessInfo;

/// Event record: four-momenta in the fixed particle-role order.
///
/// Index 0 = beam lepton, index 1 = target nucleon/nucleus, last =
/// outgoing lepton. The engine reads momenta only; filling the chosen
/// final state into the record is the nuclear model's business.
#[derive(Clone, Debug)]
pub struct Event {
    momenta: Vec<FourVector>,
}

impl Event {
    #[must_use]
    pub fn new(momenta: Vec<FourVector>) -> Self {
        Self { momenta }
    }

    /// Four-momenta in role order.
    #[must_use]
    pub fn momenta(&self) -> &[FourVector] {
        &self.momenta
    }
}

/// Opaque external provider of hadronic currents.
///
/// `calc_currents` returns one mediator-keyed current collection per
/// target species, with the same mediator keys, Lorentz-index convention,
/// and channel contraction order (via the form-factor tables) as the
/// leptonic side. The call is synchronous; the assembler contracts only
/// complete results.
pub trait NuclearModel: Send + Sync {
    /// Hadronic currents for each target species.
    fn calc_currents(
        &self,
        event: &Event,
        ff_info: &[FfInfoMap],
    ) -> Result<Vec<Currents>, RiptideError>;

    /// Spin multiplicity of the target states (≥ 1).
    fn n_spins(&self) -> usize;
}

/// Hard-scattering engine: one resolved process, many events.
pub struct HardScattering {
    nuclear: Box<dyn NuclearModel>,
    leptonic: Option<Box<dyn LeptonicModel + Send + Sync>>,
    process: Option<ProcessInfo>,
    /// Per-target form-factor views (proton, neutron, carbon), built
    /// eagerly when the process is installed.
    ff_info: Vec<FfInfoMap>,
}

impl HardScattering {
    #[must_use]
    pub fn new(nuclear: Box<dyn NuclearModel>) -> Self {
        Self {
            nuclear,
            leptonic: None,
            process: None,
            ff_info: Vec::new(),
        }
    }

    /// Install a process with the built-in Standard-Model current builder.
    pub fn set_process(&mut self, process: ProcessInfo) -> Result<(), RiptideError> {
        let model = SmCurrents::new(&process)?;
        self.install(process, Box::new(model))
    }

    /// Install a process with an external leptonic-current backend.
    pub fn set_process_with_model(
        &mut self,
        process: ProcessInfo,
        model: Box<dyn LeptonicModel + Send + Sync>,
    ) -> Result<(), RiptideError> {
        self.install(process, model)
    }

    fn install(
        &mut self,
        process: ProcessInfo,
        model: Box<dyn LeptonicModel + Send + Sync>,
    ) -> Result<(), RiptideError> {
        let dictionary = model.form_factors()?;
        let mediators: Vec<_> = {
            let mut seen: Vec<crate::pid::Pid> = Vec::new();
            for (_, mediator) in dictionary.keys() {
                if !seen.contains(mediator) {
                    seen.push(*mediator);
                }
            }
            seen
        };
        let mut ff_info = Vec::with_capacity(TARGET_SPECIES.len());
        for target in TARGET_SPECIES {
            let mut map = FfInfoMap::new();
            for &mediator in &mediators {
                let infos = dictionary
                    .get(&(target, mediator))
                    .ok_or(RiptideError::UnsupportedMediator(mediator))?;
                map.insert(mediator, infos.clone());
            }
            ff_info.push(map);
        }
        self.leptonic = Some(model);
        self.process = Some(process);
        self.ff_info = ff_info;
        Ok(())
    }

    /// Per-target-species cross sections for one event, in nanobarns.
    ///
    /// Output order matches the hadronic-current collection returned by
    /// the nuclear model. Every value is finite and non-negative; a
    /// non-finite result aborts with `NonFiniteCrossSection`.
    pub fn cross_section(&self, event: &Event) -> Result<Vec<f64>, RiptideError> {
        let process = self
            .process
            .as_ref()
            .ok_or(RiptideError::UninitializedProcess)?;
        let leptonic = self
            .leptonic
            .as_ref()
            .ok_or(RiptideError::UninitializedProcess)?;

        let momenta = event.momenta();
        let lepton_current = leptonic.currents(momenta)?;
        let hadron_current = self.nuclear.calc_currents(event, &self.ff_info)?;

        let n_targets = hadron_current.len();
        let nlep_spins = lepton_current
            .values()
            .next()
            .map_or(0, std::vec::Vec::len);
        let nhad_spins = self.nuclear.n_spins();

        let mut amps2 = vec![0.0; n_targets];
        for i in 0..nlep_spins {
            for j in 0..nhad_spins {
                let mut amps = vec![Complex64::ZERO; n_targets];
                for mu in 0..4 {
                    let sign = if mu == 0 { 1.0 } else { -1.0 };
                    for (boson, lcurrent) in &lepton_current {
                        for (k, hadronic) in hadron_current.iter().enumerate() {
                            if let Some(hcurrent) = hadronic.get(boson) {
                                amps[k] += sign * (lcurrent[i][mu] * hcurrent[j][mu]);
                            }
                        }
                    }
                }
                for (k, amp) in amps.iter().enumerate() {
                    amps2[k] += amp.abs_sq();
                }
            }
        }

        let mut spin_avg = 1.0;
        if !process.beam().is_neutrino() {
            spin_avg *= 2.0;
        }
        if nhad_spins > 1 {
            spin_avg *= 2.0;
        }

        let m_beam = process.beam().mass();
        let flux = 2.0 * momenta[1].e * 2.0 * (momenta[0].p2() + m_beam * m_beam).sqrt();

        let mut xsecs = vec![0.0; n_targets];
        for (k, xsec) in xsecs.iter_mut().enumerate() {
            let value = amps2[k] * HBARC2 / spin_avg / flux * TO_NB;
            if !value.is_finite() {
                return Err(RiptideError::NonFiniteCrossSection { index: k, value });
            }
            *xsec = value;
            debug!("Xsec[{k}] = {value}");
        }
        Ok(xsecs)
    }

    /// Cross sections for a batch of independent events, in parallel.
    ///
    /// Per-event evaluation reads only the immutable resolved tables, so
    /// events are embarrassingly parallel.
    pub fn cross_sections_par(&self, events: &[Event]) -> Result<Vec<Vec<f64>>, RiptideError> {
        events
            .par_iter()
            .map(|event| self.cross_section(event))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pid::Pid;

    /// Single-spin mock: the hadronic current is δ^{μ0} under every
    /// mediator the form-factor tables carry, proton target only.
    struct UnitCurrentModel;

    impl NuclearModel for UnitCurrentModel {
        fn calc_currents(
            &self,
            _event: &Event,
            ff_info: &[FfInfoMap],
        ) -> Result<Vec<Currents>, RiptideError> {
            let mut proton = Currents::new();
            for mediator in ff_info[0].keys() {
                proton.insert(
                    *mediator,
                    vec![[
                        Complex64::ONE,
                        Complex64::ZERO,
                        Complex64::ZERO,
                        Complex64::ZERO,
                    ]],
                );
            }
            Ok(vec![proton])
        }

        fn n_spins(&self) -> usize {
            1
        }
    }

    fn nu_mu_event() -> Event {
        let beam = FourVector::new(1000.0, 0.0, 0.0, 1000.0);
        let target = FourVector::new(938.272, 0.0, 0.0, 0.0);
        let m_mu = 105.658_375_5;
        let e_out: f64 = 700.0;
        let p_out = (e_out * e_out - m_mu * m_mu).sqrt();
        let theta: f64 = 0.3;
        Event::new(vec![
            beam,
            target,
            FourVector::new(e_out, p_out * theta.sin(), 0.0, p_out * theta.cos()),
        ])
    }

    #[test]
    fn uninitialized_engine_fails() {
        let engine = HardScattering::new(Box::new(UnitCurrentModel));
        let err = engine.cross_section(&nu_mu_event()).unwrap_err();
        assert_eq!(err, RiptideError::UninitializedProcess);
    }

    #[test]
    fn neutrino_cc_cross_section_positive_finite() {
        let mut engine = HardScattering::new(Box::new(UnitCurrentModel));
        engine
            .set_process(ProcessInfo::new(vec![Pid::NU_MU, Pid::MUON]))
            .expect("process resolves");
        let xsecs = engine.cross_section(&nu_mu_event()).expect("no pole");
        assert_eq!(xsecs.len(), 1, "one target species from the mock");
        assert!(xsecs[0].is_finite() && xsecs[0] > 0.0, "xsec = {}", xsecs[0]);
    }

    #[test]
    fn batch_matches_serial() {
        let mut engine = HardScattering::new(Box::new(UnitCurrentModel));
        engine
            .set_process(ProcessInfo::new(vec![Pid::NU_MU, Pid::MUON]))
            .expect("process resolves");
        let events: Vec<Event> = (0..8).map(|_| nu_mu_event()).collect();
        let batch = engine.cross_sections_par(&events).expect("batch ok");
        let serial = engine.cross_section(&events[0]).expect("serial ok");
        for row in &batch {
            assert_eq!(row, &serial, "pure per-event computation");
        }
    }

    /// Two-spin mock whose second spin state carries a zero current: same
    /// amp2 as `UnitCurrentModel`, but the target spin average kicks in.
    struct TwoSpinMock;

    impl NuclearModel for TwoSpinMock {
        fn calc_currents(
            &self,
            _event: &Event,
            ff_info: &[FfInfoMap],
        ) -> Result<Vec<Currents>, RiptideError> {
            let mut proton = Currents::new();
            for mediator in ff_info[0].keys() {
                proton.insert(
                    *mediator,
                    vec![
                        [
                            Complex64::ONE,
                            Complex64::ZERO,
                            Complex64::ZERO,
                            Complex64::ZERO,
                        ],
                        [Complex64::ZERO; 4],
                    ],
                );
            }
            Ok(vec![proton])
        }

        fn n_spins(&self) -> usize {
            2
        }
    }

    #[test]
    fn target_spin_multiplicity_halves_cross_section() {
        let process = ProcessInfo::new(vec![Pid::NU_MU, Pid::MUON]);
        let mut one = HardScattering::new(Box::new(UnitCurrentModel));
        one.set_process(process.clone()).expect("process resolves");
        let mut two = HardScattering::new(Box::new(TwoSpinMock));
        two.set_process(process).expect("process resolves");
        let event = nu_mu_event();
        let x1 = one.cross_section(&event).expect("ok")[0];
        let x2 = two.cross_section(&event).expect("ok")[0];
        assert!(
            (x2 - 0.5 * x1).abs() < 1e-12 * x1,
            "spin-2 target averages down by 2: {x2} vs {x1}"
        );
    }
}
