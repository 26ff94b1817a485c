// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: cross-section assembly end to end.
//!
//! The hadronic side is mocked with fixed current tensors so the expected
//! contraction, spin sums, and flux normalization can be recomputed by
//! hand and compared against the assembler.

use riptide::constants::{HBARC2, TO_NB};
use riptide::tolerances::XSEC_REL;
use riptide::{
    Beam, Complex64, Current, Currents, Event, FfDictionary, FfInfoMap, FourVector,
    HardScattering, LeptonicModel, NuclearModel, Pid, ProcessInfo, RiptideError, SmCurrents,
};

/// Fixed hadronic current tensor for the proton target, one spin state.
struct FixedCurrentModel {
    current: Current,
}

impl FixedCurrentModel {
    fn forward() -> Self {
        Self {
            current: [
                Complex64::new(1.0, 0.0),
                Complex64::new(0.3, -0.1),
                Complex64::ZERO,
                Complex64::new(-0.2, 0.4),
            ],
        }
    }
}

impl NuclearModel for FixedCurrentModel {
    fn calc_currents(
        &self,
        _event: &Event,
        ff_info: &[FfInfoMap],
    ) -> Result<Vec<Currents>, RiptideError> {
        let mut proton = Currents::new();
        for mediator in ff_info[0].keys() {
            proton.insert(*mediator, vec![self.current]);
        }
        Ok(vec![proton])
    }

    fn n_spins(&self) -> usize {
        1
    }
}

fn nu_event() -> Event {
    let beam = Beam::Monochromatic { energy: 1000.0 }.flux(&[]);
    let target = FourVector::new(938.272, 0.0, 0.0, 0.0);
    let m_mu = 105.658_375_5;
    let e_out: f64 = 650.0;
    let p_out = (e_out * e_out - m_mu * m_mu).sqrt();
    let theta: f64 = 0.35;
    Event::new(vec![
        beam,
        target,
        FourVector::new(e_out, p_out * theta.sin(), 0.0, p_out * theta.cos()),
    ])
}

/// End-to-end W-exchange scenario: recompute amp², spin average, and flux
/// by hand from the leptonic currents and check the assembler agrees.
#[test]
fn assembler_matches_hand_contraction() {
    let process = ProcessInfo::new(vec![Pid::NU_MU, Pid::MUON]);
    let mut engine = HardScattering::new(Box::new(FixedCurrentModel::forward()));
    engine.set_process(process.clone()).expect("process resolves");

    let event = nu_event();
    let xsecs = engine.cross_section(&event).expect("no pole");
    assert_eq!(xsecs.len(), 1);

    // independent re-contraction from the same leptonic currents
    let model = SmCurrents::new(&process).expect("resolves");
    let currents = model.currents(event.momenta()).expect("no pole");
    let pairs = &currents[&Pid::W_PLUS];
    let hadron = FixedCurrentModel::forward().current;
    let mut amp2 = 0.0;
    for lep in pairs {
        let mut amp = Complex64::ZERO;
        for mu in 0..4 {
            let sign = if mu == 0 { 1.0 } else { -1.0 };
            amp += sign * (lep[mu] * hadron[mu]);
        }
        amp2 += amp.abs_sq();
    }
    // neutrino beam, single hadronic spin: no spin averaging
    let momenta = event.momenta();
    let flux = 2.0 * momenta[1].e * 2.0 * momenta[0].p();
    let expected = amp2 * HBARC2 / flux * TO_NB;
    assert!(
        (xsecs[0] - expected).abs() < XSEC_REL * expected,
        "assembler {} vs hand {expected}",
        xsecs[0]
    );
}

/// Cross sections stay finite and non-negative over a kinematic scan.
#[test]
fn non_negative_over_kinematic_scan() {
    let mut engine = HardScattering::new(Box::new(FixedCurrentModel::forward()));
    engine
        .set_process(ProcessInfo::new(vec![Pid::NU_MU, Pid::MUON]))
        .expect("process resolves");

    let m_mu: f64 = 105.658_375_5;
    for e_beam in [500.0, 1000.0, 3000.0] {
        for step in 1..10 {
            let theta = f64::from(step) * 0.3;
            let e_out = 0.6 * e_beam;
            let p_out = (e_out * e_out - m_mu * m_mu).sqrt();
            let event = Event::new(vec![
                FourVector::new(e_beam, 0.0, 0.0, e_beam),
                FourVector::new(938.272, 0.0, 0.0, 0.0),
                FourVector::new(e_out, p_out * theta.sin(), 0.0, p_out * theta.cos()),
            ]);
            let xsecs = engine.cross_section(&event).expect("no pole");
            for (k, x) in xsecs.iter().enumerate() {
                assert!(
                    x.is_finite() && *x >= 0.0,
                    "xsec[{k}] = {x} at E = {e_beam}, θ = {theta}"
                );
            }
        }
    }
}

/// Degenerate kinematics on the photon pole must surface as an error from
/// the engine, never as a NaN or Inf cross section.
#[test]
fn pole_kinematics_error_not_nan() {
    let mut engine = HardScattering::new(Box::new(FixedCurrentModel::forward()));
    engine
        .set_process(ProcessInfo::new(vec![Pid::ELECTRON, Pid::ELECTRON]))
        .expect("process resolves");
    let p = FourVector::new(700.0, 0.0, 0.0, 699.9);
    let event = Event::new(vec![p, FourVector::new(938.272, 0.0, 0.0, 0.0), p]);
    let err = engine.cross_section(&event).unwrap_err();
    assert!(matches!(err, RiptideError::PropagatorPole { .. }));
}

/// Two-mediator leptonic mock: both bosons carry the same unit current,
/// so a coherent μ-sum gives |1 + 1|² = 4 per pairing, while an incoherent
/// one would give 2. Pins down the interference convention.
struct TwoMediatorModel;

impl LeptonicModel for TwoMediatorModel {
    fn currents(&self, _momenta: &[FourVector]) -> Result<Currents, RiptideError> {
        let unit: Current = [
            Complex64::ONE,
            Complex64::ZERO,
            Complex64::ZERO,
            Complex64::ZERO,
        ];
        let mut currents = Currents::new();
        currents.insert(Pid::PHOTON, vec![unit]);
        currents.insert(Pid::Z_BOSON, vec![unit]);
        Ok(currents)
    }

    fn form_factors(&self) -> Result<FfDictionary, RiptideError> {
        let mut dictionary = FfDictionary::new();
        for target in [Pid::PROTON, Pid::NEUTRON, Pid::CARBON] {
            for mediator in [Pid::PHOTON, Pid::Z_BOSON] {
                dictionary.insert((target, mediator), vec![]);
            }
        }
        Ok(dictionary)
    }
}

#[test]
fn mediators_interfere_within_one_spin_pairing() {
    let mut engine = HardScattering::new(Box::new(FixedCurrentModel {
        current: [
            Complex64::ONE,
            Complex64::ZERO,
            Complex64::ZERO,
            Complex64::ZERO,
        ],
    }));
    engine
        .set_process_with_model(
            ProcessInfo::new(vec![Pid::NU_MU, Pid::NU_MU]),
            Box::new(TwoMediatorModel),
        )
        .expect("mock installs");
    let event = nu_event();
    let xsecs = engine.cross_section(&event).expect("ok");

    let momenta = event.momenta();
    let flux = 2.0 * momenta[1].e * 2.0 * momenta[0].p();
    let coherent = 4.0 * HBARC2 / flux * TO_NB;
    assert!(
        (xsecs[0] - coherent).abs() < XSEC_REL * coherent,
        "coherent mediator sum |1+1|² = 4: got {}, expected {coherent}",
        xsecs[0]
    );
}
