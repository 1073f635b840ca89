use std::f64::consts::PI;

use approx::assert_relative_eq;
use column_freq::math::generalized_symmetric_eigen;
use column_freq::prelude::*;

const G: f64 = 9.81;

fn chimney(tip_load: f64, n: usize) -> ColumnCase {
    // 30 m chimney, EI = 2e9 N·m², 500 kg/m
    ColumnCase::prismatic(30.0, 2.0e9, 500.0, tip_load, n)
}

#[test]
fn chimney_scenario_has_real_positive_frequency() {
    let f = analyse_case(30.0, &[2.0e9; 10], &[500.0; 10], -50_000.0, 10).unwrap();

    assert!(f.is_finite());
    assert!(f > 0.3 && f < 5.0, "unexpected chimney frequency {f}");
}

#[test]
fn stiff_column_with_tip_mass_approaches_single_dof() {
    let (h, ei, mu) = (10.0_f64, 1.0e12, 1.0);
    let tip_mass = 10_000.0;

    let f = analyse_case(h, &[ei; 10], &[mu; 10], -tip_mass * G, 10).unwrap();

    // Cantilever tip stiffness and Rayleigh equivalent mass
    let k = 3.0 * ei / h.powi(3);
    let m = tip_mass + 0.2357 * mu * h;
    let f_sdof = (k / m).sqrt() / (2.0 * PI);

    assert_relative_eq!(f, f_sdof, max_relative = 1e-3);
}

#[test]
fn mesh_refinement_converges() {
    let coarse = chimney(-50_000.0, 1).analyse(&AnalysisOptions::default()).unwrap();
    let fine = chimney(-50_000.0, 10).analyse(&AnalysisOptions::default()).unwrap();
    let finer = chimney(-50_000.0, 40).analyse(&AnalysisOptions::default()).unwrap();

    assert_relative_eq!(coarse.frequency, fine.frequency, max_relative = 0.05);
    assert_relative_eq!(fine.frequency, finer.frequency, max_relative = 0.01);
}

#[test]
fn compression_softens_monotonically() {
    let options = AnalysisOptions::default();
    let mut previous = f64::INFINITY;

    for step in 0..=10 {
        let tip_load = -5.0e5 * step as f64;
        let f = chimney(tip_load, 10).analyse(&options).unwrap().frequency;
        assert!(f < previous, "frequency did not drop at tip load {tip_load}: {f} >= {previous}");
        previous = f;
    }
}

#[test]
fn frequency_vanishes_near_critical_load() {
    // Critical tip load of the chimney is about π²EI/(4H²) ≈ 5.48 MN
    let case = chimney(-5.0e6, 10);
    let linear = case.analyse(&AnalysisOptions::linear()).unwrap();
    let p_delta = case.analyse(&AnalysisOptions::p_delta()).unwrap();

    assert!(p_delta.frequency < 0.5 * linear.frequency);
}

#[test]
fn buckled_column_is_reported_unstable() {
    let result = chimney(-2.0e7, 10).analyse(&AnalysisOptions::default());

    match result {
        Err(FEAError::Unstable { eigenvalue }) => assert!(eigenvalue <= 0.0),
        other => panic!("expected unstable column, got {other:?}"),
    }
}

#[test]
fn linear_analysis_ignores_axial_load_in_stiffness() {
    // Same tip mass, only the geometric correction differs
    let case = chimney(-1.0e6, 10);
    let linear = case.analyse(&AnalysisOptions::linear()).unwrap();
    let p_delta = case.analyse(&AnalysisOptions::p_delta()).unwrap();

    assert_eq!(linear.tip_mass, p_delta.tip_mass);
    assert!(p_delta.frequency < linear.frequency);
}

#[test]
fn reference_conventions_mirror_fixed_base_without_preload() {
    // A prismatic column clamped at either end has the same spectrum
    let case = chimney(0.0, 10);
    let reference = case.analyse(&AnalysisOptions::reference()).unwrap();
    let fixed_base = case.analyse(&AnalysisOptions::linear()).unwrap();

    assert_relative_eq!(reference.frequency, fixed_base.frequency, max_relative = 1e-9);
    // Clamped at node N, largest displacement at node 0
    let w = reference.displacements();
    assert_eq!(w[10], 0.0);
    assert_relative_eq!(w[0], 1.0, epsilon = 1e-12);
}

#[test]
fn reference_conventions_with_compressive_preload_are_ill_posed() {
    // P1/g with P1 < 0 makes the lumped mass negative
    let result = chimney(-50_000.0, 10).analyse(&AnalysisOptions::reference());
    assert!(matches!(result, Err(FEAError::IllPosedSystem(_))));
}

#[test]
fn reference_conventions_with_tensile_preload_match_hand_assembly() {
    let (h, ei, mu, p1, n) = (12.0, 3.0e8, 200.0, 4.0e4, 4);
    let options = AnalysisOptions {
        analysis_type: AnalysisType::PDelta,
        ..AnalysisOptions::reference()
    };

    let result = ColumnCase::prismatic(h, ei, mu, p1, n).analyse(&options).unwrap();

    // Axial load accumulates from element 0, tip mass is P1/g as given
    let l = h / n as f64;
    let expected_axial: Vec<f64> = (0..n).map(|k| p1 + mu * l * (k + 1) as f64).collect();
    assert_eq!(result.axial_loads.len(), n);
    for (p, expected) in result.axial_loads.iter().zip(&expected_axial) {
        assert_relative_eq!(*p, *expected, max_relative = 1e-12);
    }
    assert_relative_eq!(result.tip_mass, p1 / G, max_relative = 1e-12);

    // Trailing DOFs removed, lumped mass on DOF 0
    let lengths = vec![l; n];
    let k = stiffness(&lengths, &vec![ei; n], Some(expected_axial.as_slice())).unwrap();
    let m = consistent_mass(&lengths, &vec![mu; n]).unwrap();
    let r = 2 * n;
    let k_red = k.view((0, 0), (r, r)).into_owned();
    let mut m_red = m.view((0, 0), (r, r)).into_owned();
    m_red[(0, 0)] += p1 / G;

    let lambda = generalized_symmetric_eigen(&k_red, &m_red).unwrap().eigenvalues[0];
    assert_relative_eq!(result.eigenvalue, lambda, max_relative = 1e-9);
    assert_relative_eq!(result.frequency, lambda.sqrt() / (2.0 * PI), max_relative = 1e-9);

    // Tension stiffens the column compared to the linear reference run
    let linear = ColumnCase::prismatic(h, ei, mu, p1, n)
        .analyse(&AnalysisOptions::reference())
        .unwrap();
    assert!(result.frequency > linear.frequency);
}

#[test]
fn case_and_options_load_from_json() {
    let case: ColumnCase = serde_json::from_str(
        r#"{
            "height": 30.0,
            "ei": [2.0e9, 2.0e9, 2.0e9],
            "mu": [500.0, 500.0, 500.0],
            "tip_load": -50000.0,
            "num_elements": 3
        }"#,
    )
    .unwrap();
    let options = AnalysisOptions::from_json(r#"{ "analysis_type": "PDelta" }"#).unwrap();

    let result = case.analyse(&options).unwrap();
    assert_eq!(result.num_elements(), 3);
    assert_relative_eq!(result.tip_mass, 50_000.0 / G, max_relative = 1e-12);
}

#[test]
fn stiffness_and_mass_are_symmetric_through_public_api() {
    let disc = Discretization::uniform(12.0, &[3.0e8, 2.0e8, 1.0e8], &[300.0, 200.0, 100.0], 3).unwrap();
    let axial = disc.self_weight_axial_loads(-1.0e4, G);

    let k = stiffness(disc.lengths(), disc.ei(), Some(axial.as_slice())).unwrap();
    let m = consistent_mass(disc.lengths(), disc.mu()).unwrap();

    assert_eq!(k.shape(), (8, 8));
    assert_eq!(m.shape(), (8, 8));
    assert_eq!(k, k.transpose());
    assert_eq!(m, m.transpose());
}
