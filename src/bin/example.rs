//! Column Frequency Example - Chimney under self-weight

use column_freq::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Column Frequency Example: Chimney ===\n");

    // 30 m chimney
    // EI = 2.0e9 N·m², mu = 500 kg/m
    // 50 kN tip load (e.g. a platform on top)
    let height = 30.0;
    let ei = 2.0e9;
    let mu = 500.0;
    let tip_load = -50_000.0;

    let case = ColumnCase::prismatic(height, ei, mu, tip_load, 10);

    println!("Running first-order and second-order analyses...\n");
    let linear = case.analyse(&AnalysisOptions::linear())?;
    let p_delta = case.analyse(&AnalysisOptions::p_delta())?;

    println!("First-order:  f1 = {:.4} Hz, T1 = {:.4} s", linear.frequency, linear.period());
    println!("Second-order: f1 = {:.4} Hz, T1 = {:.4} s", p_delta.frequency, p_delta.period());
    println!(
        "Softening from axial load: {:.2}%",
        100.0 * (1.0 - p_delta.frequency / linear.frequency)
    );

    println!("\nAxial force per element (base to tip):");
    for (k, p) in p_delta.axial_loads.iter().enumerate() {
        println!("  E{:02}: P = {:.1} kN", k, p / 1000.0);
    }

    println!("\nFundamental mode shape (transverse displacement):");
    for (j, w) in p_delta.displacements().iter().enumerate() {
        println!("  N{:02}: z = {:5.1} m, w = {:+.4}", j, height * j as f64 / 10.0, w);
    }

    // Mesh convergence
    println!("\n=== Mesh Convergence ===\n");
    for n in [1, 2, 5, 10, 20, 40] {
        let f = analyse_case(height, &vec![ei; n], &vec![mu; n], tip_load, n)?;
        println!("  n = {:3}: f1 = {:.5} Hz", n, f);
    }

    // Tip load sweep up to buckling
    println!("\n=== Tip Load Sweep ===\n");
    for step in 0..=12 {
        let load = -5.0e5 * step as f64;
        match case.clone().with_tip_load(load).analyse(&AnalysisOptions::default()) {
            Ok(result) => println!("  P1 = {:7.1} kN: f1 = {:.4} Hz", load / 1000.0, result.frequency),
            Err(FEAError::Unstable { eigenvalue }) => {
                println!("  P1 = {:7.1} kN: buckled (lambda = {:.3e})", load / 1000.0, eigenvalue);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("\n=== Analysis Complete ===");
    Ok(())
}
