//! Runs the reference score batches through the gate and prints each decision.
//!
//! ```text
//! RUST_LOG=gatekeeper=debug cargo run --example scenarios
//! ```

use gatekeeper::Gatekeeper;

const SCENARIOS: &[(&str, &[f32])] = &[
    ("A", &[0.95, 0.80, 0.79, 0.78]),
    ("B", &[0.45, 0.30, 0.29, 0.20]),
    ("C", &[0.99, 0.98, 0.97, 0.96, 0.95]),
    ("D", &[0.88, 0.87, 0.86, 0.50, 0.49]),
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let gate = Gatekeeper::from_env()?;
    tracing::info!(config = ?gate.config(), "Gatekeeper configured");

    for (name, scores) in SCENARIOS {
        let outcome = gate.evaluate(scores);

        println!("--- SCENARIO {name} ---");
        println!("Scores: {scores:?}");
        println!("Result: {:?}", outcome.mask);
        println!("Status: {outcome}");
        println!("{}\n", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
