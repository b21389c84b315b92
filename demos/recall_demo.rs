//! Example: Recall a noisy diamond
//!
//! Demonstrates how to:
//! 1. Train a network on the reference square and diamond
//! 2. Corrupt the diamond with 25% pixel noise
//! 3. Step the simulator until it converges or hits the iteration cap
//! 4. Print each accepted image with its energy
//!
//! Usage: cargo run --example recall_demo -- [hebbian|pseudoinverse-style] [seed]

use anyhow::Context;
use hopfield::{patterns, Simulator, SimulatorConfig, StepOutcome, TrainingMethod};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let method: TrainingMethod = args
        .next()
        .unwrap_or_else(|| "hebbian".to_string())
        .parse()?;
    let seed: u64 = args
        .next()
        .map(|s| s.parse())
        .transpose()
        .context("seed must be an unsigned integer")?
        .unwrap_or(42);

    println!("=== Hopfield Recall ({}) ===\n", method);

    let config = SimulatorConfig::default().with_seed(seed);
    let mut sim = Simulator::new(config)?;
    sim.initialize_with_noise(&patterns::reference_set(), method, &patterns::diamond())?;

    let target = patterns::diamond();
    let initial = sim.current_image().context("simulator has no state")?.clone();
    println!("Initial (noisy) pattern, {} pixels off:", initial.hamming_distance(&target)?);
    println!("{}\nEnergy: {:.2}\n", initial, sim.energy()?);

    loop {
        match sim.run_step()? {
            StepOutcome::Accepted => {
                let img = sim.current_image().context("simulator has no state")?;
                println!("Iteration {} / {}:", sim.iterations(), sim.config().max_iterations);
                println!("{}\nEnergy: {:.2}\n", img, sim.energy()?);
            }
            StepOutcome::Converged | StepOutcome::Exhausted | StepOutcome::Skipped => break,
        }
    }

    let last = sim.current_image().context("simulator has no state")?;
    println!("Finished: {}", sim.status());
    println!("Distance to diamond: {}", last.hamming_distance(&target)?);
    println!("Distance to square:  {}", last.hamming_distance(&patterns::square())?);

    Ok(())
}
