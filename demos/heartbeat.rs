//! # Heartbeat
//!
//! A particle cube pulsed in and out by the alternating force phases.
//! Prints the cloud's mean distance from center every few pulses so the
//! beat is visible in the numbers.
//!
//! Run with: `cargo run --example heartbeat --release`

use gpe::prelude::*;

fn mean_radius(field: &ParticleField) -> f32 {
    let center = field.center();
    let sum: f32 = (0..field.len())
        .map(|i| (field.position(i) - center).length())
        .sum();
    sum / field.len() as f32
}

fn main() {
    let config = GalaxyConfig::new().with_count(20_000).with_seed(3);
    let mut sim = Simulation::new(Variant::Heartbeat, config).expect("valid config");

    println!("=== GPE Heartbeat Demo ===");
    println!("Particles: {}", sim.field().len());

    for second in 1..=3 {
        for _ in 0..60 {
            sim.tick(1.0 / 60.0);
        }
        println!(
            "after {}s: mean radius {:.4}",
            second,
            mean_radius(sim.field())
        );
    }
}
