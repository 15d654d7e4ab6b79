//! # Spiral Galaxy
//!
//! Generates a spiral field and spins it for a couple of seconds of
//! simulated time, printing a summary the way a host render loop would
//! see it. Headless: pipe the buffers into your renderer of choice.
//!
//! Run with: `cargo run --example spiral --release [count]`

use gpe::prelude::*;

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000);

    let config = GalaxyConfig::new()
        .with_count(count)
        .with_radius(5.0)
        .with_branches(3)
        .with_ramp(ColorRamp::new(
            parse_hex("#ff0055").unwrap(),
            parse_hex("#1a33cc").unwrap(),
        ))
        .with_seed(42);

    let mut sim = Simulation::new(Variant::Spiral, config).expect("valid config");

    println!("=== GPE Spiral Demo ===");
    println!("Particles: {}", sim.field().len());
    println!("Position buffer: {} bytes", sim.field().position_bytes().len());

    // Two seconds of simulated time at a steady 60 Hz
    for _ in 0..120 {
        sim.tick(1.0 / 60.0);
    }

    let mut max_radius: f32 = 0.0;
    for i in 0..sim.field().len() {
        max_radius = max_radius.max(sim.field().position(i).length());
    }
    println!("Max distance from center after 2s: {:.3}", max_radius);
    println!("First particle: {:?}", sim.field().position(0));
    println!("Redraw pending: {}", sim.take_redraw());
}
