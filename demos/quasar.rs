//! # Quasar
//!
//! Accretion disk plus polar beams, with a force-field poke partway
//! through to show the cursor interaction.
//!
//! Run with: `cargo run --example quasar --release`

use gpe::prelude::*;

fn main() {
    let config = GalaxyConfig::new()
        .with_count(50_000)
        .with_radius(3.0)
        .with_beam_height(2.5)
        .with_seed(7);

    let mut sim = Simulation::new(Variant::QuasarDisk, config).expect("valid config");

    println!("=== GPE Quasar Demo ===");
    println!("Disk particles: {}", sim.field().len());
    println!("Beam particles: {}", sim.beams().map_or(0, |b| b.len()));

    // Let the disk orbit for a second
    for _ in 0..60 {
        sim.tick(1.0 / 60.0);
    }

    // Hold the repel trigger near the disk edge for half a second
    sim.set_cursor(Vec3::new(2.0, 0.0, 0.0));
    sim.set_repelling(true);
    for _ in 0..30 {
        sim.tick(1.0 / 60.0);
    }
    sim.set_repelling(false);
    sim.clear_cursor();

    let orbit = sim.orbits()[0];
    println!(
        "First orbit: a={:.3} b={:.3} angle={:.3}",
        orbit.semi_major, orbit.semi_minor, orbit.angle
    );
    println!("First disk particle: {:?}", sim.field().position(0));
    println!(
        "First beam particle: {:?}",
        sim.beams().expect("quasar has beams").position(0)
    );
}
