// Host-side tests for the particle simulation.

use fx_core::{Particle, ParticleField, PARTICLE_COUNT};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[test]
fn field_spawns_exact_count_inside_bounds() {
    let bounds = Vec2::new(1280.0, 720.0);
    let field = ParticleField::new(bounds, &mut rng(1));
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x < bounds.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < bounds.y);
    }
}

#[test]
fn spawn_ranges_hold() {
    let bounds = Vec2::new(800.0, 600.0);
    let mut r = rng(2);
    for _ in 0..500 {
        let p = Particle::spawn(&mut r, bounds);
        assert!(p.size >= 0.5 && p.size < 2.5);
        assert!(p.opacity >= 0.2 && p.opacity < 0.7);
        assert!(p.vel.x.abs() <= 0.5);
        assert!(p.vel.y.abs() <= 0.5);
    }
}

#[test]
fn positions_stay_in_bounds_after_many_steps() {
    // Wrap-around invariant: [0, bound) on both axes no matter how long
    // the field runs.
    let bounds = Vec2::new(37.5, 19.25);
    let mut field = ParticleField::new(bounds, &mut rng(3));
    for _ in 0..10_000 {
        field.step();
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < bounds.x, "x out of bounds: {}", p.pos.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < bounds.y, "y out of bounds: {}", p.pos.y);
        }
    }
}

#[test]
fn wrap_moves_to_opposite_edge() {
    let bounds = Vec2::new(100.0, 100.0);
    let mut p = Particle {
        pos: Vec2::new(99.9, 0.1),
        vel: Vec2::new(0.3, -0.3),
        size: 1.0,
        opacity: 0.5,
    };
    p.step(bounds);
    // x wrapped past the right edge, y wrapped past the top edge
    assert!((p.pos.x - 0.2).abs() < 1e-4);
    assert!((p.pos.y - 99.8).abs() < 1e-3);
}

#[test]
fn zero_sized_bounds_do_not_poison_positions() {
    // A hidden iframe can report a 0-wide viewport; the field must clamp
    // instead of wrapping every coordinate to NaN.
    let mut field = ParticleField::new(Vec2::new(0.0, 100.0), &mut rng(9));
    for _ in 0..100 {
        field.step();
    }
    let bounds = field.bounds();
    assert!(bounds.x >= 1.0 && bounds.y >= 1.0);
    for p in field.particles() {
        assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
        assert!(p.pos.x >= 0.0 && p.pos.x < bounds.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < bounds.y);
    }
}

#[test]
fn resize_to_zero_bounds_clamps() {
    let mut r = rng(10);
    let mut field = ParticleField::new(Vec2::new(800.0, 600.0), &mut r);
    field.resize(Vec2::ZERO, &mut r);
    field.step();
    assert_eq!(field.bounds(), Vec2::ONE);
    for p in field.particles() {
        assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
    }
}

#[test]
fn velocity_is_constant_over_lifetime() {
    let bounds = Vec2::new(640.0, 480.0);
    let mut field = ParticleField::new(bounds, &mut rng(4));
    let initial: Vec<Vec2> = field.particles().iter().map(|p| p.vel).collect();
    for _ in 0..1000 {
        field.step();
    }
    for (p, v0) in field.particles().iter().zip(initial) {
        assert_eq!(p.vel, v0);
    }
}

#[test]
fn resize_regenerates_wholesale() {
    let mut r = rng(5);
    let mut field = ParticleField::new(Vec2::new(1920.0, 1080.0), &mut r);
    let new_bounds = Vec2::new(375.0, 812.0);
    field.resize(new_bounds, &mut r);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    assert_eq!(field.bounds(), new_bounds);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x < new_bounds.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < new_bounds.y);
    }
}
