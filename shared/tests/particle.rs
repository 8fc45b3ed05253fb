use shared::{particle_count, PageSettings, Particle, ParticleField};

#[test]
fn count_follows_area() {
    assert_eq!(particle_count(1920.0, 1080.0, 90_000.0), 23);
    assert_eq!(particle_count(299.0, 300.0, 90_000.0), 0);
    assert_eq!(particle_count(300.0, 300.0, 90_000.0), 1);
    assert_eq!(particle_count(0.0, 1080.0, 90_000.0), 0);
}

#[test]
fn particles_start_within_ranges() {
    let settings = PageSettings::default();
    let field = ParticleField::new(1920.0, 1080.0, 7, &settings);

    assert_eq!(field.particles().len(), 23);

    for particle in field.particles() {
        assert!((0.0..1920.0).contains(&particle.position.0));
        assert!((0.0..1080.0).contains(&particle.position.1));
        assert!((0.6..2.2).contains(&particle.radius));

        let (vx, vy) = particle.velocity();
        assert!((-0.25..0.25).contains(&vx));
        assert!((-0.25..0.25).contains(&vy));
    }
}

#[test]
fn resize_regenerates() {
    let settings = PageSettings::default();
    let mut field = ParticleField::new(1920.0, 1080.0, 7, &settings);
    let before = field.particles().to_vec();

    field.resize(1280.0, 720.0);

    assert_eq!(field.width(), 1280.0);
    assert_eq!(field.height(), 720.0);
    assert_eq!(field.particles().len(), 10);
    assert_ne!(field.particles(), &before[..10]);
}

#[test]
fn same_seed_same_field() {
    let settings = PageSettings::default();
    let a = ParticleField::new(800.0, 600.0, 42, &settings);
    let b = ParticleField::new(800.0, 600.0, 42, &settings);

    assert_eq!(a.particles(), b.particles());
}

#[test]
fn advance_moves_uniformly() {
    let mut particle = Particle::new((10.0, 10.0), 1.0, (0.25, -0.125));

    particle.tick(1.0, (100.0, 100.0));
    assert_eq!(particle.position, (10.25, 9.875));

    particle.tick(2.0, (100.0, 100.0));
    assert_eq!(particle.position, (10.75, 9.625));
}

#[test]
fn edges_wrap_to_opposite_side() {
    let bounds = (100.0, 50.0);

    let mut left = Particle::new((0.1, 25.0), 1.0, (-0.25, 0.0));
    left.tick(1.0, bounds);
    assert_eq!(left.position, (100.0, 25.0));

    let mut bottom = Particle::new((50.0, 49.9), 1.0, (0.0, 0.25));
    bottom.tick(1.0, bounds);
    assert_eq!(bottom.position, (50.0, 0.0));
}

#[test]
fn field_stays_in_bounds() {
    let settings = PageSettings::default();
    let mut field = ParticleField::new(600.0, 600.0, 3, &settings);

    for _ in 0..10_000 {
        field.advance(1.0);
    }

    for particle in field.particles() {
        assert!((0.0..=600.0).contains(&particle.position.0));
        assert!((0.0..=600.0).contains(&particle.position.1));
    }
}

#[test]
fn frame_steps_are_clamped() {
    assert_eq!(shared::frames_elapsed(1000.0, 1000.0), 0.0);
    assert_eq!(shared::frames_elapsed(1000.0, 1050.0), 3.0);
    assert_eq!(shared::frames_elapsed(1000.0, 9000.0), shared::MAX_FRAME_STEP);
    assert_eq!(shared::frames_elapsed(1000.0, 900.0), 0.0);
}

#[test]
fn empty_ranges_are_constant() {
    let settings = PageSettings {
        particle_speed: 0.0,
        particle_radius_min: 1.5,
        particle_radius_max: 1.5,
        ..PageSettings::default()
    };
    let field = ParticleField::new(600.0, 600.0, 11, &settings);

    assert_eq!(field.particles().len(), 4);

    for particle in field.particles() {
        assert_eq!(particle.radius, 1.5);
        assert_eq!(particle.velocity(), (0.0, 0.0));
    }
}
