use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::PageSettings;

/// A drifting dot of the background animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Particle {
    /// Position in canvas pixels.
    pub position: (f64, f64),
    /// Radius in canvas pixels.
    pub radius: f64,
    velocity: (f64, f64),
}

impl Particle {
    /// Instantiates a new [`Particle`] moving by `velocity` pixels per frame.
    pub fn new(position: (f64, f64), radius: f64, velocity: (f64, f64)) -> Particle {
        Particle {
            position,
            radius,
            velocity,
        }
    }

    /// Velocity in pixels per frame.
    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    /// Moves the particle by `dt` frames of uniform motion, wrapping across the edges of a `width` by `height`
    /// surface.
    pub fn tick(&mut self, dt: f64, (width, height): (f64, f64)) {
        self.position.0 = wrap(self.position.0 + self.velocity.0 * dt, width);
        self.position.1 = wrap(self.position.1 + self.velocity.1 * dt, height);
    }
}

/// Toroidal wrap: leaving one edge re-enters at the opposite one.
fn wrap(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

/// Longest step, in frames, a single [`ParticleField::advance`] may take.
pub const MAX_FRAME_STEP: f64 = 4.0;

/// Frames of a 60 Hz clock elapsed between two timestamps in milliseconds, clamped to `0.0..=MAX_FRAME_STEP`.
pub fn frames_elapsed(previous: f64, now: f64) -> f64 {
    ((now - previous) * 0.06).clamp(0.0, MAX_FRAME_STEP)
}

/// Number of particles kept on a `width` by `height` surface.
pub fn particle_count(width: f64, height: f64, density: f64) -> usize {
    if density > 0.0 && width > 0.0 && height > 0.0 {
        (width * height / density).floor() as usize
    } else {
        0
    }
}

/// The density-proportional particle set drawn behind the page.
///
/// The field never stops by itself; whatever drives [`ParticleField::advance`] decides when to stop calling it.
#[derive(Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: ChaCha8Rng,
    density: f64,
    radius: (f64, f64),
    speed: f64,
}

impl ParticleField {
    /// Populates a `width` by `height` surface, drawing positions and velocities from `seed`.
    pub fn new(width: f64, height: f64, seed: u64, settings: &PageSettings) -> ParticleField {
        let mut field = ParticleField {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            density: settings.particle_density,
            radius: (settings.particle_radius_min, settings.particle_radius_max),
            speed: settings.particle_speed,
        };

        field.resize(width, height);
        field
    }

    /// Surface width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopts new surface dimensions and regenerates every particle, discarding the previous set.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let count = particle_count(self.width, self.height, self.density);

        self.particles = (0..count).map(|_| self.spawn()).collect_vec();

        log::debug!(
            "particle field {}x{} regenerated with {count} particles",
            self.width,
            self.height
        );
    }

    /// Advances every particle by `dt` frames.
    pub fn advance(&mut self, dt: f64) {
        let bounds = (self.width, self.height);

        for particle in self.particles.iter_mut() {
            particle.tick(dt, bounds);
        }
    }

    fn spawn(&mut self) -> Particle {
        let position = (
            self.rng.gen_range(0.0..self.width),
            self.rng.gen_range(0.0..self.height),
        );
        let radius = self.sample(self.radius.0, self.radius.1);
        let velocity = (
            self.sample(-self.speed, self.speed),
            self.sample(-self.speed, self.speed),
        );

        Particle::new(position, radius, velocity)
    }

    /// Uniform sample in `low..high`, or `low` when the range is empty.
    fn sample(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wrapping() {
        const POSITIONS: [(f64, f64); 5] = [
            (0.0, 0.0),
            (50.0, 50.0),
            (100.0, 100.0),
            (-0.1, 100.0),
            (100.1, 0.0),
        ];

        for (position, wrapped) in POSITIONS {
            assert_eq!(wrap(position, 100.0), wrapped);
        }
    }
}
