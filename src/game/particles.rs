//! Cosmetic particle trail emitted behind the bird.

use crate::constants::{
    PARTICLE_COUNT, PARTICLE_MAX_SIZE, PARTICLE_MIN_SIZE, PARTICLE_SHRINK, PARTICLE_SPEED,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use rand::Rng;

/// A single trail point. Drifts by its velocity and shrinks every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
}

impl Particle {
    /// Random leftward-drifting particle at `(x, y)`.
    pub fn random<R: Rng>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vx: rng.gen_range(-1.0..-0.5) * PARTICLE_SPEED,
            vy: rng.gen_range(-0.5..0.5) * PARTICLE_SPEED,
            size: rng.gen_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE) as f64,
        }
    }

    fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.size -= PARTICLE_SHRINK;
    }

    /// True while the particle is visible and inside the viewport.
    pub fn is_alive(&self) -> bool {
        self.size > 0.0
            && (0.0..=SCREEN_WIDTH).contains(&self.x)
            && (0.0..=SCREEN_HEIGHT).contains(&self.y)
    }
}

/// Bounded collection of particles, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ParticleTrail {
    particles: Vec<Particle>,
}

impl ParticleTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one particle at `(x, y)` unless the trail is already full.
    /// Returns whether a particle was added.
    pub fn emit<R: Rng>(&mut self, x: f64, y: f64, rng: &mut R) -> bool {
        if self.particles.len() >= PARTICLE_COUNT {
            return false;
        }
        self.particles.push(Particle::random(x, y, rng));
        true
    }

    /// Move and shrink every particle, dropping dead ones.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.advance();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_random_particle_ranges() {
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let p = Particle::random(90.0, 300.0, &mut rng);
            assert!(p.vx >= -1.0 && p.vx < -0.5, "vx out of range: {}", p.vx);
            assert!(p.vy >= -0.5 && p.vy < 0.5, "vy out of range: {}", p.vy);
            assert!((2.0..=5.0).contains(&p.size));
            assert_eq!(p.size.fract(), 0.0);
        }
    }

    #[test]
    fn test_emit_respects_cap() {
        let mut rng = create_test_rng();
        let mut trail = ParticleTrail::new();
        for _ in 0..PARTICLE_COUNT {
            assert!(trail.emit(200.0, 300.0, &mut rng));
        }
        assert!(!trail.emit(200.0, 300.0, &mut rng));
        assert_eq!(trail.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_update_moves_and_shrinks() {
        let mut rng = create_test_rng();
        let mut trail = ParticleTrail::new();
        trail.emit(200.0, 300.0, &mut rng);
        let before = trail.iter().next().cloned().unwrap();

        trail.update();

        let after = trail.iter().next().unwrap();
        assert!((after.x - (before.x + before.vx)).abs() < 1e-9);
        assert!((after.y - (before.y + before.vy)).abs() < 1e-9);
        assert!((after.size - (before.size - PARTICLE_SHRINK)).abs() < 1e-9);
    }

    #[test]
    fn test_particle_removed_when_size_reaches_zero() {
        let mut trail = ParticleTrail::new();
        trail.particles.push(Particle {
            x: 200.0,
            y: 300.0,
            vx: 0.0,
            vy: 0.0,
            size: PARTICLE_SHRINK,
        });
        trail.update();
        assert!(trail.is_empty());
    }

    #[test]
    fn test_particle_removed_when_leaving_viewport() {
        let mut trail = ParticleTrail::new();
        trail.particles.push(Particle {
            x: 0.5,
            y: 300.0,
            vx: -1.0,
            vy: 0.0,
            size: 4.0,
        });
        trail.particles.push(Particle {
            x: 200.0,
            y: SCREEN_HEIGHT - 0.1,
            vx: -0.5,
            vy: 0.4,
            size: 4.0,
        });
        trail.update();
        assert!(trail.is_empty());
    }

    #[test]
    fn test_trail_drains_without_emission() {
        let mut rng = create_test_rng();
        let mut trail = ParticleTrail::new();
        for _ in 0..PARTICLE_COUNT {
            trail.emit(200.0, 300.0, &mut rng);
        }
        // Largest size is 5.0, so 5.0 / 0.03 ticks is an upper bound on lifetime
        let max_lifetime = (PARTICLE_MAX_SIZE as f64 / PARTICLE_SHRINK).ceil() as usize + 1;
        for _ in 0..max_lifetime {
            trail.update();
        }
        assert!(trail.is_empty());
    }
}
