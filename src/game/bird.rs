//! The player-controlled bird.

use super::geometry::Rect;
use super::particles::ParticleTrail;
use crate::constants::{
    BIRD_FRAMES, BIRD_FRAME_TICKS, BIRD_HEIGHT, BIRD_START_X, BIRD_START_Y, BIRD_WIDTH, GRAVITY,
    JUMP_IMPULSE, PARTICLE_OFFSET_X,
};
use rand::Rng;

/// Bird state. `x` never changes; `y` is integrated from `velocity` each tick.
#[derive(Debug, Clone)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in world units per tick (positive = downward).
    pub velocity: f64,
    pub gravity: f64,
    pub jump_impulse: f64,
    /// Current animation frame, cycles through `0..BIRD_FRAMES`.
    pub frame_index: usize,
    frame_counter: u32,
    rect: Rect,
    pub trail: ParticleTrail,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new(BIRD_START_X, BIRD_START_Y)
    }
}

impl Bird {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            frame_index: 0,
            frame_counter: 0,
            rect: Rect::from_center(x, y, BIRD_WIDTH, BIRD_HEIGHT),
            trail: ParticleTrail::new(),
        }
    }

    /// Bounding rectangle, centred on the current position.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Override the vertical velocity with the jump impulse.
    pub fn jump(&mut self) {
        self.velocity = self.jump_impulse;
    }

    /// Advance animation, physics and the particle trail by one tick.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        self.frame_counter += 1;
        if self.frame_counter >= BIRD_FRAME_TICKS {
            self.frame_counter = 0;
            self.frame_index = (self.frame_index + 1) % BIRD_FRAMES;
        }

        self.velocity += self.gravity;
        self.y += self.velocity;
        self.rect = Rect::from_center(self.x, self.y, BIRD_WIDTH, BIRD_HEIGHT);

        self.trail.emit(self.x + PARTICLE_OFFSET_X, self.y, rng);
        self.trail.update();
    }
}
