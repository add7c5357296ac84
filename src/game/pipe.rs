//! Scrolling pipe pairs.

use super::geometry::Rect;
use crate::constants::{
    GAP_CENTER_MAX, GAP_CENTER_MIN, PIPE_GAP, PIPE_HEIGHT, PIPE_SPEED, PIPE_WIDTH,
};
use rand::Rng;

/// A top + bottom pipe pair with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge in world units. Decreases every tick.
    pub x: f64,
    /// Vertical centre of the gap.
    pub gap_y: f64,
    /// Whether the bird has already scored this pipe.
    pub passed: bool,
    pub speed: f64,
}

impl Pipe {
    /// Pipe at `x` with the given gap centre.
    pub fn new(x: f64, gap_y: f64) -> Self {
        Self {
            x,
            gap_y,
            passed: false,
            speed: PIPE_SPEED,
        }
    }

    /// Pipe at `x` with a uniformly random gap centre.
    pub fn spawn<R: Rng>(x: f64, rng: &mut R) -> Self {
        let gap_y = rng.gen_range(GAP_CENTER_MIN..=GAP_CENTER_MAX) as f64;
        Self::new(x, gap_y)
    }

    /// Upper segment, ending half a gap above the gap centre.
    pub fn top_rect(&self) -> Rect {
        let bottom = self.gap_y - PIPE_GAP / 2.0;
        Rect::new(self.x, bottom - PIPE_HEIGHT, PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Lower segment, starting half a gap below the gap centre.
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_y + PIPE_GAP / 2.0, PIPE_WIDTH, PIPE_HEIGHT)
    }

    pub fn right(&self) -> f64 {
        self.x + PIPE_WIDTH
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    pub fn collides(&self, rect: &Rect) -> bool {
        rect.intersects(&self.top_rect()) || rect.intersects(&self.bottom_rect())
    }

    /// The pipe's right edge is strictly left of `bird_x`.
    pub fn is_passed_by(&self, bird_x: f64) -> bool {
        self.right() < bird_x
    }

    /// Mark the pipe as passed if it newly qualifies. Returns true exactly once.
    pub fn try_score(&mut self, bird_x: f64) -> bool {
        if !self.passed && self.is_passed_by(bird_x) {
            self.passed = true;
            return true;
        }
        false
    }

    pub fn is_off_screen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }
}
