//! Per-tick game logic: one session from first frame to game over.

use super::bird::Bird;
use super::pipe::Pipe;
use crate::constants::{PIPE_SPAWN_TICKS, SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::Rng;
use std::fmt;

/// Input gathered for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// At least one jump trigger (key or mouse press) arrived.
    pub jump: bool,
    /// The player asked to leave.
    pub quit: bool,
}

impl TickInput {
    pub const NONE: Self = Self {
        jump: false,
        quit: false,
    };
    pub const JUMP: Self = Self {
        jump: true,
        quit: false,
    };
    pub const QUIT: Self = Self {
        jump: false,
        quit: true,
    };

    /// Fold another event's input into this one.
    pub fn merge(&mut self, other: TickInput) {
        self.jump |= other.jump;
        self.quit |= other.quit;
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationCause {
    Quit,
    PipeCollision,
    OutOfBounds,
}

impl fmt::Display for TerminationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Quit => "quit",
            Self::PipeCollision => "hit a pipe",
            Self::OutOfBounds => "left the screen",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated(TerminationCause),
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Pipes scored this tick.
    pub scored: u32,
    pub spawned_pipe: bool,
    pub removed_pipes: usize,
    /// Set on the tick that ended the session.
    pub terminated: Option<TerminationCause>,
}

/// All mutable game state for a single play-through.
#[derive(Debug, Clone)]
pub struct Session {
    pub bird: Bird,
    /// Active pipes, oldest first.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub spawn_timer: u32,
    pub tick_count: u64,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            bird: Bird::default(),
            pipes: Vec::new(),
            score: 0,
            spawn_timer: 0,
            tick_count: 0,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn termination_cause(&self) -> Option<TerminationCause> {
        match self.state {
            SessionState::Running => None,
            SessionState::Terminated(cause) => Some(cause),
        }
    }

    /// Advance the session by one tick.
    ///
    /// The whole tick runs even when a terminal condition shows up part way;
    /// the first cause seen (quit, collision, bounds) is the one recorded.
    /// Ticks on a terminated session do nothing.
    pub fn tick<R: Rng>(&mut self, input: TickInput, rng: &mut R) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.is_running() {
            return outcome;
        }

        let mut cause = None;
        if input.quit {
            cause = Some(TerminationCause::Quit);
        }
        if input.jump {
            self.bird.jump();
        }

        self.bird.update(rng);
        self.tick_count += 1;

        self.spawn_timer += 1;
        if self.spawn_timer >= PIPE_SPAWN_TICKS {
            self.spawn_timer = 0;
            self.pipes.push(Pipe::spawn(SCREEN_WIDTH, rng));
            outcome.spawned_pipe = true;
        }

        for pipe in &mut self.pipes {
            pipe.update();
        }

        let bird_rect = self.bird.rect();
        for pipe in &mut self.pipes {
            if pipe.collides(&bird_rect) {
                cause.get_or_insert(TerminationCause::PipeCollision);
            }
            if pipe.try_score(self.bird.x) {
                outcome.scored += 1;
            }
        }
        self.score += outcome.scored;

        let before = self.pipes.len();
        self.pipes.retain(|p| !p.is_off_screen());
        outcome.removed_pipes = before - self.pipes.len();

        if bird_rect.top() <= 0.0 || bird_rect.bottom() >= SCREEN_HEIGHT {
            cause.get_or_insert(TerminationCause::OutOfBounds);
        }

        if let Some(cause) = cause {
            log::info!(
                "session ended after {} ticks: {} (score {})",
                self.tick_count,
                cause,
                self.score
            );
            self.state = SessionState::Terminated(cause);
            outcome.terminated = Some(cause);
        }

        outcome
    }
}
