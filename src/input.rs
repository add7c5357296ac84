//! Terminal input handling and frame pacing for the game loop.

use crate::game::TickInput;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::io;
use std::time::{Duration, Instant};

/// Map one terminal event to game input.
///
/// Any key press or mouse button press is a jump, except Esc and Ctrl+C
/// which quit. Releases, repeats, movement and resizes are ignored.
pub fn map_event(event: &Event) -> TickInput {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(_),
            ..
        }) => TickInput::JUMP,
        _ => TickInput::NONE,
    }
}

fn map_key(key: &KeyEvent) -> TickInput {
    if key.kind != KeyEventKind::Press {
        return TickInput::NONE;
    }
    match key.code {
        KeyCode::Esc => TickInput::QUIT,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => TickInput::QUIT,
        _ => TickInput::JUMP,
    }
}

/// Fixed-rate tick scheduler.
///
/// Deadlines advance by a fixed step. When the loop falls more than one
/// step behind, the schedule restarts from now instead of bursting.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let step = Duration::from_secs(1) / fps.max(1);
        Self {
            step,
            next: Instant::now() + step,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Deadline of the current tick.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Move to the next tick, measured from `now`.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.step;
        if self.next + self.step < now {
            self.next = now + self.step;
        }
    }
}

/// Wait until `deadline`, folding every terminal event that arrives into a
/// single `TickInput`.
pub fn collect_until(deadline: Instant) -> io::Result<TickInput> {
    let mut input = TickInput::NONE;
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if !event::poll(timeout)? {
            return Ok(input);
        }
        input.merge(map_event(&event::read()?));
        if timeout.is_zero() {
            // Drain whatever is queued without waiting further
            while event::poll(Duration::ZERO)? {
                input.merge(map_event(&event::read()?));
            }
            return Ok(input);
        }
    }
}
