//! Flappy game simulation.
//!
//! A bird falls under gravity and flaps upward on input while pipe pairs
//! scroll in from the right. Passing a pipe scores a point; touching a pipe
//! or leaving the screen ends the session. Nothing here touches the terminal,
//! and all randomness comes from the caller's `Rng`.

pub mod bird;
pub mod geometry;
pub mod particles;
pub mod pipe;
pub mod session;

pub use bird::Bird;
pub use geometry::Rect;
pub use particles::{Particle, ParticleTrail};
pub use pipe::Pipe;
pub use session::{Session, SessionState, TerminationCause, TickInput, TickOutcome};
