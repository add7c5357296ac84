//! Flappy - terminal side-scroller and program launcher.
//!
//! The game simulation, input mapping and rendering live here so both the
//! binaries and the integration tests can use them.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod launcher;
pub mod logging;
pub mod ui;

pub use error::{Error, Result};
pub use game::{Session, TickInput};
