//! Command-line configuration for the game and the launcher.
//!
//! Physics is fixed; only runtime concerns (frame rate, seed, logging,
//! launcher search options) can be changed.

use crate::constants::FPS;
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// What a binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T> {
    Run(T),
    Help,
    Version,
}

/// Settings for the game binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Ticks per second.
    pub fps: u32,
    /// Seed for pipe and particle randomness; entropy when `None`.
    pub seed: Option<u64>,
    /// Append log records here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Parse `args` (including the program name at index 0).
    pub fn parse(args: &[String]) -> Result<Command<Self>> {
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    config.seed = Some(parse_value(args, i)?);
                    i += 1;
                }
                "--fps" => {
                    let fps: u32 = parse_value(args, i)?;
                    if fps == 0 {
                        return Err(invalid(&args[i], "0"));
                    }
                    config.fps = fps;
                    i += 1;
                }
                "--log-file" => {
                    config.log_file = Some(PathBuf::from(value_of(args, i)?));
                    i += 1;
                }
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-v" => return Ok(Command::Version),
                other => return Err(Error::UnknownArgument(other.to_string())),
            }
            i += 1;
        }

        Ok(Command::Run(config))
    }

    pub const USAGE: &'static str = "\
Flappy - terminal side-scroller

Usage: flappy [OPTIONS]

Options:
  --seed N          Seed the random source (reproducible pipes)
  --fps N           Ticks per second (default 60)
  --log-file PATH   Append log output to PATH
  -v, --version     Show version information
  -h, --help        Show this help message

Controls: any key or mouse click flaps, Esc or Ctrl+C quits.";
}

/// Settings for the launcher binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Directory to search; the launcher's own directory when `None`.
    pub dir: Option<PathBuf>,
    /// Only list files with this extension (without the dot).
    pub extension: Option<String>,
    /// Run candidates through this program, e.g. `python3`.
    pub interpreter: Option<String>,
}

impl LauncherConfig {
    pub fn parse(args: &[String]) -> Result<Command<Self>> {
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--dir" => {
                    config.dir = Some(PathBuf::from(value_of(args, i)?));
                    i += 1;
                }
                "--ext" => {
                    let ext = value_of(args, i)?.trim_start_matches('.');
                    if ext.is_empty() {
                        return Err(invalid(&args[i], ""));
                    }
                    config.extension = Some(ext.to_string());
                    i += 1;
                }
                "--interpreter" => {
                    config.interpreter = Some(value_of(args, i)?.to_string());
                    i += 1;
                }
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-v" => return Ok(Command::Version),
                other => return Err(Error::UnknownArgument(other.to_string())),
            }
            i += 1;
        }

        Ok(Command::Run(config))
    }

    pub const USAGE: &'static str = "\
Launcher - pick a program from a directory and run it

Usage: launcher [OPTIONS]

Options:
  --dir PATH            Directory to list (default: the launcher's own directory)
  --ext EXT             Only list files ending in .EXT
  --interpreter PROG    Run the chosen file with PROG
  -v, --version         Show version information
  -h, --help            Show this help message";
}

fn value_of(args: &[String], flag_index: usize) -> Result<&str> {
    args.get(flag_index + 1)
        .map(String::as_str)
        .ok_or_else(|| invalid(&args[flag_index], ""))
}

fn parse_value<T: FromStr>(args: &[String], flag_index: usize) -> Result<T> {
    let raw = value_of(args, flag_index)?;
    raw.parse().map_err(|_| invalid(&args[flag_index], raw))
}

fn invalid(flag: &str, value: &str) -> Error {
    Error::InvalidArgument {
        flag: flag.to_string(),
        value: value.to_string(),
    }
}
