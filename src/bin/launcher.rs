//! Program launcher CLI.
//!
//! Lists the programs next to this binary and runs the one you pick.
//!
//! Usage:
//!   cargo run --bin launcher
//!   cargo run --bin launcher -- --dir scripts --ext py --interpreter python3

use flappy::build_info::version_line;
use flappy::config::{Command, LauncherConfig};
use flappy::launcher::{self, LaunchOutcome};
use flappy::logging;
use std::env;
use std::io;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match LauncherConfig::parse(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", LauncherConfig::USAGE);
            return;
        }
        Ok(Command::Version) => {
            println!("{}", version_line("launcher"));
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'launcher --help' for usage.");
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = logging::init(None) {
        eprintln!("{}", e);
    }

    let current_exe = env::current_exe().ok();
    let self_name = current_exe
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_os_string());
    let dir = match (&config.dir, &current_exe) {
        (Some(dir), _) => dir.clone(),
        (None, Some(exe)) => exe
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
        (None, None) => PathBuf::from("."),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match launcher::run(&config, &dir, self_name.as_deref(), &mut input, &mut out) {
        Ok(LaunchOutcome::Ran(path)) => log::info!("{} completed", path.display()),
        Ok(outcome) => log::debug!("launcher finished: {:?}", outcome),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
