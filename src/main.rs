use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use flappy::build_info::version_line;
use flappy::config::{Command, GameConfig};
use flappy::game::Session;
use flappy::input::{collect_until, FrameClock};
use flappy::ui::render_game;
use flappy::{logging, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Raw mode + alternate screen for as long as the guard lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Guard exists from here on so a failure below still restores raw mode
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config = match GameConfig::parse(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", GameConfig::USAGE);
            return;
        }
        Ok(Command::Version) => {
            println!("{}", version_line("flappy"));
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }

    // Leave the alternate screen before the panic message is printed
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("starting session at {} fps (seed {:?})", config.fps, config.seed);

    match panic::catch_unwind(AssertUnwindSafe(|| run_game(&config, &mut rng))) {
        Ok(Ok(session)) => {
            let cause = session
                .termination_cause()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "stopped".to_string());
            println!("Game over: {}. Score: {}", cause, session.score);
        }
        Ok(Err(e)) => {
            log::error!("game loop failed: {}", e);
            eprintln!("An error occurred: {}", e);
        }
        Err(_) => {
            log::error!("game loop panicked");
            eprintln!("An error occurred: the game loop panicked");
        }
    }
}

/// Run one session until it terminates. Input, physics, render each tick.
fn run_game<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Session> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut session = Session::new();
    let mut clock = FrameClock::new(config.fps);

    while session.is_running() {
        let input = collect_until(clock.deadline())?;
        clock.advance(Instant::now());

        let outcome = session.tick(input, rng);
        if outcome.scored > 0 {
            log::debug!("score {} at tick {}", session.score, session.tick_count);
        }

        terminal.draw(|frame| {
            let area = frame.size();
            render_game(frame, area, &session);
        })?;
    }

    Ok(session)
}
