//! Integration test: game loop mechanics
//!
//! Drives whole sessions tick by tick with a seeded random source and checks
//! physics, pipe lifecycle, scoring, collisions and the particle trail.

use flappy::constants::{
    GRAVITY, JUMP_IMPULSE, PARTICLE_COUNT, PIPE_GAP, PIPE_SPAWN_TICKS, PIPE_WIDTH, SCREEN_HEIGHT,
};
use flappy::game::{Pipe, Session, SessionState, TerminationCause, TickInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Simple autopilot: flap whenever the bird sinks below the next gap centre.
fn autopilot(session: &Session) -> TickInput {
    let bird = &session.bird;
    let target = session
        .pipes
        .iter()
        .find(|p| p.right() >= bird.rect().left())
        .map(|p| p.gap_y)
        .unwrap_or(SCREEN_HEIGHT / 2.0);
    if bird.y > target + 20.0 && bird.velocity > 0.0 {
        TickInput::JUMP
    } else {
        TickInput::NONE
    }
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_free_fall_matches_closed_form() {
    let mut rng = create_test_rng(1);
    let mut session = Session::new();
    let y0 = session.bird.y;

    for n in 1..=30u32 {
        session.tick(TickInput::NONE, &mut rng);
        let n = n as f64;
        let expected = y0 + GRAVITY * n * (n + 1.0) / 2.0;
        assert!(
            (session.bird.y - expected).abs() < 1e-6,
            "tick {}: y = {}, expected {}",
            n,
            session.bird.y,
            expected
        );
    }
}

#[test]
fn test_velocity_changes_by_gravity_or_resets_on_jump() {
    let mut rng = create_test_rng(2);
    let mut session = Session::new();

    for tick in 0..200u32 {
        if !session.is_running() {
            break;
        }
        let input = autopilot(&session);
        let before = session.bird.velocity;
        session.tick(input, &mut rng);
        let after = session.bird.velocity;
        let expected = if input.jump {
            JUMP_IMPULSE + GRAVITY
        } else {
            before + GRAVITY
        };
        assert!(
            (after - expected).abs() < 1e-9,
            "tick {}: velocity {} expected {}",
            tick,
            after,
            expected
        );
    }
}

#[test]
fn test_jump_then_collision_check_uses_reset_velocity() {
    let mut rng = create_test_rng(3);
    let mut session = Session::new();
    for _ in 0..20 {
        session.tick(TickInput::NONE, &mut rng);
    }
    let y_before = session.bird.y;

    // Top segment ends level with the bird's centre after the jump. Without
    // the jump the bird would have fallen clear of it.
    let after_jump = y_before + JUMP_IMPULSE + GRAVITY;
    session.pipes.push(Pipe::new(90.0, after_jump + PIPE_GAP / 2.0));

    let mut no_jump = session.clone();
    let outcome = no_jump.tick(TickInput::NONE, &mut rng.clone());
    assert_eq!(outcome.terminated, None);

    let outcome = session.tick(TickInput::JUMP, &mut rng);
    assert!((session.bird.y - after_jump).abs() < 1e-9);
    assert_eq!(outcome.terminated, Some(TerminationCause::PipeCollision));
}

// =============================================================================
// Pipes and scoring
// =============================================================================

#[test]
fn test_pipes_removed_only_after_leaving_screen() {
    let mut rng = create_test_rng(4);
    let mut session = Session::new();
    // Gap centred on the hovering bird so the pipe can never hit it
    session.pipes.push(Pipe::new(40.0, session.bird.y));

    let mut ticks = 0;
    while !session.pipes.is_empty() {
        session.bird.velocity = -GRAVITY;
        session.tick(TickInput::NONE, &mut rng);
        ticks += 1;
        for pipe in &session.pipes {
            assert!(pipe.x >= -PIPE_WIDTH);
        }
        assert!(ticks < 100);
    }
    assert!(session.is_running());
    // 40 -> below -52 takes 31 steps of 3
    assert_eq!(ticks, 31);
}

#[test]
fn test_each_pipe_scores_exactly_once() {
    let mut rng = create_test_rng(5);
    let mut session = Session::new();
    let mut scored_ticks = Vec::new();

    for tick in 0..3000u32 {
        if !session.is_running() {
            break;
        }
        let input = autopilot(&session);
        let outcome = session.tick(input, &mut rng);
        for _ in 0..outcome.scored {
            scored_ticks.push(tick);
        }
        for pipe in &session.pipes {
            assert_eq!(pipe.passed, pipe.right() < session.bird.x);
        }
    }

    assert_eq!(scored_ticks.len() as u32, session.score);
    let spawned = session.tick_count / PIPE_SPAWN_TICKS as u64;
    assert!(session.score as u64 <= spawned);
}

#[test]
fn test_collision_detected_iff_rects_overlap() {
    let mut rng = create_test_rng(6);
    for seed_gap in [120.0, 200.0, 300.0, 380.0] {
        let mut session = Session::new();
        session.pipes.push(Pipe::new(100.0, seed_gap));
        session.bird.velocity = -GRAVITY;
        let outcome = session.tick(TickInput::NONE, &mut rng);

        let rect = session.bird.rect();
        let overlaps = session
            .pipes
            .iter()
            .any(|p| rect.intersects(&p.top_rect()) || rect.intersects(&p.bottom_rect()));
        assert_eq!(
            outcome.terminated == Some(TerminationCause::PipeCollision),
            overlaps,
            "gap {}",
            seed_gap
        );
    }
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let run = |seed: u64| {
        let mut rng = create_test_rng(seed);
        let mut session = Session::new();
        for _ in 0..400 {
            if !session.is_running() {
                break;
            }
            let input = autopilot(&session);
            session.tick(input, &mut rng);
        }
        (
            session.score,
            session.tick_count,
            session.pipes.iter().map(|p| p.gap_y).collect::<Vec<_>>(),
        )
    };
    assert_eq!(run(77), run(77));
}

// =============================================================================
// Particles
// =============================================================================

#[test]
fn test_particle_population_capped() {
    let mut rng = create_test_rng(7);
    let mut session = Session::new();
    for _ in 0..500 {
        session.bird.velocity = -GRAVITY;
        session.pipes.clear();
        session.tick(TickInput::NONE, &mut rng);
        assert!(session.bird.trail.len() <= PARTICLE_COUNT);
    }
    assert!(session.is_running());
}

#[test]
fn test_particles_eventually_removed() {
    let mut rng = create_test_rng(8);
    let mut session = Session::new();
    for _ in 0..30 {
        session.bird.velocity = -GRAVITY;
        session.tick(TickInput::NONE, &mut rng);
    }
    assert!(!session.bird.trail.is_empty());

    // Without further emission the largest particle lasts 5.0 / 0.03 ticks
    for _ in 0..200 {
        session.bird.trail.update();
    }
    assert!(session.bird.trail.is_empty());
}

// =============================================================================
// State machine
// =============================================================================

#[test]
fn test_session_terminates_and_stays_terminated() {
    let mut rng = create_test_rng(9);
    let mut session = Session::new();
    while session.is_running() {
        session.tick(TickInput::NONE, &mut rng);
    }
    let state = session.state();
    assert_eq!(state, SessionState::Terminated(TerminationCause::OutOfBounds));

    let ticks = session.tick_count;
    session.tick(TickInput::JUMP, &mut rng);
    assert_eq!(session.tick_count, ticks);
    assert_eq!(session.state(), state);
}

#[test]
fn test_quit_ends_session_on_first_tick() {
    let mut rng = create_test_rng(10);
    let mut session = Session::new();
    let outcome = session.tick(TickInput::QUIT, &mut rng);
    assert_eq!(outcome.terminated, Some(TerminationCause::Quit));
    assert_eq!(session.termination_cause(), Some(TerminationCause::Quit));
}
