// Viewport and timing
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;
pub const FPS: u32 = 60;

// Bird
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const BIRD_FRAMES: usize = 3;
pub const BIRD_FRAME_TICKS: u32 = 5; // ticks per animation frame
pub const BIRD_START_X: f64 = SCREEN_WIDTH / 4.0;
pub const BIRD_START_Y: f64 = SCREEN_HEIGHT / 2.0;
pub const GRAVITY: f64 = 0.4;
pub const JUMP_IMPULSE: f64 = -7.0;

// Pipes
pub const PIPE_WIDTH: f64 = 52.0;
pub const PIPE_HEIGHT: f64 = 320.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_SPAWN_TICKS: u32 = 90;
pub const GAP_CENTER_MIN: i32 = 100;
pub const GAP_CENTER_MAX: i32 = 400;

// Particle trail
pub const PARTICLE_COUNT: usize = 15;
pub const PARTICLE_MIN_SIZE: u32 = 2;
pub const PARTICLE_MAX_SIZE: u32 = 5;
pub const PARTICLE_SPEED: f64 = 1.0;
pub const PARTICLE_SHRINK: f64 = 0.03;
pub const PARTICLE_OFFSET_X: f64 = -10.0; // spawn behind the bird
