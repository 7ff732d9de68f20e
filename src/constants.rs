//! Compiled defaults for every tunable.
//!
//! These are the authoritative defaults used by the `Default` impls in
//! [`crate::config`].  A TOML file can override any subset at runtime.

// ── Driver ────────────────────────────────────────────────────────────────────

/// Tick length of the terminal driver.
pub const FRAME_MS: u64 = 16; // ≈60 FPS

// ── Arena ─────────────────────────────────────────────────────────────────────

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;
/// Distance kept clear between the outermost unit and each side wall.
pub const ARENA_GUTTER: f32 = 10.0;

// ── Formation ─────────────────────────────────────────────────────────────────

pub const SWARM_ROWS: usize = 4;
pub const SWARM_COLUMNS: usize = 10;
pub const UNIT_WIDTH: f32 = 40.0;
pub const UNIT_HEIGHT: f32 = 40.0;
pub const UNIT_SPACING: f32 = 20.0;
/// Centre y of the top row at round start.
pub const SWARM_TOP_OFFSET: f32 = 50.0;

// ── Movement ──────────────────────────────────────────────────────────────────

pub const STRAFE_SPEED: f32 = 2.0;
pub const DESCENT_RATE: f32 = 0.1;

// ── Fire control ──────────────────────────────────────────────────────────────

pub const WEAPON_COOLDOWN_MS: u64 = 1000;
/// Per-tick chance that a lowest-row unit attempts to fire.
pub const FIRE_CHANCE: f64 = 1.0;

pub const MISSILE_WIDTH: f32 = 5.0;
pub const MISSILE_HEIGHT: f32 = 15.0;
pub const MISSILE_SPEED: f32 = 3.0;

// ── Destruction sparks ────────────────────────────────────────────────────────

pub const SPARK_COUNT_MIN: u32 = 20;
pub const SPARK_COUNT_MAX: u32 = 40;
pub const SPARK_LIFE_MIN: u32 = 20;
pub const SPARK_LIFE_MAX: u32 = 80;
pub const SPARK_SPEED: f32 = 3.0;
pub const SPARK_SIZE: f32 = 5.0;

// ── Results screen ────────────────────────────────────────────────────────────

/// Score a round starts from before elapsed seconds are subtracted.
pub const SCORE_TIME_BUDGET: f64 = 5000.0;
pub const SCORE_PER_SURVIVOR: f64 = 2000.0;
