/// All simulation entity types — pure data, no logic.
use serde::Deserialize;

/// Display colour of a unit or projectile.  Renderers map this onto their
/// own palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Blue,
    Yellow,
    Green,
    Red,
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Named effects the swarm asks the audio collaborator to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEffect {
    EnemyFired,
    EnemyDestroyed,
}

impl SoundEffect {
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::EnemyFired => "enemyFired",
            SoundEffect::EnemyDestroyed => "enemyDestroyed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwarmStatus {
    /// At least one unit is alive and none has reached the floor.
    Active,
    /// Every unit has been destroyed.
    Depleted,
    /// An alive unit crossed the arena's lower bound.
    BreachedFloor,
}

// ── Enemy units ───────────────────────────────────────────────────────────────

/// Stable handle to a unit: its index in the swarm's backing collection.
/// Valid for the lifetime of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyUnit {
    pub id: UnitId,
    pub row: usize,
    pub column: usize,
    /// Centre x.
    pub x: f32,
    /// Centre y.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub tint: Tint,
    /// One-way: once false it stays false until the next round.
    pub alive: bool,
    pub weapon_ready: bool,
}

impl EnemyUnit {
    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A pooled, centre-anchored moving rectangle.  Used for both enemy missiles
/// and destruction sparks.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub tint: Tint,
    /// Horizontal velocity added each tick.
    pub dx: f32,
    /// Vertical velocity added each tick (positive = downward).
    pub dy: f32,
    /// Ticks remaining before the pool reaps this projectile.
    pub ttl: u32,
}
