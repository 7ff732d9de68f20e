//! Runtime configuration loaded from an optional TOML file.
//!
//! Every struct here defaults to the matching constant in
//! [`crate::constants`].  Fields are `#[serde(default)]`, so a minimal TOML
//! can override just the values you care about:
//!
//! ```toml
//! [arena]
//! width = 1024.0
//!
//! [swarm]
//! rows = 5
//! fire_chance = 0.25
//! ```
//!
//! A config is only usable once [`GameConfig::validate`] has accepted it.
//! [`crate::swarm::Swarm::new`] does this itself.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::entities::Tint;
use crate::error::{ConfigError, ConfigResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub gutter: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            gutter: ARENA_GUTTER,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        positive("arena.width", self.width)?;
        positive("arena.height", self.height)?;
        non_negative("arena.gutter", self.gutter)?;
        if self.gutter * 2.0 >= self.width {
            return Err(ConfigError::OutOfRange {
                name: "arena.gutter",
                value: self.gutter as f64,
                expected: "[0, width / 2)",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MissileConfig {
    pub width: f32,
    pub height: f32,
    /// Downward speed per tick.
    pub speed: f32,
    pub tint: Tint,
}

impl Default for MissileConfig {
    fn default() -> Self {
        Self {
            width: MISSILE_WIDTH,
            height: MISSILE_HEIGHT,
            speed: MISSILE_SPEED,
            tint: Tint::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    // ── Formation ────────────────────────────────────────────────────────────
    pub rows: usize,
    pub columns: usize,
    pub unit_width: f32,
    pub unit_height: f32,
    pub spacing: f32,
    pub top_offset: f32,
    pub unit_tint: Tint,

    // ── Movement ─────────────────────────────────────────────────────────────
    pub strafe_speed: f32,
    pub descent_rate: f32,

    // ── Fire control ─────────────────────────────────────────────────────────
    pub cooldown_ms: u64,
    /// Probability in `[0, 1]` of a fire attempt per candidate per tick.
    pub fire_chance: f64,
    pub missile: MissileConfig,

    // ── Destruction sparks ───────────────────────────────────────────────────
    pub spark_count_min: u32,
    pub spark_count_max: u32,
    pub spark_life_min: u32,
    pub spark_life_max: u32,
    pub spark_speed: f32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            rows: SWARM_ROWS,
            columns: SWARM_COLUMNS,
            unit_width: UNIT_WIDTH,
            unit_height: UNIT_HEIGHT,
            spacing: UNIT_SPACING,
            top_offset: SWARM_TOP_OFFSET,
            unit_tint: Tint::Blue,
            strafe_speed: STRAFE_SPEED,
            descent_rate: DESCENT_RATE,
            cooldown_ms: WEAPON_COOLDOWN_MS,
            fire_chance: FIRE_CHANCE,
            missile: MissileConfig::default(),
            spark_count_min: SPARK_COUNT_MIN,
            spark_count_max: SPARK_COUNT_MAX,
            spark_life_min: SPARK_LIFE_MIN,
            spark_life_max: SPARK_LIFE_MAX,
            spark_speed: SPARK_SPEED,
        }
    }
}

impl SwarmConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Total horizontal extent of the formation, outer edge to outer edge.
    pub fn grid_width(&self) -> f32 {
        let columns = self.columns as f32;
        columns * self.unit_width + (columns - 1.0).max(0.0) * self.spacing
    }

    /// Bottom edge of the lowest row at round start.
    pub fn grid_bottom(&self) -> f32 {
        let rows = self.rows as f32;
        self.top_offset
            + (rows - 1.0).max(0.0) * (self.unit_height + self.spacing)
            + self.unit_height / 2.0
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroDimension { name: "swarm.rows" });
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroDimension {
                name: "swarm.columns",
            });
        }
        positive("swarm.unit_width", self.unit_width)?;
        positive("swarm.unit_height", self.unit_height)?;
        non_negative("swarm.spacing", self.spacing)?;
        non_negative("swarm.top_offset", self.top_offset)?;
        non_negative("swarm.strafe_speed", self.strafe_speed)?;
        non_negative("swarm.descent_rate", self.descent_rate)?;
        if !(0.0..=1.0).contains(&self.fire_chance) {
            return Err(ConfigError::OutOfRange {
                name: "swarm.fire_chance",
                value: self.fire_chance,
                expected: "[0, 1]",
            });
        }
        positive("swarm.missile.width", self.missile.width)?;
        positive("swarm.missile.height", self.missile.height)?;
        non_negative("swarm.missile.speed", self.missile.speed)?;
        if self.spark_count_min > self.spark_count_max {
            return Err(ConfigError::OutOfRange {
                name: "swarm.spark_count_min",
                value: self.spark_count_min as f64,
                expected: "<= spark_count_max",
            });
        }
        if self.spark_life_min > self.spark_life_max {
            return Err(ConfigError::OutOfRange {
                name: "swarm.spark_life_min",
                value: self.spark_life_min as f64,
                expected: "<= spark_life_max",
            });
        }
        non_negative("swarm.spark_speed", self.spark_speed)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub swarm: SwarmConfig,
}

impl GameConfig {
    /// Parse a config from TOML text.  `origin` is only used in error messages.
    pub fn from_toml(text: &str, origin: &str) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file.  Missing keys keep their defaults.
    /// The result is not validated.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&text, &shown)?;
        tracing::info!(path = %shown, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.arena.validate()?;
        self.swarm.validate()?;

        let room = self.arena.width - 2.0 * self.arena.gutter;
        let grid_width = self.swarm.grid_width();
        if grid_width > room {
            return Err(ConfigError::GridTooWide {
                grid_width,
                arena_width: room,
            });
        }

        let grid_bottom = self.swarm.grid_bottom();
        if grid_bottom >= self.arena.height {
            return Err(ConfigError::GridTooTall {
                grid_bottom,
                arena_height: self.arena.height,
            });
        }
        Ok(())
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn positive(name: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ZeroDimension { name })
    }
}

fn non_negative(name: &'static str, value: f32) -> ConfigResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value: value as f64,
            expected: "[0, ∞)",
        })
    }
}
