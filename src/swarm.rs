/// The enemy swarm: formation geometry, rigid strafing, descent, fire
/// control and round lifecycle.
///
/// All randomness comes through the injected `rng` so callers control
/// determinism (tests use a seeded `StdRng`).  Time only moves when the
/// driver calls [`Swarm::advance_clock`].
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::audio::AudioSink;
use crate::config::{ArenaConfig, GameConfig, SwarmConfig};
use crate::constants::SPARK_SIZE;
use crate::entities::{EnemyUnit, Projectile, SoundEffect, SwarmStatus, Tint, UnitId};
use crate::error::ConfigResult;
use crate::events::{EventBus, SwarmEvent};
use crate::input::InputState;
use crate::pool::ProjectilePool;
use crate::render::Surface;
use crate::timer::TimerQueue;

/// Deferred task that re-arms one unit's weapon.  Tagged with the round it
/// was scheduled in so a reset never lets it touch a fresh grid.
#[derive(Debug, Clone, Copy)]
struct CooldownReset {
    unit: UnitId,
    round: u64,
}

pub struct Swarm<R: Rng = StdRng> {
    arena: ArenaConfig,
    config: SwarmConfig,
    units: Vec<EnemyUnit>,
    missiles: ProjectilePool,
    sparks: ProjectilePool,
    cooldowns: TimerQueue<CooldownReset>,
    events: EventBus,
    audio: Box<dyn AudioSink>,
    rng: R,
    round: u64,
    status: SwarmStatus,
}

impl<R: Rng> Swarm<R> {
    /// Validate `config` and populate the first round's grid.
    pub fn new(config: &GameConfig, rng: R, audio: Box<dyn AudioSink>) -> ConfigResult<Self> {
        config.validate()?;
        let mut swarm = Self {
            arena: config.arena.clone(),
            config: config.swarm.clone(),
            units: Vec::new(),
            missiles: ProjectilePool::new(),
            sparks: ProjectilePool::new(),
            cooldowns: TimerQueue::new(),
            events: EventBus::new(),
            audio,
            rng,
            round: 0,
            status: SwarmStatus::Active,
        };
        swarm.new_round();
        Ok(swarm)
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    /// Throw away the current round and start over with a full grid.
    /// Projectiles are discarded.  Cooldowns still pending from an earlier
    /// round stay queued and are ignored when they come due.
    pub fn new_round(&mut self) {
        self.round += 1;
        self.missiles.clear();
        self.sparks.clear();
        self.units = self.build_grid();
        self.status = SwarmStatus::Active;
        info!(
            round = self.round,
            rows = self.config.rows,
            columns = self.config.columns,
            "swarm round started"
        );
    }

    /// Centre the formation horizontally, top row at `top_offset`.
    fn build_grid(&self) -> Vec<EnemyUnit> {
        let c = &self.config;
        let offset_left = (self.arena.width - c.grid_width()) / 2.0;
        let mut units = Vec::with_capacity(c.rows * c.columns);
        for row in 0..c.rows {
            for column in 0..c.columns {
                units.push(EnemyUnit {
                    id: UnitId(units.len()),
                    row,
                    column,
                    x: (c.unit_width + c.spacing) * column as f32 + offset_left + c.unit_width / 2.0,
                    y: (c.unit_height + c.spacing) * row as f32 + c.top_offset,
                    width: c.unit_width,
                    height: c.unit_height,
                    tint: c.unit_tint,
                    alive: true,
                    weapon_ready: true,
                });
            }
        }
        units
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SwarmEvent) + 'static) {
        self.events.subscribe(listener);
    }

    /// Mark a unit dead and run its destruction side effects.
    /// Returns `false` if the unit is unknown or already dead.
    pub fn destroy_unit(&mut self, id: UnitId) -> bool {
        let (x, y) = match self.units.get_mut(id.0) {
            Some(unit) if unit.alive => {
                unit.alive = false;
                (unit.x, unit.y)
            }
            _ => return false,
        };
        debug!(unit = id.0, x, y, "unit destroyed");
        self.audio.play(SoundEffect::EnemyDestroyed);
        self.burst_sparks(x, y);
        self.events.emit(SwarmEvent::UnitDestroyed { unit: id });
        true
    }

    fn burst_sparks(&mut self, x: f32, y: f32) {
        let c = &self.config;
        let count = self.rng.gen_range(c.spark_count_min..=c.spark_count_max);
        for _ in 0..count {
            let spark = Projectile {
                x,
                y,
                width: SPARK_SIZE,
                height: SPARK_SIZE,
                tint: Tint::Yellow,
                dx: self.rng.gen_range(-c.spark_speed..=c.spark_speed),
                dy: self.rng.gen_range(-c.spark_speed..=c.spark_speed),
                ttl: self.rng.gen_range(c.spark_life_min..=c.spark_life_max),
            };
            self.sparks.acquire(spark);
        }
    }

    // ── Time ─────────────────────────────────────────────────────────────────

    /// Move the swarm clock forward and re-arm every weapon whose cooldown
    /// has elapsed.  Safe to call any number of times between ticks.
    pub fn advance_clock(&mut self, dt: std::time::Duration) {
        for task in self.cooldowns.advance(dt) {
            if task.round != self.round {
                trace!(unit = task.unit.0, round = task.round, "ignoring stale cooldown");
                continue;
            }
            if let Some(unit) = self.units.get_mut(task.unit.0) {
                unit.weapon_ready = true;
                trace!(unit = task.unit.0, "weapon ready");
            }
        }
    }

    // ── Per-tick update ──────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn update(&mut self, input: InputState) {
        self.check_depleted();
        self.strafe(input);
        self.descend();
        self.check_floor();
        self.missiles.update();
        self.sparks.update();
        self.fire_control();
    }

    /// Only an `Active` swarm can deplete: once it has breached the floor,
    /// destroying the remaining units emits no `Depleted`.
    fn check_depleted(&mut self) {
        if self.status == SwarmStatus::Active && self.alive_count() == 0 {
            self.status = SwarmStatus::Depleted;
            info!(round = self.round, "all enemies destroyed");
            self.events.emit(SwarmEvent::Depleted);
        }
    }

    /// Left wins if both are held.  Dead units move too so the formation
    /// stays rigid.
    fn strafe(&mut self, input: InputState) {
        let half_width = self.config.unit_width / 2.0;
        let delta = if input.left {
            match self.leftmost() {
                Some(u) if u.x > self.arena.gutter + half_width => -self.config.strafe_speed,
                _ => return,
            }
        } else if input.right {
            match self.rightmost() {
                Some(u) if u.x < self.arena.width - self.arena.gutter - half_width => {
                    self.config.strafe_speed
                }
                _ => return,
            }
        } else {
            return;
        };

        for unit in &mut self.units {
            unit.x += delta;
        }
    }

    fn descend(&mut self) {
        let descent = self.config.descent_rate;
        for unit in &mut self.units {
            unit.y += descent;
        }
    }

    fn check_floor(&mut self) {
        if self.status != SwarmStatus::Active {
            return;
        }
        let floor = self.arena.height;
        let breach = self.alive().find(|u| u.bottom() >= floor).map(|u| u.id);
        if let Some(unit) = breach {
            self.status = SwarmStatus::BreachedFloor;
            info!(round = self.round, unit = unit.0, "swarm reached the floor");
            self.events.emit(SwarmEvent::UnitReachedFloor { unit });
        }
    }

    /// Every lowest-row unit draws its own trial each tick.  A shot needs a
    /// successful trial and a ready weapon.
    fn fire_control(&mut self) {
        for id in self.lowest() {
            let trial = self.rng.gen_bool(self.config.fire_chance);
            let unit = &mut self.units[id.0];
            if !trial || !unit.weapon_ready {
                continue;
            }
            unit.weapon_ready = false;

            let missile = Projectile {
                x: unit.x,
                y: unit.bottom(),
                width: self.config.missile.width,
                height: self.config.missile.height,
                tint: self.config.missile.tint,
                dx: 0.0,
                dy: self.config.missile.speed,
                ttl: self.arena.height.ceil() as u32,
            };
            debug!(unit = id.0, x = missile.x, y = missile.y, "unit fired");
            self.missiles.acquire(missile);
            self.audio.play(SoundEffect::EnemyFired);
            self.cooldowns.schedule(
                self.config.cooldown(),
                CooldownReset {
                    unit: id,
                    round: self.round,
                },
            );
            self.events.emit(SwarmEvent::UnitFired { unit: id });
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    /// Draw alive units, then missiles, then sparks.
    pub fn render(&self, surface: &mut impl Surface) {
        for unit in self.alive() {
            surface.draw_unit(unit);
        }
        self.missiles.render(surface);
        self.sparks.render(surface);
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn units(&self) -> &[EnemyUnit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&EnemyUnit> {
        self.units.get(id.0)
    }

    pub fn alive(&self) -> impl Iterator<Item = &EnemyUnit> {
        self.units.iter().filter(|u| u.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Alive unit with the smallest x; ties go to the earliest in the grid.
    pub fn leftmost(&self) -> Option<&EnemyUnit> {
        self.alive().min_by(|a, b| a.x.total_cmp(&b.x))
    }

    /// Alive unit with the largest x; ties go to the latest in the grid.
    pub fn rightmost(&self) -> Option<&EnemyUnit> {
        self.alive().max_by(|a, b| a.x.total_cmp(&b.x))
    }

    /// Fire candidates: every alive unit sharing the maximum y.
    pub fn lowest(&self) -> Vec<UnitId> {
        let Some(max_y) = self.alive().map(|u| u.y).max_by(f32::total_cmp) else {
            return Vec::new();
        };
        self.alive().filter(|u| u.y == max_y).map(|u| u.id).collect()
    }

    pub fn missiles(&self) -> &ProjectilePool {
        &self.missiles
    }

    pub fn sparks(&self) -> &ProjectilePool {
        &self.sparks
    }

    pub fn status(&self) -> SwarmStatus {
        self.status
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn now(&self) -> std::time::Duration {
        self.cooldowns.now()
    }

    /// Weapon cooldowns still waiting to fire, stale ones included.
    pub fn pending_cooldowns(&self) -> usize {
        self.cooldowns.pending()
    }

    pub fn arena(&self) -> &ArenaConfig {
        &self.arena
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }
}
