// Recording doubles shared across integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use swarm_shooter::audio::AudioSink;
use swarm_shooter::entities::{EnemyUnit, Projectile, SoundEffect};
use swarm_shooter::events::SwarmEvent;
use swarm_shooter::render::Surface;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// Audio sink that remembers every effect it was asked to play.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub played: Rc<RefCell<Vec<SoundEffect>>>,
}

impl RecordingAudio {
    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.borrow().iter().filter(|e| **e == effect).count()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.borrow_mut().push(effect);
    }
}

/// Surface that keeps a copy of everything drawn onto it.
#[derive(Default)]
pub struct RecordingSurface {
    pub units: Vec<EnemyUnit>,
    pub projectiles: Vec<Projectile>,
}

impl Surface for RecordingSurface {
    fn draw_unit(&mut self, unit: &EnemyUnit) {
        self.units.push(unit.clone());
    }

    fn draw_projectile(&mut self, projectile: &Projectile) {
        self.projectiles.push(projectile.clone());
    }
}

/// Shared event log fed by a subscribed listener.
pub type EventLog = Rc<RefCell<Vec<SwarmEvent>>>;

pub fn event_count(log: &EventLog, pred: impl Fn(&SwarmEvent) -> bool) -> usize {
    log.borrow().iter().filter(|e| pred(e)).count()
}
