//! Fire-and-forget audio seam.
//!
//! Implementations must swallow their own failures: the swarm never learns
//! whether a sound actually played.

use std::io::Write;

use crate::entities::SoundEffect;

pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Rings the terminal bell for destruction effects.  Shots are too frequent
/// to ring for, so they stay silent.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, effect: SoundEffect) {
        if effect == SoundEffect::EnemyFired {
            return;
        }
        let mut err = std::io::stderr();
        if err.write_all(b"\x07").and_then(|_| err.flush()).is_err() {
            tracing::trace!(effect = effect.name(), "terminal bell unavailable");
        }
    }
}
