/// Directional input: the polling seam and a crossterm key-hold tracker.
///
/// The swarm never sees key events.  Each tick the driver takes an
/// [`InputState`] snapshot from any [`InputSource`] and hands it over.
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind};

use crate::entities::Direction;

pub trait InputSource {
    fn is_held(&self, direction: Direction) -> bool;
}

/// Snapshot of the directional keys for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub const NONE: InputState = InputState {
        left: false,
        right: false,
    };
    pub const LEFT: InputState = InputState {
        left: true,
        right: false,
    };
    pub const RIGHT: InputState = InputState {
        left: false,
        right: true,
    };

    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            left: source.is_held(Direction::Left),
            right: source.is_held(Direction::Right),
        }
    }
}

impl InputSource for InputState {
    fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

// ── Key-hold tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz (≈67 ms apart), so a window of 8
/// frames (≈128 ms at the driver's 16 ms tick) is always refreshed before
/// expiry.
pub const HOLD_WINDOW: u64 = 8;

/// Records the frame each key was last seen pressed or repeating.
///
/// Keyboard-enhancement terminals (kitty protocol) deliver `Release` and the
/// key is dropped immediately.  Classic terminals only deliver repeated
/// `Press` events and keys expire after [`HOLD_WINDOW`] frames of silence.
#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
    frame: u64,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame.  Call once per tick before recording events.
    pub fn next_frame(&mut self) {
        self.frame += 1;
    }

    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }

    fn key_held(&self, code: &KeyCode) -> bool {
        self.last_seen
            .get(code)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

impl InputSource for KeyTracker {
    fn is_held(&self, direction: Direction) -> bool {
        let keys: [KeyCode; 3] = match direction {
            Direction::Left => [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            Direction::Right => [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
        };
        keys.iter().any(|k| self.key_held(k))
    }
}
