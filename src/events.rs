//! Outcome signals raised by the swarm and the bus that delivers them.

use crate::entities::UnitId;

/// A discrete state change inside the swarm.
#[derive(Debug, Clone, PartialEq)]
pub enum SwarmEvent {
    /// The last alive unit is gone.
    Depleted,
    /// An alive unit's bottom edge reached the arena floor.
    UnitReachedFloor { unit: UnitId },
    UnitFired { unit: UnitId },
    UnitDestroyed { unit: UnitId },
}

type Listener = Box<dyn FnMut(&SwarmEvent)>;

/// Synchronous observer list.  Every listener sees every event, in
/// subscription order, before `emit` returns.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Listener>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SwarmEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: SwarmEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
