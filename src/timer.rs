//! One-shot deferred tasks on a game clock.
//!
//! [`TimerQueue`] does not call closures itself.  Each scheduled entry is a
//! plain payload which [`TimerQueue::advance`] hands back once its due time
//! has passed, so the owner can apply it against its own state without the
//! task holding a borrow of that state.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Handle returned by [`TimerQueue::schedule`], usable with [`TimerQueue::cancel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Entry<T> {
    due: Duration,
    id: TimerId,
    task: T,
}

// Min-heap on (due, id): earliest first, ties in scheduling order.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.id.0.cmp(&self.id.0))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl<T> Eq for Entry<T> {}

pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    pending: BinaryHeap<Entry<T>>,
    cancelled: HashSet<TimerId>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks that are scheduled and not cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len() - self.cancelled.len()
    }

    /// Schedule `task` to become due `delay` after the current clock.  Never blocks.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            due: self.now + delay,
            id,
            task,
        });
        id
    }

    /// Returns `true` if the task was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if self.cancelled.contains(&id) || !self.pending.iter().any(|e| e.id == id) {
            return false;
        }
        self.cancelled.insert(id);
        true
    }

    /// Drop every pending task.  The clock keeps running.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.cancelled.clear();
    }

    /// Move the clock forward by `dt` and return every task now due, earliest first.
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        self.now += dt;
        let mut due = Vec::new();
        while self.pending.peek().is_some_and(|e| e.due <= self.now) {
            if let Some(entry) = self.pending.pop() {
                if !self.cancelled.remove(&entry.id) {
                    due.push(entry.task);
                }
            }
        }
        due
    }
}
