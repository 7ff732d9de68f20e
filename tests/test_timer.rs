use std::time::Duration;

use swarm_shooter::timer::TimerQueue;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── schedule / advance ────────────────────────────────────────────────────────

#[test]
fn task_is_not_due_before_its_delay() {
    let mut timers = TimerQueue::new();
    timers.schedule(ms(100), "reset");
    assert!(timers.advance(ms(99)).is_empty());
    assert_eq!(timers.pending(), 1);
}

#[test]
fn task_is_due_exactly_at_its_delay() {
    let mut timers = TimerQueue::new();
    timers.schedule(ms(100), "reset");
    timers.advance(ms(99));
    assert_eq!(timers.advance(ms(1)), vec!["reset"]);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn due_tasks_come_back_earliest_first() {
    let mut timers = TimerQueue::new();
    timers.schedule(ms(30), 3);
    timers.schedule(ms(10), 1);
    timers.schedule(ms(20), 2);
    assert_eq!(timers.advance(ms(50)), vec![1, 2, 3]);
}

#[test]
fn equal_due_times_keep_scheduling_order() {
    let mut timers = TimerQueue::new();
    for i in 0..5 {
        timers.schedule(ms(10), i);
    }
    assert_eq!(timers.advance(ms(10)), vec![0, 1, 2, 3, 4]);
}

#[test]
fn delay_is_relative_to_current_clock() {
    let mut timers = TimerQueue::new();
    timers.advance(ms(500));
    timers.schedule(ms(100), "late");
    assert_eq!(timers.now(), ms(500));
    assert!(timers.advance(ms(50)).is_empty());
    assert_eq!(timers.advance(ms(50)), vec!["late"]);
}

#[test]
fn task_fires_only_once() {
    let mut timers = TimerQueue::new();
    timers.schedule(ms(1), ());
    assert_eq!(timers.advance(ms(5)).len(), 1);
    assert!(timers.advance(ms(5)).is_empty());
}

// ── cancel / clear ────────────────────────────────────────────────────────────

#[test]
fn cancelled_task_never_fires() {
    let mut timers = TimerQueue::new();
    let keep = timers.schedule(ms(10), "keep");
    let drop = timers.schedule(ms(10), "drop");
    assert!(timers.cancel(drop));
    assert!(!timers.cancel(drop));
    assert_eq!(timers.pending(), 1);
    assert_eq!(timers.advance(ms(10)), vec!["keep"]);
    assert!(!timers.cancel(keep));
}

#[test]
fn clear_drops_everything_and_keeps_clock() {
    let mut timers = TimerQueue::new();
    timers.schedule(ms(10), 1);
    timers.schedule(ms(20), 2);
    timers.advance(ms(5));
    timers.clear();
    assert_eq!(timers.pending(), 0);
    assert_eq!(timers.now(), ms(5));
    assert!(timers.advance(ms(100)).is_empty());
}
