use std::cell::RefCell;
use std::rc::Rc;

use swarm_shooter::entities::UnitId;
use swarm_shooter::events::{EventBus, SwarmEvent};

#[test]
fn every_listener_sees_every_event_in_order() {
    let seen: Rc<RefCell<Vec<(u8, SwarmEvent)>>> = Rc::new(RefCell::new(Vec::new()));
    let mut bus = EventBus::new();
    for tag in [1u8, 2u8] {
        let seen = Rc::clone(&seen);
        bus.subscribe(move |e| seen.borrow_mut().push((tag, e.clone())));
    }
    assert_eq!(bus.listener_count(), 2);

    bus.emit(SwarmEvent::UnitDestroyed { unit: UnitId(4) });
    bus.emit(SwarmEvent::Depleted);

    assert_eq!(
        *seen.borrow(),
        vec![
            (1, SwarmEvent::UnitDestroyed { unit: UnitId(4) }),
            (2, SwarmEvent::UnitDestroyed { unit: UnitId(4) }),
            (1, SwarmEvent::Depleted),
            (2, SwarmEvent::Depleted),
        ]
    );
}

#[test]
fn emit_without_listeners_is_fine() {
    let mut bus = EventBus::new();
    bus.emit(SwarmEvent::UnitReachedFloor { unit: UnitId(0) });
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn listeners_can_keep_state() {
    let mut count = 0;
    let total = Rc::new(RefCell::new(0));
    let out = Rc::clone(&total);
    let mut bus = EventBus::new();
    bus.subscribe(move |_| {
        count += 1;
        *out.borrow_mut() = count;
    });
    for _ in 0..3 {
        bus.emit(SwarmEvent::Depleted);
    }
    assert_eq!(*total.borrow(), 3);
}
