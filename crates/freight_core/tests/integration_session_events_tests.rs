use std::sync::Arc;
use std::thread;

use freight_core::domain::UserRole;
use freight_core::session::{SessionEvent, SessionHub, SessionState};

fn signed_in(user_id: &str, role: UserRole) -> SessionEvent {
    SessionEvent::SignedIn(SessionState {
        user_id: user_id.to_string(),
        role,
    })
}

#[test]
fn every_subscriber_sees_every_event_in_order() {
    let hub = SessionHub::new();
    let (_a, rx_a) = hub.subscribe();
    let (_b, rx_b) = hub.subscribe();

    hub.publish(signed_in("u1", UserRole::Customer));
    hub.publish(SessionEvent::RoleChanged(UserRole::FleetOwner));
    hub.publish(SessionEvent::SignedOut);

    for rx in [rx_a, rx_b] {
        assert_eq!(rx.recv().expect("event"), signed_in("u1", UserRole::Customer));
        assert_eq!(
            rx.recv().expect("event"),
            SessionEvent::RoleChanged(UserRole::FleetOwner)
        );
        assert_eq!(rx.recv().expect("event"), SessionEvent::SignedOut);
    }
}

#[test]
fn hub_is_shareable_across_threads() {
    let hub = Arc::new(SessionHub::new());
    let (_id, rx) = hub.subscribe();

    let publisher = {
        let hub = Arc::clone(&hub);
        thread::spawn(move || {
            hub.publish(signed_in("u1", UserRole::Driver));
            hub.publish(SessionEvent::SignedOut);
        })
    };
    publisher.join().expect("publisher thread");

    assert_eq!(rx.recv().expect("event"), signed_in("u1", UserRole::Driver));
    assert_eq!(rx.recv().expect("event"), SessionEvent::SignedOut);
    assert_eq!(hub.current(), None);
}

#[test]
fn late_subscribers_only_see_later_events() {
    let hub = SessionHub::new();
    hub.publish(signed_in("u1", UserRole::Customer));

    let (_id, rx) = hub.subscribe();
    assert!(rx.try_recv().is_err(), "no replay of past events");
    // The cached state is still observable directly.
    assert_eq!(hub.current().map(|s| s.role), Some(UserRole::Customer));

    hub.publish(SessionEvent::SignedOut);
    assert_eq!(rx.recv().expect("event"), SessionEvent::SignedOut);
}
