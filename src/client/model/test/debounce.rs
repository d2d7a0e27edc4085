use crate::client::model::debounce::Debouncer;

/// Tests that only the latest scheduled value fires.
///
/// Expected: older tickets redeem nothing, the newest yields its value once
#[test]
fn only_latest_ticket_fires() {
    let mut debouncer = Debouncer::new();
    let first = debouncer.schedule("a");
    let second = debouncer.schedule("ab");
    let third = debouncer.schedule("abc");

    assert_eq!(debouncer.take(first), None);
    assert_eq!(debouncer.take(second), None);
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.take(third), Some("abc"));
    assert_eq!(debouncer.take(third), None);
}

/// Tests cancelling the pending call.
///
/// Expected: nothing fires
#[test]
fn cancel_drops_pending_value() {
    let mut debouncer = Debouncer::new();
    let ticket = debouncer.schedule(1);

    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.take(ticket), None);
}
