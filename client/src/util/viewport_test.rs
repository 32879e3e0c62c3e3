#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_width_is_unknown_outside_browser() {
    assert_eq!(current_width(), None);
}

#[test]
fn attach_outside_browser_returns_none() {
    assert!(ResizeSubscription::attach(|_width| {}).is_none());
}

#[test]
fn release_is_idempotent() {
    let mut subscription = ResizeSubscription { attached: true };
    subscription.release();
    assert!(!subscription.is_attached());
    subscription.release();
    assert!(!subscription.is_attached());
}
