use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn subscription_releases_once_on_drop() {
    let released = Rc::new(Cell::new(0));
    let counter = Rc::clone(&released);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    assert_eq!(released.get(), 0);
    drop(sub);
    assert_eq!(released.get(), 1);
}

#[test]
fn explicit_release_does_not_run_again_on_drop() {
    let released = Rc::new(Cell::new(0));
    let counter = Rc::clone(&released);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    sub.release();
    assert_eq!(released.get(), 1);
}

#[test]
fn detached_subscription_is_inert() {
    let sub = Subscription::detached();
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
    sub.release();
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn media_query_scheme_reports_light_off_browser() {
    let scheme = MediaQueryScheme::new();
    assert!(!scheme.prefers_dark());
    let sub = scheme.subscribe(Box::new(|_| panic!("no events off-browser")));
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
}
