use futures::{FutureExt, StreamExt};

use super::*;

fn user(uid: &str) -> User {
    User { uid: uid.to_owned(), display_name: None, email: None, created_at_ms: None }
}

/// Next queued change without waiting; `None` when nothing is queued.
fn poll_next(rx: &mut SessionSubscription) -> Option<SessionChange> {
    rx.next().now_or_never().flatten()
}

#[test]
fn fresh_feed_has_no_state_and_replays_nothing() {
    let feed = SessionFeed::new();
    let mut rx = feed.subscribe();
    assert_eq!(poll_next(&mut rx), None);
}

#[test]
fn changes_arrive_in_publication_order() {
    let feed = SessionFeed::new();
    let mut rx = feed.subscribe();
    feed.publish(None);
    feed.publish(Some(user("a")));
    feed.publish(None);
    assert_eq!(poll_next(&mut rx), Some(None));
    assert_eq!(poll_next(&mut rx), Some(Some(user("a"))));
    assert_eq!(poll_next(&mut rx), Some(None));
    assert_eq!(poll_next(&mut rx), None);
}

#[test]
fn late_subscriber_receives_latest_state_first() {
    let feed = SessionFeed::new();
    feed.publish(Some(user("a")));
    feed.publish(Some(user("b")));
    let mut rx = feed.subscribe();
    assert_eq!(poll_next(&mut rx), Some(Some(user("b"))));
    assert_eq!(poll_next(&mut rx), None);
}

#[test]
fn every_subscriber_sees_each_change() {
    let feed = SessionFeed::new();
    let mut first = feed.subscribe();
    let mut second = feed.subscribe();
    feed.publish(Some(user("a")));
    assert_eq!(poll_next(&mut first), Some(Some(user("a"))));
    assert_eq!(poll_next(&mut second), Some(Some(user("a"))));
}

#[test]
fn dropped_subscribers_are_pruned_on_publish() {
    let feed = SessionFeed::new();
    let kept = feed.subscribe();
    let dropped = feed.subscribe();
    assert_eq!(feed.subscriber_count(), 2);
    drop(dropped);
    feed.publish(None);
    assert_eq!(feed.subscriber_count(), 1);
    drop(kept);
}

#[test]
fn clones_share_one_feed() {
    let feed = SessionFeed::new();
    let mut rx = feed.subscribe();
    feed.clone().publish(None);
    assert_eq!(poll_next(&mut rx), Some(None));
    let mut late = feed.subscribe();
    assert_eq!(poll_next(&mut late), Some(None));
}
