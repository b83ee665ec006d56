//! Provider-pushed session change feed.
//!
//! DESIGN
//! ======
//! Each subscriber owns an unbounded channel receiver, so changes arrive in
//! publication order and a slow consumer never blocks the publisher. The feed
//! remembers the last published state and replays it to late subscribers.
//! Dropping a receiver unsubscribes; its sender is pruned on the next publish.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::sync::{Arc, Mutex, PoisonError};

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

use crate::net::types::User;

/// A session change: `Some` when signed in, `None` when signed out.
pub type SessionChange = Option<User>;

/// Receiving half of a feed subscription.
pub type SessionSubscription = UnboundedReceiver<SessionChange>;

#[derive(Default)]
struct FeedInner {
    /// `None` until the first publication.
    last: Option<SessionChange>,
    subscribers: Vec<UnboundedSender<SessionChange>>,
}

#[derive(Clone, Default)]
pub struct SessionFeed {
    inner: Arc<Mutex<FeedInner>>,
}

impl SessionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to future changes, replaying the latest one if any.
    pub fn subscribe(&self) -> SessionSubscription {
        let (tx, rx) = unbounded();
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = inner.last.clone() {
            let _ = tx.unbounded_send(current);
        }
        inner.subscribers.push(tx);
        rx
    }

    /// Deliver a change to every live subscriber.
    pub fn publish(&self, change: SessionChange) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.subscribers.retain(|tx| tx.unbounded_send(change.clone()).is_ok());
        log::debug!(
            "session feed: published {} to {} subscriber(s)",
            if change.is_some() { "sign-in" } else { "sign-out" },
            inner.subscribers.len()
        );
        inner.last = Some(change);
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).subscribers.len()
    }
}
