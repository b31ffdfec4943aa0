//! Client-side authentication state.
//!
//! `SessionStore` is the single source of truth for "is someone logged in,
//! and as whom". It is built once at the application root and cloned into
//! every consumer; clones share the same state. Subscribers to
//! [`LoggedInStream`] receive the current value on registration and then
//! every transition, in call order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll};

use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::{Stream, StreamExt};

use crate::api::SessionIdentity;

type Listener = Rc<dyn Fn(bool)>;

struct ListenerEntry {
    id: u64,
    /// Number of emissions issued before this listener registered.
    since: u64,
    callback: Listener,
}

struct Emission {
    seq: u64,
    value: bool,
}

#[derive(Default)]
struct StoreState {
    identity: Option<Rc<SessionIdentity>>,
    listeners: Vec<ListenerEntry>,
    pending: VecDeque<Emission>,
    draining: bool,
    issued: u64,
    next_listener_id: u64,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Rc<RefCell<StoreState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.borrow().identity.is_some()
    }

    pub fn identity(&self) -> Option<Rc<SessionIdentity>> {
        self.inner.borrow().identity.clone()
    }

    /// Records `identity` and emits `true`. A login while already logged in
    /// replaces the identity with a single `true` emission.
    pub fn log_in(&self, identity: SessionIdentity) {
        log::debug!("session store: user {} logged in", identity.id);
        self.replace(Some(Rc::new(identity)));
    }

    /// Clears the identity and emits `false`, even when already logged out.
    pub fn log_out(&self) {
        log::debug!("session store: logged out");
        self.replace(None);
    }

    pub fn logged_in_stream(&self) -> LoggedInStream {
        LoggedInStream {
            store: self.clone(),
        }
    }

    fn replace(&self, identity: Option<Rc<SessionIdentity>>) {
        {
            let mut state = self.inner.borrow_mut();
            let value = identity.is_some();
            state.identity = identity;
            state.issued += 1;
            let seq = state.issued;
            state.pending.push_back(Emission { seq, value });
            // A callback further up the stack is already delivering; it
            // picks this emission up after the ones queued before it.
            if state.draining {
                return;
            }
            state.draining = true;
        }
        self.drain();
    }

    fn drain(&self) {
        let _guard = DrainGuard(&self.inner);
        loop {
            let (value, targets) = {
                let mut state = self.inner.borrow_mut();
                let Some(emission) = state.pending.pop_front() else {
                    state.draining = false;
                    return;
                };
                let targets: Vec<(u64, Listener)> = state
                    .listeners
                    .iter()
                    .filter(|entry| entry.since < emission.seq)
                    .map(|entry| (entry.id, Rc::clone(&entry.callback)))
                    .collect();
                (emission.value, targets)
            };
            for (id, callback) in targets {
                if self.is_registered(id) {
                    callback(value);
                }
            }
        }
    }

    fn is_registered(&self, id: u64) -> bool {
        self.inner
            .borrow()
            .listeners
            .iter()
            .any(|entry| entry.id == id)
    }
}

/// Ends a drain even when a listener unwinds, so later calls deliver again.
/// Emissions still queued at that point are dropped.
struct DrainGuard<'a>(&'a RefCell<StoreState>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.0.try_borrow_mut() {
            state.pending.clear();
            state.draining = false;
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("SessionStore")
            .field("identity", &state.identity)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

/// Current-value replaying view of `SessionStore::is_logged_in`.
#[derive(Clone)]
pub struct LoggedInStream {
    store: SessionStore,
}

impl LoggedInStream {
    /// Registers `callback`, invoking it immediately with the current value.
    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> Subscription {
        let callback: Listener = Rc::new(callback);
        let (id, current) = {
            let mut state = self.store.inner.borrow_mut();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            let since = state.issued;
            state.listeners.push(ListenerEntry {
                id,
                since,
                callback: Rc::clone(&callback),
            });
            (id, state.identity.is_some())
        };
        callback(current);
        Subscription {
            store: Rc::downgrade(&self.store.inner),
            id: Some(id),
        }
    }

    /// Async view of the same sequence: the first item is the current value.
    pub fn updates(&self) -> LoggedInUpdates {
        let (sender, receiver) = mpsc::unbounded();
        let subscription = self.subscribe(move |value| {
            let _ = sender.unbounded_send(value);
        });
        LoggedInUpdates {
            receiver,
            _subscription: subscription,
        }
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<RefCell<StoreState>>,
    id: Option<u64>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        let Some(inner) = self.store.upgrade() else {
            return;
        };
        // The callback may own other subscriptions; drop it outside the borrow.
        let removed = {
            let mut state = inner.borrow_mut();
            state
                .listeners
                .iter()
                .position(|entry| entry.id == id)
                .map(|index| state.listeners.remove(index))
        };
        drop(removed);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

pub struct LoggedInUpdates {
    receiver: UnboundedReceiver<bool>,
    _subscription: Subscription,
}

impl Stream for LoggedInUpdates {
    type Item = bool;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<bool>> {
        self.receiver.poll_next_unpin(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_identity, user_identity};

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn starts_logged_out() {
        let store = SessionStore::new();
        assert!(!store.is_logged_in());
        assert!(store.identity().is_none());
    }

    #[test]
    fn new_subscriber_receives_current_value_first() {
        let store = SessionStore::new();
        let (seen, callback) = recorder();
        let _subscription = store.logged_in_stream().subscribe(callback);
        assert_eq!(*seen.borrow(), vec![false]);

        store.log_in(user_identity());
        let (late, callback) = recorder();
        let _late = store.logged_in_stream().subscribe(callback);
        assert_eq!(*late.borrow(), vec![true]);
    }

    #[test]
    fn log_in_then_log_out_emits_in_order() {
        let store = SessionStore::new();
        let (seen, callback) = recorder();
        let _subscription = store.logged_in_stream().subscribe(callback);

        store.log_in(user_identity());
        store.log_out();

        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn log_in_stores_identity_unchanged() {
        let store = SessionStore::new();
        let identity = user_identity();
        store.log_in(identity.clone());

        assert!(store.is_logged_in());
        assert_eq!(*store.identity().unwrap(), identity);
    }

    #[test]
    fn log_out_clears_identity() {
        let store = SessionStore::new();
        store.log_in(user_identity());
        store.log_out();

        assert!(!store.is_logged_in());
        assert!(store.identity().is_none());
    }

    #[test]
    fn log_out_when_logged_out_re_emits_false() {
        let store = SessionStore::new();
        let (seen, callback) = recorder();
        let _subscription = store.logged_in_stream().subscribe(callback);

        store.log_out();
        store.log_out();

        assert_eq!(*seen.borrow(), vec![false, false, false]);
    }

    #[test]
    fn re_login_replaces_identity_with_single_emission() {
        let store = SessionStore::new();
        let (seen, callback) = recorder();
        let _subscription = store.logged_in_stream().subscribe(callback);

        store.log_in(user_identity());
        store.log_in(admin_identity());

        assert_eq!(*seen.borrow(), vec![false, true, true]);
        assert!(store.identity().unwrap().is_admin);
    }

    #[test]
    fn final_state_tracks_last_call() {
        let calls = [true, false, false, true, true, false, true];
        let store = SessionStore::new();
        for (index, login) in calls.iter().enumerate() {
            if *login {
                store.log_in(user_identity());
            } else {
                store.log_out();
            }
            assert_eq!(store.is_logged_in(), calls[index]);
        }
        assert!(store.is_logged_in());
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();
        let (seen, callback) = recorder();
        let _subscription = other.logged_in_stream().subscribe(callback);

        store.log_in(user_identity());

        assert!(other.is_logged_in());
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let store = SessionStore::new();
        let (seen, callback) = recorder();
        let subscription = store.logged_in_stream().subscribe(callback);
        store.log_in(user_identity());
        subscription.unsubscribe();
        store.log_out();

        assert_eq!(*seen.borrow(), vec![false, true]);

        let (dropped, callback) = recorder();
        drop(store.logged_in_stream().subscribe(callback));
        store.log_in(user_identity());
        assert_eq!(*dropped.borrow(), vec![false]);
    }

    #[test]
    fn every_subscriber_sees_the_same_order_when_callbacks_mutate() {
        let store = SessionStore::new();
        let (first, first_callback) = recorder();
        let _first = store.logged_in_stream().subscribe(first_callback);

        let reactor = store.clone();
        let _logout_on_login = store.logged_in_stream().subscribe(move |value| {
            if value {
                reactor.log_out();
            }
        });

        let (last, last_callback) = recorder();
        let _last = store.logged_in_stream().subscribe(last_callback);

        store.log_in(user_identity());

        assert!(!store.is_logged_in());
        assert_eq!(*first.borrow(), vec![false, true, false]);
        assert_eq!(*last.borrow(), vec![false, true, false]);
    }

    #[test]
    fn nested_subscription_sees_current_value_then_new_transitions() {
        let store = SessionStore::new();
        let nested_seen = Rc::new(RefCell::new(Vec::new()));
        let holder: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let stream = store.logged_in_stream();
        let sink = Rc::clone(&nested_seen);
        let keep = Rc::clone(&holder);
        let _outer = store.logged_in_stream().subscribe(move |value| {
            if value && keep.borrow().is_empty() {
                let sink = Rc::clone(&sink);
                let inner = stream.subscribe(move |v| sink.borrow_mut().push(v));
                keep.borrow_mut().push(inner);
            }
        });

        store.log_in(user_identity());
        store.log_out();

        assert_eq!(*nested_seen.borrow(), vec![true, false]);
        holder.borrow_mut().clear();
    }

    #[test]
    fn panicking_listener_does_not_stall_later_transitions() {
        let store = SessionStore::new();
        let (seen, callback) = recorder();
        let _subscription = store.logged_in_stream().subscribe(callback);
        let failing = store.logged_in_stream().subscribe(|value| {
            if value {
                panic!("listener failed");
            }
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.log_in(user_identity());
        }));
        assert!(result.is_err());
        assert!(store.is_logged_in());
        drop(failing);

        store.log_out();
        store.log_in(user_identity());

        assert_eq!(*seen.borrow(), vec![false, true, false, true]);
    }

    #[tokio::test]
    async fn updates_stream_replays_then_follows() {
        let store = SessionStore::new();
        let mut updates = store.logged_in_stream().updates();

        store.log_in(user_identity());
        store.log_out();

        assert_eq!(updates.next().await, Some(false));
        assert_eq!(updates.next().await, Some(true));
        assert_eq!(updates.next().await, Some(false));
    }
}
