//! Session-changed notifications as an explicit subscription interface.
//!
//! The identity provider pushes sign-in/sign-out transitions; UI layers
//! subscribe for a channel of [`SessionEvent`]s instead of reading ambient
//! global session state. Subscribers that drop their receiver are pruned on
//! the next publish.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use tracing::debug;

use crate::domain::UserRole;

/// The authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user_id: String,
    pub role: UserRole,
}

/// A session lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(SessionState),
    RoleChanged(UserRole),
    SignedOut,
}

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct HubInner {
    subscribers: HashMap<SubscriptionId, Sender<SessionEvent>>,
    current: Option<SessionState>,
    next_id: u64,
}

/// Fan-out hub for session events.
#[derive(Default)]
pub struct SessionHub {
    inner: Mutex<HubInner>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; events published after this call arrive on the
    /// returned receiver.
    pub fn subscribe(&self) -> (SubscriptionId, Receiver<SessionEvent>) {
        let (tx, rx) = channel();
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.insert(id, tx);
        (id, rx)
    }

    /// Drop a subscription. Unknown ids are a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.subscribers.remove(&id);
    }

    /// Publish an event to every live subscriber and update the cached state.
    pub fn publish(&self, event: SessionEvent) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        match &event {
            SessionEvent::SignedIn(state) => inner.current = Some(state.clone()),
            SessionEvent::RoleChanged(role) => {
                if let Some(state) = inner.current.as_mut() {
                    state.role = *role;
                }
            }
            SessionEvent::SignedOut => inner.current = None,
        }
        let before = inner.subscribers.len();
        inner
            .subscribers
            .retain(|_, tx| tx.send(event.clone()).is_ok());
        let pruned = before - inner.subscribers.len();
        if pruned > 0 {
            debug!(pruned, "dropped disconnected session subscribers");
        }
    }

    /// The most recently published session state, if signed in.
    pub fn current(&self) -> Option<SessionState> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.current.clone()
    }
}
