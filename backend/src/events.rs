//! Profile change notifications
//!
//! Profile state is pushed to interested parties through an explicit
//! subscription interface instead of an implicit UI callback: components
//! register a receiver and react to created/updated events, decoupled from
//! any rendering mechanism.

use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

/// A change to a user's stored profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    /// A skeleton profile was created on first authenticated access
    Created { user_id: Uuid },
    /// An existing profile was merged with new fields
    Updated { user_id: Uuid },
}

impl ProfileEvent {
    pub fn user_id(&self) -> Uuid {
        match self {
            ProfileEvent::Created { user_id } | ProfileEvent::Updated { user_id } => *user_id,
        }
    }
}

/// Broadcast hub for profile events
///
/// Cheap to clone; all clones publish into the same channel. Slow
/// subscribers may observe `Lagged` and should resync from the store.
#[derive(Clone)]
pub struct ProfileEvents {
    tx: broadcast::Sender<ProfileEvent>,
}

impl ProfileEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a new subscriber
    pub fn subscribe(&self) -> broadcast::Receiver<ProfileEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all current subscribers
    ///
    /// Publishing with no subscribers is not an error.
    pub fn publish(&self, event: ProfileEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => debug!(user_id = %event.user_id(), subscribers = count, "profile event published"),
            Err(_) => debug!(user_id = %event.user_id(), "profile event dropped (no subscribers)"),
        }
    }
}

impl Default for ProfileEvents {
    fn default() -> Self {
        Self::new(64)
    }
}
