//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` between the HTTP handlers that
//! publish run records and the background task that persists them.

use rulecheck_core::run_log::RuleRunRecord;
use tokio::sync::broadcast;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for [`RuleRunRecord`]s.
///
/// # Usage
///
/// ```rust
/// use rulecheck_events::EventBus;
///
/// let bus = EventBus::default();
/// let rx = bus.subscribe();
/// assert_eq!(bus.subscriber_count(), 1);
/// # drop(rx);
/// ```
pub struct EventBus {
    sender: broadcast::Sender<RuleRunRecord>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed records are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a record to all current subscribers.
    ///
    /// Never fails: with no subscribers (run history disabled) the record
    /// is simply dropped.
    pub fn publish(&self, record: RuleRunRecord) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(record);
    }

    /// Subscribe to every record published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<RuleRunRecord> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
