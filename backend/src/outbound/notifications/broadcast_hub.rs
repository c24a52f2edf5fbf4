//! In-memory order event fan-out over a `tokio` broadcast channel.

use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::OrderEvent;
use crate::domain::ports::{OrderEventPublisher, OrderEventReceiver, OrderEventSource};

/// Default number of events buffered per subscriber before it lags.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Process-scoped hub delivering order events to every live subscriber.
///
/// Delivery is at-most-once. Events published while nobody is subscribed
/// are dropped, and a subscriber that falls more than the capacity behind
/// skips the oldest events.
///
/// # Example
///
/// ```
/// use pos_backend::domain::ports::{OrderEventPublisher, OrderEventSource};
/// use pos_backend::domain::{OrderEvent, OrderId};
/// use pos_backend::outbound::notifications::BroadcastHub;
///
/// let hub = BroadcastHub::new(16);
/// let mut rx = hub.subscribe();
/// let id = OrderId::new(1).expect("positive id");
/// hub.publish(OrderEvent::Deleted(id));
/// assert_eq!(rx.try_recv().ok(), Some(OrderEvent::Deleted(id)));
/// ```
#[derive(Debug, Clone)]
pub struct BroadcastHub {
    sender: broadcast::Sender<OrderEvent>,
}

impl BroadcastHub {
    /// Create a hub buffering up to `capacity` events per subscriber.
    ///
    /// A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Number of currently connected subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl OrderEventPublisher for BroadcastHub {
    fn publish(&self, event: OrderEvent) {
        let name = event.name();
        let order_id = event.order_id().get();
        match self.sender.send(event) {
            Ok(receivers) => debug!(event = name, order_id, receivers, "order event published"),
            Err(_) => debug!(event = name, order_id, "order event dropped; no subscribers"),
        }
    }
}

impl OrderEventSource for BroadcastHub {
    fn subscribe(&self) -> OrderEventReceiver {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::{RecvError, TryRecvError};

    use super::*;
    use crate::domain::OrderId;

    fn deleted(raw: i32) -> OrderEvent {
        OrderEvent::Deleted(OrderId::new(raw).expect("positive id"))
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let hub = BroadcastHub::default();
        hub.publish(deleted(1));
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn every_subscriber_receives_each_event() {
        let hub = BroadcastHub::new(8);
        let mut kitchen = hub.subscribe();
        let mut till = hub.subscribe();

        hub.publish(deleted(3));

        assert_eq!(kitchen.recv().await.ok(), Some(deleted(3)));
        assert_eq!(till.recv().await.ok(), Some(deleted(3)));
    }

    #[test]
    fn late_subscribers_see_no_history() {
        let hub = BroadcastHub::new(8);
        let _early = hub.subscribe();
        hub.publish(deleted(1));

        let mut late = hub.subscribe();
        assert_eq!(late.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn lagging_subscriber_skips_oldest_events() {
        let hub = BroadcastHub::new(2);
        let mut slow = hub.subscribe();

        for raw in 1..=4 {
            hub.publish(deleted(raw));
        }

        assert_eq!(slow.recv().await, Err(RecvError::Lagged(2)));
        assert_eq!(slow.recv().await.ok(), Some(deleted(3)));
        assert_eq!(slow.recv().await.ok(), Some(deleted(4)));
    }
}
