//! Ports for publishing and subscribing to order change events.
//!
//! Delivery is at-most-once with no replay: subscribers only see events
//! published after they subscribed, and a subscriber that falls behind the
//! channel capacity loses the oldest events.

use tokio::sync::broadcast;

use crate::domain::OrderEvent;

/// Receiving half handed to each subscriber.
pub type OrderEventReceiver = broadcast::Receiver<OrderEvent>;

/// Driven port used by domain services to announce completed mutations.
#[cfg_attr(test, mockall::automock)]
pub trait OrderEventPublisher: Send + Sync {
    /// Fan the event out to current subscribers. Never fails; having no
    /// subscribers is a normal state.
    fn publish(&self, event: OrderEvent);
}

/// Subscription side consumed by the WebSocket adapter.
pub trait OrderEventSource: Send + Sync {
    /// Start receiving events published from now on.
    fn subscribe(&self) -> OrderEventReceiver;
}
