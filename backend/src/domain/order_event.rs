//! Domain events emitted by order mutations.
//!
//! Events stay transport agnostic; the WebSocket adapter maps them to
//! `{ "event": ..., "data": ... }` frames.

use crate::domain::{Order, OrderId};

/// Change notification published after a successful order mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    /// A new order entered the queue.
    Created(Order),
    /// An order changed status.
    Updated(Order),
    /// An order was re-prioritised.
    PriorityChanged(Order),
    /// An order was removed.
    Deleted(OrderId),
}

impl OrderEvent {
    /// Channel name that subscribers listen on.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Created(_) => "order:new",
            Self::Updated(_) => "order:updated",
            Self::PriorityChanged(_) => "order:priority_changed",
            Self::Deleted(_) => "order:deleted",
        }
    }

    /// Identifier of the order the event refers to.
    #[must_use]
    pub fn order_id(&self) -> OrderId {
        match self {
            Self::Created(order) | Self::Updated(order) | Self::PriorityChanged(order) => {
                order.id()
            }
            Self::Deleted(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleted_event_reports_its_name_and_id() {
        let id = OrderId::new(12).expect("positive id");
        let event = OrderEvent::Deleted(id);

        assert_eq!(event.name(), "order:deleted");
        assert_eq!(event.order_id(), id);
    }
}
