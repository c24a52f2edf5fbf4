//! Wire-level message definitions for the WebSocket adapter.
//!
//! Order events are transformed into these payloads before being serialised
//! to JSON and sent to connected clients as text frames.

use serde::Serialize;

use crate::domain::{Order, OrderEvent, OrderId};

/// Outbound frame: `{ "event": "<name>", "data": <payload> }`.
#[derive(Debug, Serialize)]
pub struct EventFrame<'a> {
    /// Channel name such as `order:new`.
    pub event: &'static str,
    /// Event payload.
    pub data: EventData<'a>,
}

/// Payload carried by an [`EventFrame`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EventData<'a> {
    /// Full order record for create and update events.
    Order(&'a Order),
    /// Identifier of a removed order.
    Deleted { id: OrderId },
}

impl<'a> From<&'a OrderEvent> for EventFrame<'a> {
    fn from(event: &'a OrderEvent) -> Self {
        let data = match event {
            OrderEvent::Created(order)
            | OrderEvent::Updated(order)
            | OrderEvent::PriorityChanged(order) => EventData::Order(order),
            OrderEvent::Deleted(id) => EventData::Deleted { id: *id },
        };
        Self {
            event: event.name(),
            data,
        }
    }
}
