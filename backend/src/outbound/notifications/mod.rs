//! Real-time notification adapters implementing the order event ports.

mod broadcast_hub;

pub use broadcast_hub::{BroadcastHub, DEFAULT_EVENT_CAPACITY};
