//! Per-connection WebSocket handler.
//!
//! Forwards order events from the subscription to the client while keeping
//! framing and heartbeats at the edge. The public contract pings every 5s and
//! considers a connection idle after 10s without client traffic. Tests
//! shorten these intervals.

use std::time::{Duration, Instant};

use actix_ws::{CloseCode, CloseReason, Closed, Message, MessageStream, ProtocolError, Session};
use tokio::sync::broadcast::error::RecvError;
use tokio::time;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::OrderEvent;
use crate::domain::ports::OrderEventReceiver;
use crate::inbound::ws::messages::EventFrame;

/// Time between heartbeats to the client (5s in production, shorter in tests).
#[cfg(not(test))]
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
#[cfg(test)]
const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Max idle time before disconnecting the client (10s in production, shorter in tests).
#[cfg(not(test))]
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(test)]
const CLIENT_TIMEOUT: Duration = Duration::from_millis(100);

pub(super) async fn handle_ws_session(
    connection_id: Uuid,
    events: OrderEventReceiver,
    session: Session,
    stream: MessageStream,
) {
    WsSession::new(connection_id, events).run(session, stream).await;
}

enum SessionError {
    ClientClosed(Option<CloseReason>),
    StreamClosed,
    HeartbeatTimeout,
    Protocol(ProtocolError),
    EventsClosed,
    Network(Closed),
}

enum CloseAction {
    None,
    Close(Option<CloseReason>),
}

struct WsSession {
    connection_id: Uuid,
    events: OrderEventReceiver,
}

impl WsSession {
    fn new(connection_id: Uuid, events: OrderEventReceiver) -> Self {
        Self {
            connection_id,
            events,
        }
    }

    async fn run(mut self, mut session: Session, mut stream: MessageStream) {
        let mut last_heartbeat = Instant::now();
        let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

        loop {
            let result = tokio::select! {
                _ = heartbeat.tick() => {
                    Self::handle_heartbeat_tick(&mut session, last_heartbeat).await
                }
                message = stream.recv() => {
                    Self::handle_stream_message(&mut session, &mut last_heartbeat, message).await
                }
                event = self.events.recv() => {
                    self.handle_event(&mut session, event).await
                }
            };

            if let Err(error) = result {
                self.log_shutdown_reason(&error);
                let close_action = Self::close_action_for(error);
                self.close_session_if_needed(session, close_action).await;
                return;
            }
        }
    }

    async fn handle_heartbeat_tick(
        session: &mut Session,
        last_heartbeat: Instant,
    ) -> Result<(), SessionError> {
        if Instant::now().duration_since(last_heartbeat) > CLIENT_TIMEOUT {
            return Err(SessionError::HeartbeatTimeout);
        }

        session.ping(b"").await.map_err(SessionError::Network)
    }

    async fn handle_stream_message(
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Option<Result<Message, ProtocolError>>,
    ) -> Result<(), SessionError> {
        let Some(message) = message else {
            return Err(SessionError::StreamClosed);
        };

        match message {
            Ok(message) => Self::handle_message(session, last_heartbeat, message).await,
            Err(error) => Err(SessionError::Protocol(error)),
        }
    }

    async fn handle_message(
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Message,
    ) -> Result<(), SessionError> {
        match message {
            Message::Ping(payload) => {
                *last_heartbeat = Instant::now();
                session
                    .pong(&payload)
                    .await
                    .map_err(SessionError::Network)
            }
            // Clients only listen; inbound data frames still count as traffic.
            Message::Text(_)
            | Message::Binary(_)
            | Message::Pong(_)
            | Message::Continuation(_)
            | Message::Nop => {
                *last_heartbeat = Instant::now();
                Ok(())
            }
            Message::Close(reason) => Err(SessionError::ClientClosed(reason)),
        }
    }

    async fn handle_event(
        &self,
        session: &mut Session,
        event: Result<OrderEvent, RecvError>,
    ) -> Result<(), SessionError> {
        match event {
            Ok(event) => self.send_event(session, &event).await,
            Err(RecvError::Lagged(skipped)) => {
                warn!(
                    connection_id = %self.connection_id,
                    skipped,
                    "WebSocket client lagged; order events dropped"
                );
                Ok(())
            }
            Err(RecvError::Closed) => Err(SessionError::EventsClosed),
        }
    }

    async fn send_event(
        &self,
        session: &mut Session,
        event: &OrderEvent,
    ) -> Result<(), SessionError> {
        let frame = EventFrame::from(event);
        match serde_json::to_string(&frame) {
            Ok(body) => {
                debug!(
                    connection_id = %self.connection_id,
                    event = frame.event,
                    "forwarding order event"
                );
                session.text(body).await.map_err(SessionError::Network)
            }
            Err(error) => {
                warn!(error = %error, "Failed to serialise WebSocket payload");
                Ok(())
            }
        }
    }

    fn log_shutdown_reason(&self, error: &SessionError) {
        let connection_id = self.connection_id;
        match error {
            SessionError::HeartbeatTimeout => {
                warn!(%connection_id, "WebSocket heartbeat timeout; closing connection");
            }
            SessionError::Protocol(error) => {
                warn!(%connection_id, error = %error, "WebSocket protocol error");
            }
            SessionError::Network(error) => {
                warn!(%connection_id, error = %error, "WebSocket send failed; closing connection");
            }
            SessionError::ClientClosed(_) | SessionError::StreamClosed => {
                info!(%connection_id, "client disconnected");
            }
            SessionError::EventsClosed => {
                info!(%connection_id, "order event channel closed; closing connection");
            }
        }
    }

    fn close_action_for(error: SessionError) -> CloseAction {
        match error {
            SessionError::HeartbeatTimeout => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Normal,
                description: Some("heartbeat timeout".to_owned()),
            })),
            SessionError::Protocol(_) => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Protocol,
                description: Some("protocol error".to_owned()),
            })),
            SessionError::EventsClosed => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Away,
                description: Some("server shutting down".to_owned()),
            })),
            SessionError::ClientClosed(reason) => CloseAction::Close(reason),
            SessionError::StreamClosed | SessionError::Network(_) => CloseAction::None,
        }
    }

    async fn close_session_if_needed(&self, session: Session, close_action: CloseAction) {
        if let CloseAction::Close(reason) = close_action {
            if let Err(error) = session.close(reason).await {
                warn!(
                    connection_id = %self.connection_id,
                    error = %error,
                    "Failed to close WebSocket session"
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
