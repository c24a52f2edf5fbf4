//! WebSocket inbound adapter streaming order events to clients.
//!
//! Responsibilities:
//! - upgrade `/ws` requests (unauthenticated, any origin)
//! - spawn one session task per connection, subscribed to order events
//! - keep WebSocket-specific concerns at the edge of the system

use actix_web::web::{self, Payload};
use actix_web::{HttpRequest, HttpResponse, get};
use tracing::{error, info};
use uuid::Uuid;

mod session;

pub mod messages;
pub mod state;

/// Handle WebSocket upgrade for the `/ws` endpoint.
#[get("/ws")]
pub async fn ws_entry(
    state: web::Data<state::WsState>,
    req: HttpRequest,
    stream: Payload,
) -> actix_web::Result<HttpResponse> {
    // Subscribed before the upgrade response is sent.
    let events = state.events.subscribe();

    let (response, session, messages) = actix_ws::handle(&req, stream).map_err(|err| {
        error!(error = %err, "WebSocket upgrade failed");
        err
    })?;

    let connection_id = Uuid::new_v4();
    info!(%connection_id, "client connected");
    actix_web::rt::spawn(session::handle_ws_session(
        connection_id,
        events,
        session,
        messages,
    ));

    Ok(response)
}
