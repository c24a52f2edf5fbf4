//! Connectivity check used by till and kitchen clients.
//!
//! ```text
//! GET /api/test
//! ```

use actix_web::{get, web};
use serde::Serialize;

/// Plain message payload shared by informational responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirm the server is reachable.
#[get("/test")]
pub async fn server_check() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("Server is responding correctly!"))
}
