//! Shared `sqlx` error mapping for the repository adapters.

use tracing::debug;

/// Map a `sqlx` failure into a repository's connection or query constructor.
///
/// Pool exhaustion, closed pools and transport failures are connection
/// errors; everything the server reported about the statement itself is a
/// query error. The full error text is kept so callers can log or expose it.
pub fn map_sqlx_error<E, Q, C>(error: sqlx::Error, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    let message = error.to_string();
    debug!(error_message = %message, "sqlx operation failed");

    match error {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => connection(message),
        _ => query(message),
    }
}
