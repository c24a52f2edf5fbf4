//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod orders;
pub mod products;
pub mod state;
pub mod status;
pub mod validation;

pub use error::ApiResult;
