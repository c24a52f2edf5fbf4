//! Catalogue products offered at the till.
//!
//! Products are seeded externally and never mutated through the API, so the
//! type is a plain read model.

use rust_decimal::Decimal;
use serde::Serialize;

/// A product row as served to point-of-sale clients.
///
/// `price` serialises as a decimal string (`"6.00"`) so clients never see
/// binary floating point artefacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Tile colour used by the till UI.
    pub color: String,
    /// Image or ingredient reference.
    pub image_url: Option<String>,
}
