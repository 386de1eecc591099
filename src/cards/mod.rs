//! Card system: definitions and the static catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Static card data (name, attack, defense)
//! - `CATALOG`: The six cards every deck is built from

pub mod catalog;
pub mod definition;

pub use catalog::{find, CATALOG};
pub use definition::{Card, CardId};
