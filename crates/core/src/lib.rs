//! `lootpack-core` — shared building blocks for the backpack inventory.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal concerns).

pub mod error;
pub mod value_object;

pub use error::{Field, InventoryError, InventoryResult};
pub use value_object::ValueObject;
