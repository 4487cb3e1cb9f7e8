//! Backpack inventory module.
//!
//! A fixed-capacity, order-sensitive collection of records with insertion
//! sort by several criteria and a binary search that is only allowed while the
//! last sort was by name. Pure domain logic (no terminal IO).

pub mod criterion;
pub mod inventory;
pub mod record;

pub use criterion::SortCriterion;
pub use inventory::{DEFAULT_CAPACITY, Inventory, InventoryView, SortOutcome};
pub use record::{CATEGORY_MAX_LEN, NAME_MAX_LEN, Priority, Quantity, Record};
