//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Record field that failed validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Quantity,
    Priority,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Quantity => "quantity",
            Field::Priority => "priority",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inventory-level error.
///
/// Every variant is recoverable: the failing operation leaves the inventory
/// exactly as it found it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The inventory already holds `capacity` records.
    #[error("backpack is full ({capacity}/{capacity} slots)")]
    CapacityExceeded { capacity: usize },

    /// A record field failed validation.
    #[error("invalid {field}: {reason}")]
    InvalidField { field: Field, reason: String },

    /// No record with the requested name.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// The operation needs at least one record.
    #[error("backpack is empty")]
    EmptyCollection,

    /// The ordering the operation relies on has not been established.
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
}

impl InventoryError {
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    pub fn invalid_field(field: Field, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionFailed(msg.into())
    }
}
