//! Value object trait: equality by value, not identity.
//!
//! Record fields with business rules attached (quantity, priority) are modelled
//! as value objects: they are validated once, on construction, and are then
//! copied around freely.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; construction is where validation happens, so holding a
/// value object is proof that its invariant holds.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Priority(u8);
///
/// impl ValueObject for Priority {}
///
/// assert_eq!(Priority(1), Priority(1)); // equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
