use serde::Serialize;

use lootpack_core::{Field, InventoryError, InventoryResult, ValueObject};

/// Longest accepted item name, in bytes.
pub const NAME_MAX_LEN: usize = 29;

/// Longest accepted category, in bytes.
pub const CATEGORY_MAX_LEN: usize = 19;

/// Number of units of an item (always > 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: i64) -> InventoryResult<Self> {
        if value <= 0 {
            return Err(InventoryError::invalid_field(
                Field::Quantity,
                "must be greater than zero",
            ));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| InventoryError::invalid_field(Field::Quantity, "too large"))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Urgency of an item: 1 is the most urgent, 5 the least.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    pub const HIGHEST: Priority = Priority(1);
    pub const LOWEST: Priority = Priority(5);

    pub fn new(value: i64) -> InventoryResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|p| (Self::HIGHEST.0..=Self::LOWEST.0).contains(p))
            .map(Self)
            .ok_or_else(|| InventoryError::invalid_field(Field::Priority, "must be between 1 and 5"))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl ValueObject for Priority {}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One item held in the backpack.
///
/// Records can only be built through [`Record::new`], so every record in an
/// [`Inventory`](crate::Inventory) satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    category: String,
    quantity: Quantity,
    priority: Priority,
}

impl Record {
    /// Validate and build a record.
    ///
    /// Fails with [`InventoryError::InvalidField`] when the name or category is
    /// blank or too long, the category contains whitespace, the quantity is
    /// not positive, or the priority is outside `1..=5`.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        priority: i64,
    ) -> InventoryResult<Self> {
        let name = name.into();
        let category = category.into();

        validate_text(Field::Name, &name, NAME_MAX_LEN)?;
        validate_text(Field::Category, &category, CATEGORY_MAX_LEN)?;
        if category.chars().any(char::is_whitespace) {
            return Err(InventoryError::invalid_field(
                Field::Category,
                "must be a single word",
            ));
        }

        Ok(Self {
            name,
            category,
            quantity: Quantity::new(quantity)?,
            priority: Priority::new(priority)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

fn validate_text(field: Field, value: &str, max_len: usize) -> InventoryResult<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::invalid_field(field, "cannot be empty"));
    }
    if value.len() > max_len {
        return Err(InventoryError::invalid_field(
            field,
            format!("at most {max_len} characters"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: InventoryError) -> Field {
        match err {
            InventoryError::InvalidField { field, .. } => field,
            other => panic!("Expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn valid_record_keeps_its_fields() {
        let record = Record::new("Medkit", "Cura", 2, 1).unwrap();
        assert_eq!(record.name(), "Medkit");
        assert_eq!(record.category(), "Cura");
        assert_eq!(record.quantity().get(), 2);
        assert_eq!(record.priority(), Priority::HIGHEST);
    }

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(field_of(Quantity::new(0).unwrap_err()), Field::Quantity);
        assert_eq!(field_of(Quantity::new(-3).unwrap_err()), Field::Quantity);
        assert_eq!(
            field_of(Quantity::new(i64::from(u32::MAX) + 1).unwrap_err()),
            Field::Quantity
        );
        assert_eq!(Quantity::new(1).unwrap().get(), 1);
    }

    #[test]
    fn priority_range_is_one_to_five() {
        assert_eq!(field_of(Priority::new(0).unwrap_err()), Field::Priority);
        assert_eq!(field_of(Priority::new(6).unwrap_err()), Field::Priority);
        for p in 1..=5 {
            assert_eq!(i64::from(Priority::new(p).unwrap().get()), p);
        }
    }

    #[test]
    fn blank_text_fields_are_rejected() {
        assert_eq!(field_of(Record::new("", "Cura", 1, 1).unwrap_err()), Field::Name);
        assert_eq!(field_of(Record::new("   ", "Cura", 1, 1).unwrap_err()), Field::Name);
        assert_eq!(field_of(Record::new("Medkit", "", 1, 1).unwrap_err()), Field::Category);
    }

    #[test]
    fn overlong_text_fields_are_rejected() {
        let long_name = "x".repeat(NAME_MAX_LEN + 1);
        assert_eq!(field_of(Record::new(long_name, "Cura", 1, 1).unwrap_err()), Field::Name);
        assert!(Record::new("x".repeat(NAME_MAX_LEN), "Cura", 1, 1).is_ok());

        let long_category = "y".repeat(CATEGORY_MAX_LEN + 1);
        assert_eq!(
            field_of(Record::new("Medkit", long_category, 1, 1).unwrap_err()),
            Field::Category
        );
    }

    #[test]
    fn names_may_contain_spaces_but_categories_may_not() {
        assert!(Record::new("Energy Drink", "Cura", 1, 2).is_ok());
        assert_eq!(
            field_of(Record::new("Medkit", "First Aid", 1, 2).unwrap_err()),
            Field::Category
        );
    }

    #[test]
    fn record_serializes_with_plain_numbers() {
        let record = Record::new("Rifle", "Arma", 1, 3).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Rifle",
                "category": "Arma",
                "quantity": 1,
                "priority": 3,
            })
        );
    }
}
