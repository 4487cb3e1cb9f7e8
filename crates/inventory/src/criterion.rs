use serde::Serialize;

use crate::record::Record;

/// Key an inventory can be sorted by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Byte-wise ascending by name. The only order binary search accepts.
    Name,
    /// Byte-wise ascending by category.
    Category,
    /// Ascending priority value, so the most urgent items come first.
    Priority,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Name,
        SortCriterion::Category,
        SortCriterion::Priority,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::Name => "name",
            SortCriterion::Category => "category",
            SortCriterion::Priority => "priority",
        }
    }

    /// True when `left` must be placed after `right` under this criterion.
    ///
    /// Strictly greater only: equal keys never move past each other.
    pub fn should_follow(self, left: &Record, right: &Record) -> bool {
        match self {
            SortCriterion::Name => left.name() > right.name(),
            SortCriterion::Category => left.category() > right.category(),
            SortCriterion::Priority => left.priority() > right.priority(),
        }
    }
}

impl core::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
