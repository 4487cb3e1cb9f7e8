use core::num::NonZeroUsize;

use serde::Serialize;
use tracing::debug;

use lootpack_core::{InventoryError, InventoryResult};

use crate::criterion::SortCriterion;
use crate::record::Record;

/// Number of slots in a backpack unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity, ordered collection of records plus sort-state bookkeeping.
///
/// Two pieces of derived state travel with the records:
/// - the number of comparisons made by the most recent sort;
/// - whether the last order-changing operation was a sort by name.
///
/// The second one is provenance, not a sortedness check: sorting by category
/// or priority clears it even if the result happens to be name-ordered, and
/// every insert/remove clears it. Binary search is gated on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<Record>,
    capacity: usize,
    comparisons: u64,
    sorted_by_name: bool,
}

/// Result of [`Inventory::sort_by`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// The records were sorted.
    Sorted {
        criterion: SortCriterion,
        comparisons: u64,
    },
    /// Fewer than two records; nothing to sort.
    Skipped { len: usize },
}

impl SortOutcome {
    pub fn comparisons(self) -> u64 {
        match self {
            SortOutcome::Sorted { comparisons, .. } => comparisons,
            SortOutcome::Skipped { .. } => 0,
        }
    }
}

/// Read-only snapshot of an inventory, as handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryView<'a> {
    pub records: &'a [Record],
    pub capacity: usize,
    pub comparison_count: u64,
    pub sorted_by_name: bool,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Empty inventory with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_storage(DEFAULT_CAPACITY)
    }

    /// Empty inventory with `capacity` slots.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::with_storage(capacity.get())
    }

    fn with_storage(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            comparisons: 0,
            sorted_by_name: false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Comparisons made by the most recent sort (0 after any mutation).
    pub fn comparison_count(&self) -> u64 {
        self.comparisons
    }

    /// Whether the last order-changing operation was a sort by name.
    pub fn is_sorted_by_name(&self) -> bool {
        self.sorted_by_name
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn list(&self) -> InventoryView<'_> {
        InventoryView {
            records: &self.records,
            capacity: self.capacity,
            comparison_count: self.comparisons,
            sorted_by_name: self.sorted_by_name,
        }
    }

    /// Append a record at the end.
    pub fn insert(&mut self, record: Record) -> InventoryResult<()> {
        if self.is_full() {
            return Err(InventoryError::capacity_exceeded(self.capacity));
        }

        debug!(
            name = record.name(),
            index = self.records.len(),
            "inserted record"
        );
        self.records.push(record);
        self.invalidate_order();
        Ok(())
    }

    /// Remove the first record named exactly `name`, scanning in current order.
    ///
    /// Returns the former index of the record together with the record. All
    /// following records move one slot toward the front.
    pub fn remove(&mut self, name: &str) -> InventoryResult<(usize, Record)> {
        if self.records.is_empty() {
            return Err(InventoryError::EmptyCollection);
        }

        let index = self
            .position_of(name)
            .ok_or_else(|| InventoryError::not_found(name))?;
        let record = self.records.remove(index);
        self.invalidate_order();

        debug!(name, index, len = self.records.len(), "removed record");
        Ok((index, record))
    }

    /// Insertion sort by `criterion`, counting every neighbour probe.
    pub fn sort_by(&mut self, criterion: SortCriterion) -> SortOutcome {
        let len = self.records.len();
        if len <= 1 {
            self.comparisons = 0;
            debug!(%criterion, len, "sort skipped");
            return SortOutcome::Skipped { len };
        }

        let comparisons = insertion_sort(&mut self.records, |left, right| {
            criterion.should_follow(left, right)
        });
        self.comparisons = comparisons;
        self.sorted_by_name = criterion == SortCriterion::Name;

        debug!(%criterion, len, comparisons, "sorted records");
        SortOutcome::Sorted {
            criterion,
            comparisons,
        }
    }

    /// Binary search by exact name.
    ///
    /// Only legal right after [`sort_by`](Self::sort_by) with
    /// [`SortCriterion::Name`]; otherwise fails with
    /// [`InventoryError::PreconditionFailed`] without searching.
    pub fn search_by_name(&self, target: &str) -> InventoryResult<(usize, &Record)> {
        if !self.sorted_by_name {
            return Err(InventoryError::precondition(
                "binary search requires the backpack to be sorted by name",
            ));
        }

        // Inclusive bounds, so duplicate names resolve to the same slot the
        // classic midpoint walk lands on.
        if let Some(last) = self.records.len().checked_sub(1) {
            let mut low = 0usize;
            let mut high = last;
            while low <= high {
                let mid = low + (high - low) / 2;
                let record = &self.records[mid];
                match record.name().cmp(target) {
                    core::cmp::Ordering::Equal => return Ok((mid, record)),
                    core::cmp::Ordering::Less => low = mid + 1,
                    core::cmp::Ordering::Greater => match mid.checked_sub(1) {
                        Some(next) => high = next,
                        None => break,
                    },
                }
            }
        }

        Err(InventoryError::not_found(target))
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    fn invalidate_order(&mut self) {
        self.sorted_by_name = false;
        self.comparisons = 0;
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Stable insertion sort. Returns the number of `should_follow` probes.
///
/// Each element walks left while its left neighbour should follow it; the probe
/// that stops the walk is counted too.
fn insertion_sort<T>(items: &mut [T], mut should_follow: impl FnMut(&T, &T) -> bool) -> u64 {
    let mut comparisons = 0u64;
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if should_follow(&items[j - 1], &items[j]) {
                items.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }
    comparisons
}
