//! Text rendering for the backpack shell.

use std::io::{self, Write};

use lootpack_inventory::{InventoryView, Record};

const RULE: &str = "------------------------------------------------------------------";
const MENU_RULE: &str = "----------------------------------------------------------------";
const MENU_BORDER: &str = "================================================================";

/// ANSI: clear screen and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn sort_status(sorted_by_name: bool) -> &'static str {
    if sorted_by_name { "sorted by name" } else { "unsorted" }
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "**************************************************")?;
    writeln!(out, "*       Lootpack - Island Escape Backpack        *")?;
    writeln!(out, "**************************************************")
}

pub fn main_menu(out: &mut impl Write, sorted_by_name: bool) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_BORDER}")?;
    writeln!(out, "LOOT BACKPACK (Status: {})", sort_status(sorted_by_name))?;
    writeln!(out, "{MENU_RULE}")?;
    writeln!(out, "1. Add an item")?;
    writeln!(out, "2. Remove an item")?;
    writeln!(out, "3. List all items")?;
    writeln!(out, "4. Sort items by criterion (Name/Category/Priority)")?;
    writeln!(out, "5. Binary search by name")?;
    writeln!(out, "0. Exit")?;
    write!(out, "Choice: ")
}

pub fn sort_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Sort Criterion ---")?;
    writeln!(out, "1. Item name (enables binary search)")?;
    writeln!(out, "2. Item category")?;
    writeln!(out, "3. Priority (1 to 5)")?;
    write!(out, "Choice: ")
}

/// Status block plus the item table.
pub fn listing(out: &mut impl Write, view: &InventoryView<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Backpack Contents ---")?;
    writeln!(out, "Sort status: {}", sort_status(view.sorted_by_name))?;
    writeln!(out, "Comparisons in last sort: {}", view.comparison_count)?;
    writeln!(out, "{RULE}")?;

    if view.records.is_empty() {
        writeln!(out, "The backpack is empty.")?;
        return writeln!(out, "{RULE}");
    }

    writeln!(
        out,
        "Pos | {:<25} | {:<15} | Qty | Priority",
        "Name", "Category"
    )?;
    writeln!(out, "{RULE}")?;
    for (index, record) in view.records.iter().enumerate() {
        row(out, index, record)?;
    }
    writeln!(out, "{RULE}")
}

fn row(out: &mut impl Write, index: usize, record: &Record) -> io::Result<()> {
    writeln!(
        out,
        "{:02}  | {:<25} | {:<15} | {:<3} | {}",
        index + 1,
        record.name(),
        record.category(),
        record.quantity(),
        record.priority()
    )
}

/// Full details of a record found by search, with its 1-based position.
pub fn found(out: &mut impl Write, index: usize, record: &Record) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[ITEM FOUND - POSITION {}]", index + 1)?;
    writeln!(out, "Name: {}", record.name())?;
    writeln!(out, "Category: {}", record.category())?;
    writeln!(out, "Quantity: {}", record.quantity())?;
    writeln!(out, "Priority: {}", record.priority())
}
