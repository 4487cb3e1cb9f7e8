use std::io::Cursor;
use std::num::NonZeroUsize;

use lootpack_inventory::{Inventory, Record};
use lootpack_shell::{Session, ShellConfig};

struct Outcome {
    output: String,
    inventory: Inventory,
}

fn run(config: ShellConfig, lines: &[&str]) -> Outcome {
    let mut script = lines.join("\n");
    script.push('\n');
    let mut session = Session::new(Cursor::new(script.into_bytes()), Vec::new(), config);
    session.run().expect("scripted session failed");
    let inventory = session.inventory().clone();
    let output = String::from_utf8(session.into_output()).expect("output is utf-8");
    Outcome { output, inventory }
}

fn quiet() -> ShellConfig {
    ShellConfig::default().with_clear_screen(false)
}

fn names(inventory: &Inventory) -> Vec<&str> {
    inventory.iter().map(Record::name).collect()
}

const ADD_LOOT: [&str; 15] = [
    "1", "Medkit", "Cura", "2", "1", //
    "1", "Rifle", "Arma", "1", "3", //
    "1", "Bandage", "Cura", "5", "2",
];

#[test]
fn loot_scenario_end_to_end() {
    let mut script: Vec<&str> = ADD_LOOT.to_vec();
    script.extend(["4", "1", "5", "Rifle", "2", "Medkit", "0"]);

    let Outcome { output, inventory } = run(quiet(), &script);

    assert!(output.contains("[OK] 'Bandage' added."));
    assert!(output.contains("[OK] Backpack sorted by Name (3 comparisons)."));
    assert!(output.contains("LOOT BACKPACK (Status: sorted by name)"));
    assert!(output.contains("[ITEM FOUND - POSITION 3]"));
    assert!(output.contains("Name: Rifle\nCategory: Arma\nQuantity: 1\nPriority: 3\n"));
    assert!(output.contains("[OK] Item 'Medkit' removed."));
    assert!(output.trim_end().ends_with("Mission complete! Closing the backpack."));

    assert_eq!(names(&inventory), ["Bandage", "Rifle"]);
    assert!(!inventory.is_sorted_by_name());
    assert_eq!(inventory.comparison_count(), 0);
}

#[test]
fn clear_screen_and_banner_are_printed_first() {
    let output = run(ShellConfig::default(), &["0"]).output;
    assert!(output.starts_with("\x1b[2J\x1b[H"));
    assert!(output.contains("Lootpack - Island Escape Backpack"));

    let output = run(quiet(), &["0"]).output;
    assert!(output.starts_with("***"));
}

#[test]
fn search_is_refused_until_sorted_by_name() {
    let mut script: Vec<&str> = ADD_LOOT.to_vec();
    // Priority sort, then search: refused without prompting for a name.
    script.extend(["4", "3", "5", "0"]);

    let output = run(quiet(), &script).output;
    assert!(output.contains("[OK] Backpack sorted by Priority"));
    assert!(output.contains("[CRITICAL] Binary search requires the backpack to be sorted by NAME."));
    assert!(!output.contains("Which item are you looking for?"));
}

#[test]
fn search_and_remove_on_empty_backpack() {
    let output = run(quiet(), &["5", "2", "0"]).output;
    assert!(output.contains("\nThe backpack is empty.\n"));
    assert!(output.contains("The backpack is empty. Nothing to remove."));
    assert!(!output.contains("--- Remove Item ---"));
}

#[test]
fn search_for_missing_name() {
    let mut script: Vec<&str> = ADD_LOOT.to_vec();
    script.extend(["4", "1", "5", "Grenade", "0"]);

    let output = run(quiet(), &script).output;
    assert!(output.contains("[NOT FOUND] Item 'Grenade' is not in the backpack."));
}

#[test]
fn removing_missing_name_keeps_sort_state() {
    let mut script: Vec<&str> = ADD_LOOT.to_vec();
    script.extend(["4", "1", "2", "Grenade", "0"]);

    let Outcome { output, inventory } = run(quiet(), &script);
    assert!(output.contains("[ALERT] Item 'Grenade' not found."));
    assert!(inventory.is_sorted_by_name());
    assert_eq!(inventory.comparison_count(), 3);
}

#[test]
fn full_backpack_refuses_without_prompting() {
    let config = quiet().with_capacity(NonZeroUsize::new(1).unwrap());
    let script = ["1", "Rope", "Util", "1", "5", "1", "0"];

    let Outcome { output, inventory } = run(config, &script);
    assert!(output.contains("[ALERT] Backpack is full! (1/1 slots)"));
    assert_eq!(output.matches("--- Add Item ---").count(), 1);
    assert_eq!(inventory.len(), 1);
}

#[test]
fn sorting_a_single_item_is_skipped() {
    let script = ["1", "Rope", "Util", "1", "5", "4", "1", "0"];

    let Outcome { output, inventory } = run(quiet(), &script);
    assert!(output.contains("[ALERT] Only 1 item(s). No sort needed."));
    assert!(!inventory.is_sorted_by_name());
}

#[test]
fn invalid_menu_and_sort_choices_return_to_menu() {
    let script = ["abc", "9", "4", "x", "4", "7", "3", "0"];

    let output = run(quiet(), &script).output;
    assert!(output.contains("[ERROR] Invalid option. Enter a number."));
    assert!(output.contains("Unknown option. Try again."));
    assert!(output.contains("[ERROR] Invalid option.\n"));
    assert!(output.contains("[ALERT] Unknown criterion."));
    assert!(output.contains("The backpack is empty."));
}

#[test]
fn rejected_fields_do_not_end_the_session() {
    let script = [
        "1", "Medkit", "Cura", "0", "1", // quantity 0
        "1", "Medkit", "First Aid", "1", "1", // category with a space
        "1", "Medkit", "Cura", "1", "1", // valid
        "0",
    ];

    let Outcome { output, inventory } = run(quiet(), &script);
    assert!(output.contains("[ERROR] invalid quantity: must be greater than zero. Item not added."));
    assert!(output.contains("[ERROR] invalid category: must be a single word. Item not added."));
    assert_eq!(names(&inventory), ["Medkit"]);
}

#[test]
fn listing_shows_table_rows() {
    let mut script: Vec<&str> = ADD_LOOT.to_vec();
    script.extend(["3", "0"]);

    let output = run(quiet(), &script).output;
    assert!(output.contains("Pos | Name                      | Category        | Qty | Priority"));
    assert!(output.contains("03  | Bandage                   | Cura            | 5   | 2"));
    assert!(output.contains("Sort status: unsorted"));
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: any input script ends cleanly and never overfills the backpack.
        #[test]
        fn arbitrary_scripts_end_cleanly(lines in prop::collection::vec("[0-9A-Za-z ]{0,8}", 0..60)) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let config = quiet().with_capacity(NonZeroUsize::new(3).unwrap());

            let Outcome { output, inventory } = run(config, &refs);

            prop_assert!(inventory.len() <= 3);
            prop_assert!(output.contains("Mission complete! Closing the backpack."));
        }
    }
}
