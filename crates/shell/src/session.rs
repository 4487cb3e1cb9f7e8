//! Menu loop driving an [`Inventory`].

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use lootpack_core::{Field, InventoryError};
use lootpack_inventory::{Inventory, Record, SortCriterion, SortOutcome};

use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::render;

/// Whether the loop keeps going after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Answer to a numeric prompt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Reply {
    Number(i64),
    NotANumber,
    Closed,
}

/// Main menu entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    List,
    Sort,
    Search,
    Exit,
}

impl MenuChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Remove),
            3 => Some(MenuChoice::List),
            4 => Some(MenuChoice::Sort),
            5 => Some(MenuChoice::Search),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn criterion_from_number(n: u32) -> Option<SortCriterion> {
    match n {
        1 => Some(SortCriterion::Name),
        2 => Some(SortCriterion::Category),
        3 => Some(SortCriterion::Priority),
        _ => None,
    }
}

fn capitalized(criterion: SortCriterion) -> &'static str {
    match criterion {
        SortCriterion::Name => "Name",
        SortCriterion::Category => "Category",
        SortCriterion::Priority => "Priority",
    }
}

/// One interactive session: owns the inventory for its whole lifetime.
pub struct Session<R, W> {
    input: R,
    out: W,
    inventory: Inventory,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, config: ShellConfig) -> Self {
        Self {
            input,
            out,
            inventory: Inventory::with_capacity(config.capacity),
            config,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Give back the output sink (handy for inspecting scripted sessions).
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        if self.config.clear_screen {
            write!(self.out, "{}", render::CLEAR_SCREEN)?;
        }
        render::banner(&mut self.out)?;
        info!(capacity = self.inventory.capacity(), "session started");

        loop {
            render::main_menu(&mut self.out, self.inventory.is_sorted_by_name())?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let flow = match line.trim().parse::<u32>() {
                Err(_) => {
                    writeln!(self.out, "\n[ERROR] Invalid option. Enter a number.")?;
                    Flow::Continue
                }
                Ok(n) => match MenuChoice::from_number(n) {
                    Some(choice) => self.dispatch(choice)?,
                    None => {
                        writeln!(self.out, "\nUnknown option. Try again.")?;
                        Flow::Continue
                    }
                },
            };
            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.out, "\nMission complete! Closing the backpack.")?;
        self.out.flush()?;
        info!(items = self.inventory.len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ShellResult<Flow> {
        match choice {
            MenuChoice::Add => self.add_item(),
            MenuChoice::Remove => self.remove_item(),
            MenuChoice::List => self.list_items().map(|()| Flow::Continue),
            MenuChoice::Sort => self.sort_items(),
            MenuChoice::Search => self.search_item(),
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn add_item(&mut self) -> ShellResult<Flow> {
        if self.inventory.is_full() {
            let capacity = self.inventory.capacity();
            writeln!(
                self.out,
                "\n[ALERT] Backpack is full! ({}/{} slots)",
                self.inventory.len(),
                capacity
            )?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\n--- Add Item ---")?;
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt("Category (e.g. Arma, Cura): ")? else {
            return Ok(Flow::Quit);
        };
        let quantity = match self.prompt_number(Field::Quantity, "Quantity: ")? {
            Reply::Number(n) => n,
            Reply::NotANumber => return Ok(Flow::Continue),
            Reply::Closed => return Ok(Flow::Quit),
        };
        let priority = match self.prompt_number(Field::Priority, "Priority (1 = High, 5 = Low): ")? {
            Reply::Number(n) => n,
            Reply::NotANumber => return Ok(Flow::Continue),
            Reply::Closed => return Ok(Flow::Quit),
        };

        let inserted = Record::new(name.as_str(), category, quantity, priority)
            .and_then(|record| self.inventory.insert(record));
        match inserted {
            Ok(()) => {
                writeln!(self.out, "\n[OK] '{name}' added.")?;
                self.list_items()?;
            }
            Err(err) => {
                warn!(error = %err, "item rejected");
                writeln!(self.out, "[ERROR] {err}. Item not added.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn remove_item(&mut self) -> ShellResult<Flow> {
        if self.inventory.is_empty() {
            writeln!(self.out, "\nThe backpack is empty. Nothing to remove.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\n--- Remove Item ---")?;
        let Some(name) = self.prompt("Exact NAME of the item to remove: ")? else {
            return Ok(Flow::Quit);
        };

        match self.inventory.remove(&name) {
            Ok(_) => {
                writeln!(self.out, "\n[OK] Item '{name}' removed.")?;
                self.list_items()?;
            }
            Err(err @ InventoryError::NotFound(_)) => {
                warn!(error = %err, "remove missed");
                writeln!(self.out, "\n[ALERT] Item '{name}' not found.")?;
            }
            Err(err) => {
                warn!(error = %err, "remove rejected");
                writeln!(self.out, "\n[ALERT] {err}.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list_items(&mut self) -> ShellResult<()> {
        let view = self.inventory.list();
        if let Ok(snapshot) = serde_json::to_string(&view) {
            debug!(%snapshot, "listing backpack");
        }
        render::listing(&mut self.out, &view)?;
        Ok(())
    }

    fn sort_items(&mut self) -> ShellResult<Flow> {
        render::sort_menu(&mut self.out)?;
        self.out.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(Flow::Quit);
        };

        let Ok(n) = line.trim().parse::<u32>() else {
            writeln!(self.out, "[ERROR] Invalid option.")?;
            return Ok(Flow::Continue);
        };
        let Some(criterion) = criterion_from_number(n) else {
            writeln!(self.out, "[ALERT] Unknown criterion.")?;
            return Ok(Flow::Continue);
        };

        match self.inventory.sort_by(criterion) {
            SortOutcome::Sorted {
                criterion,
                comparisons,
            } => {
                writeln!(
                    self.out,
                    "\n[OK] Backpack sorted by {} ({comparisons} comparisons).",
                    capitalized(criterion)
                )?;
                self.list_items()?;
            }
            SortOutcome::Skipped { len } => {
                writeln!(self.out, "\n[ALERT] Only {len} item(s). No sort needed.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn search_item(&mut self) -> ShellResult<Flow> {
        if self.inventory.is_empty() {
            writeln!(self.out, "\nThe backpack is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\n--- Binary Search by Name ---")?;
        if !self.inventory.is_sorted_by_name() {
            self.precondition_failed()?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt("Which item are you looking for? ")? else {
            return Ok(Flow::Quit);
        };

        match self.inventory.search_by_name(&name) {
            Ok((index, record)) => render::found(&mut self.out, index, record)?,
            Err(InventoryError::PreconditionFailed(_)) => self.precondition_failed()?,
            Err(err) => {
                debug!(error = %err, "search missed");
                writeln!(
                    self.out,
                    "\n[NOT FOUND] Item '{name}' is not in the backpack."
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn precondition_failed(&mut self) -> ShellResult<()> {
        warn!("binary search refused: backpack not sorted by name");
        writeln!(
            self.out,
            "[CRITICAL] Binary search requires the backpack to be sorted by NAME."
        )?;
        writeln!(self.out, "Use option 4 to sort it first.")?;
        Ok(())
    }

    /// Write `label`, then read one line. `None` means input ended.
    fn prompt(&mut self, label: &str) -> ShellResult<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Prompt for an integer; a non-numeric answer is reported here.
    fn prompt_number(&mut self, field: Field, label: &str) -> ShellResult<Reply> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(Reply::Closed);
        };
        match raw.parse::<i64>() {
            Ok(n) => Ok(Reply::Number(n)),
            Err(_) => {
                warn!(%field, input = %raw, "not a number");
                writeln!(self.out, "[ERROR] {field} must be a number. Item not added.")?;
                Ok(Reply::NotANumber)
            }
        }
    }

    fn read_line(&mut self) -> ShellResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
