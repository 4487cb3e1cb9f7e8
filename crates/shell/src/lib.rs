//! Interactive backpack shell.
//!
//! Menu-driven session over any `BufRead`/`Write` pair: prompts for input,
//! calls into [`lootpack_inventory::Inventory`] and renders the results.

pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use config::ShellConfig;
pub use error::{ShellError, ShellResult};
pub use session::Session;
