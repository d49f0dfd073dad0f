//! The `blockplus` command line tool.
//!
//! Operates on a [`JsonFileOptionStore`](blockplus_option_store::JsonFileOptionStore)
//! directory: record management, settings, and offline rendering of
//! documents through the same pipeline the frontend uses.

mod cli;
mod commands;
mod error;

pub use cli::{Cli, Command, SettingsCommand};
pub use commands::execute;
pub use error::Error;

use std::io;

use blockplus_option_store::JsonFileOptionStore;

/// Open the store named on the command line and run the command.
pub fn run(cli: Cli) -> Result<String, Error> {
    let mut store = JsonFileOptionStore::create(cli.store)?;
    log::debug!("Using option store at {}", store.root().display());
    execute(&mut store, cli.command, &mut io::stdin())
}
