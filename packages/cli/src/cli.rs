use std::path::PathBuf;

use clap::{Parser, Subcommand};

use blockplus_records::RecordKind;

/// blockplus - manage patterns, block rules, snippets and variations
#[derive(Parser, Debug)]
#[command(name = "blockplus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the option store
    #[arg(long, global = true, env = "BLOCKPLUS_STORE", default_value = ".blockplus")]
    pub store: PathBuf,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every record of a kind
    List { kind: RecordKind },
    /// Print one record
    Get { kind: RecordKind, id: String },
    /// Create or update a record from a JSON object of form fields
    Save {
        kind: RecordKind,
        /// Fields as JSON; read from stdin when omitted
        #[arg(long)]
        json: Option<String>,
    },
    /// Delete a record
    Delete { kind: RecordKind, id: String },
    /// Flip a record's enabled flag
    Toggle { kind: RecordKind, id: String },
    /// Copy a pattern under a new id and slug
    Duplicate { id: String },
    /// Print the block types used in a document
    Scan {
        /// Document to read; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Render a document as the frontend would
    Render {
        /// Document to read; stdin when omitted
        file: Option<PathBuf>,
        /// Print only the rendered body
        #[arg(long)]
        body_only: bool,
    },
    /// Render one pattern by id or slug
    Pattern { identifier: String },
    /// Print the editor asset payload
    EditorAssets,
    /// Print the frontend cleanup plan
    CleanupPlan,
    /// Show or change global settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
    /// Delete every option blockplus owns
    Uninstall {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SettingsCommand {
    /// Print the current settings
    Show,
    /// Replace settings from a JSON object of form fields
    Set {
        /// Fields as JSON; read from stdin when omitted
        #[arg(long)]
        json: Option<String>,
    },
}
