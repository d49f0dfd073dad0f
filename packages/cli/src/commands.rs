use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};

use blockplus_blocks::scan_content;
use blockplus_option_store::OptionStore;
use blockplus_records::{
    BlockRule, Pattern, RawInput, Record, RecordKind, RecordStore, SettingsStore, Snippet,
    Variation,
};
use blockplus_render::Site;

use crate::cli::{Command, SettingsCommand};
use crate::Error;

/// Run `command` against `store`, returning what to print.
///
/// `stdin` supplies JSON input and documents when no inline value or file
/// is given.
pub fn execute<S: OptionStore + ?Sized>(
    store: &mut S,
    command: Command,
    stdin: &mut dyn Read,
) -> Result<String, Error> {
    match command {
        Command::List { kind } => for_kind(kind, ListRecords, store),
        Command::Get { kind, id } => for_kind(kind, GetRecord(&id), store),
        Command::Save { kind, json } => {
            let input = read_object(json, stdin)?;
            for_kind(kind, SaveRecord(&input), store)
        }
        Command::Delete { kind, id } => for_kind(kind, DeleteRecord(&id), store),
        Command::Toggle { kind, id } => for_kind(kind, ToggleRecord(&id), store),
        Command::Duplicate { id } => match store.duplicate_pattern(&id)? {
            Some(copy) => pretty(&copy),
            None => Err(Error::NotFound {
                kind: RecordKind::Pattern,
                id,
            }),
        },
        Command::Scan { file } => {
            let content = read_document(file.as_deref(), stdin)?;
            let present = scan_content(&content);
            Ok(present.iter().map(|name| format!("{}\n", name)).collect())
        }
        Command::Render { file, body_only } => {
            let content = read_document(file.as_deref(), stdin)?;
            let page = Site::load(store)?.render_page(&content);
            if body_only {
                return Ok(page.body);
            }
            pretty(&json!({
                "head": page.head,
                "body": page.body,
                "footer": page.footer,
                "block_types": page.block_types,
            }))
        }
        Command::Pattern { identifier } => Ok(Site::load(store)?.render_pattern(&identifier)),
        Command::EditorAssets => pretty(&Site::load(store)?.editor_assets()),
        Command::CleanupPlan => pretty(&Site::load(store)?.cleanup_plan()),
        Command::Settings { action } => match action {
            SettingsCommand::Show => pretty(&store.load_settings()?),
            SettingsCommand::Set { json } => {
                let input = read_object(json, stdin)?;
                pretty(&store.save_settings(&input)?)
            }
        },
        Command::Uninstall { yes } => {
            if !yes {
                return Err(Error::Unconfirmed);
            }
            store.uninstall()?;
            Ok("Removed all blockplus options.\n".to_string())
        }
    }
}

/// An operation generic over the record type, dispatched by [`for_kind`].
trait KindOp {
    fn run<R: Record, S: OptionStore + ?Sized>(self, store: &mut S) -> Result<String, Error>;
}

fn for_kind<O: KindOp, S: OptionStore + ?Sized>(
    kind: RecordKind,
    op: O,
    store: &mut S,
) -> Result<String, Error> {
    match kind {
        RecordKind::Pattern => op.run::<Pattern, S>(store),
        RecordKind::BlockRule => op.run::<BlockRule, S>(store),
        RecordKind::Snippet => op.run::<Snippet, S>(store),
        RecordKind::Variation => op.run::<Variation, S>(store),
    }
}

struct ListRecords;

impl KindOp for ListRecords {
    fn run<R: Record, S: OptionStore + ?Sized>(self, store: &mut S) -> Result<String, Error> {
        pretty(&store.list::<R>()?)
    }
}

struct GetRecord<'a>(&'a str);

impl KindOp for GetRecord<'_> {
    fn run<R: Record, S: OptionStore + ?Sized>(self, store: &mut S) -> Result<String, Error> {
        match store.get::<R>(self.0)? {
            Some(record) => pretty(&record),
            None => Err(not_found::<R>(self.0)),
        }
    }
}

struct SaveRecord<'a>(&'a RawInput);

impl KindOp for SaveRecord<'_> {
    fn run<R: Record, S: OptionStore + ?Sized>(self, store: &mut S) -> Result<String, Error> {
        let record: R = store.save_input(self.0)?;
        let mut out = pretty(&record)?;
        if let Some(placeholder) = record.embed_placeholder() {
            out.push_str(&placeholder);
            out.push('\n');
        }
        Ok(out)
    }
}

struct DeleteRecord<'a>(&'a str);

impl KindOp for DeleteRecord<'_> {
    fn run<R: Record, S: OptionStore + ?Sized>(self, store: &mut S) -> Result<String, Error> {
        if !store.delete::<R>(self.0)? {
            return Err(not_found::<R>(self.0));
        }
        Ok(format!("Deleted {} {}\n", R::KIND.label(), self.0))
    }
}

struct ToggleRecord<'a>(&'a str);

impl KindOp for ToggleRecord<'_> {
    fn run<R: Record, S: OptionStore + ?Sized>(self, store: &mut S) -> Result<String, Error> {
        match store.toggle::<R>(self.0)? {
            Some(true) => Ok(format!("Enabled {} {}\n", R::KIND.label(), self.0)),
            Some(false) => Ok(format!("Disabled {} {}\n", R::KIND.label(), self.0)),
            None => Err(not_found::<R>(self.0)),
        }
    }
}

fn not_found<R: Record>(id: &str) -> Error {
    Error::NotFound {
        kind: R::KIND,
        id: id.to_string(),
    }
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn read_object(inline: Option<String>, stdin: &mut dyn Read) -> Result<RawInput, Error> {
    let text = match inline {
        Some(text) => text,
        None => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            text
        }
    };
    match serde_json::from_str(&text)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject),
    }
}

fn read_document(file: Option<&Path>, stdin: &mut dyn Read) -> Result<String, Error> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
