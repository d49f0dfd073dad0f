use std::fmt;
use std::str::FromStr;

use blockplus_records::RecordKind;

use crate::session::Resource;
use crate::AdminError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    List,
    Save,
    Delete,
    Toggle,
    Duplicate,
}

impl Verb {
    fn as_str(&self) -> &'static str {
        match self {
            Verb::List => "get",
            Verb::Save => "save",
            Verb::Delete => "delete",
            Verb::Toggle => "toggle",
            Verb::Duplicate => "duplicate",
        }
    }
}

/// An admin action, addressed by name (`save_pattern`, `get_snippets`,
/// `toggle_block_rule`, `save_settings`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Record { verb: Verb, kind: RecordKind },
    GetSettings,
    SaveSettings,
}

impl Action {
    pub fn resource(&self) -> Resource {
        match self {
            Action::Record { kind, .. } => Resource::Record(*kind),
            Action::GetSettings | Action::SaveSettings => Resource::Settings,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Record {
                verb: Verb::List,
                kind,
            } => write!(f, "get_{}s", kind.as_str()),
            Action::Record { verb, kind } => write!(f, "{}_{}", verb.as_str(), kind.as_str()),
            Action::GetSettings => f.write_str("get_settings"),
            Action::SaveSettings => f.write_str("save_settings"),
        }
    }
}

impl FromStr for Action {
    type Err = AdminError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let unknown = || AdminError::UnknownAction(name.to_string());
        let bare = name.strip_prefix("blockplus_").unwrap_or(name);

        match bare {
            "get_settings" => return Ok(Action::GetSettings),
            "save_settings" => return Ok(Action::SaveSettings),
            _ => {}
        }

        let (verb, target) = bare.split_once('_').ok_or_else(unknown)?;
        let verb = match verb {
            "get" | "list" => Verb::List,
            "save" => Verb::Save,
            "delete" => Verb::Delete,
            "toggle" => Verb::Toggle,
            "duplicate" => Verb::Duplicate,
            _ => return Err(unknown()),
        };
        let kind: RecordKind = target.parse().map_err(|_| unknown())?;
        if verb == Verb::Duplicate && kind != RecordKind::Pattern {
            return Err(unknown());
        }
        Ok(Action::Record { verb, kind })
    }
}
