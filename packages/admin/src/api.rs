use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use blockplus_option_store::OptionStore;
use blockplus_records::input::sanitize_key;
use blockplus_records::{
    BlockRule, Pattern, RawInput, Record, RecordKind, RecordStore, SettingsStore, Snippet,
    Variation,
};

use crate::action::{Action, Verb};
use crate::session::Session;
use crate::AdminError;

/// An admin request as posted by the settings screen or editor panels.
///
/// Everything other than `action` and `nonce` is record or settings input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub action: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(flatten)]
    pub data: RawInput,
}

impl Request {
    pub fn new(action: impl Into<String>, nonce: impl Into<String>) -> Self {
        Request {
            action: action.into(),
            nonce: nonce.into(),
            data: RawInput::new(),
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.data.insert(field.to_string(), value.into());
        self
    }
}

/// The `{"success": ..., "data": ...}` envelope every action answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub data: Value,
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response {
            success: true,
            data,
        }
    }

    pub fn error(error: &AdminError) -> Self {
        Response {
            success: false,
            data: json!({ "message": error.to_string() }),
        }
    }
}

impl From<Result<Value, AdminError>> for Response {
    fn from(result: Result<Value, AdminError>) -> Self {
        match result {
            Ok(data) => Response::success(data),
            Err(error) => Response::error(&error),
        }
    }
}

/// Admin actions over an option store.
pub struct AdminApi<S> {
    store: S,
}

impl<S: OptionStore> AdminApi<S> {
    pub fn new(store: S) -> Self {
        AdminApi { store }
    }

    pub fn store(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Run a request and wrap the outcome in an envelope.
    pub fn handle(&mut self, session: &Session, request: &Request) -> Response {
        let result = request
            .action
            .parse::<Action>()
            .and_then(|action| self.dispatch(session, action, &request.nonce, &request.data));
        if let Err(error) = &result {
            log::debug!("Admin action {} failed: {}", request.action, error);
        }
        result.into()
    }

    /// Authorize, then run `action`.
    ///
    /// Authorization happens before the store is touched, so a rejected
    /// request reveals nothing about the records it names.
    pub fn dispatch(
        &mut self,
        session: &Session,
        action: Action,
        nonce: &str,
        data: &RawInput,
    ) -> Result<Value, AdminError> {
        session.authorize(action.resource(), nonce)?;

        match action {
            Action::GetSettings => Ok(json!({ "settings": self.store.load_settings()? })),
            Action::SaveSettings => {
                let settings = self.store.save_settings(data)?;
                Ok(json!({ "message": "Settings saved.", "settings": settings }))
            }
            Action::Record { verb, kind } => match kind {
                RecordKind::Pattern => self.record_action::<Pattern>(verb, data),
                RecordKind::BlockRule => self.record_action::<BlockRule>(verb, data),
                RecordKind::Snippet => self.record_action::<Snippet>(verb, data),
                RecordKind::Variation => self.record_action::<Variation>(verb, data),
            },
        }
    }

    fn record_action<R: Record>(&mut self, verb: Verb, data: &RawInput) -> Result<Value, AdminError> {
        let kind = R::KIND;
        let field = kind.as_str();
        let id = || {
            data.get("id")
                .and_then(Value::as_str)
                .map(sanitize_key)
                .unwrap_or_default()
        };

        match verb {
            Verb::List => {
                let records = self.store.list::<R>()?;
                Ok(json!({ format!("{}s", field): records }))
            }
            Verb::Save => {
                let record: R = self.store.save_input(data)?;
                let mut body = json!({
                    "message": format!("{} saved successfully.", kind.title()),
                    field: &record,
                });
                if let Some(placeholder) = record.embed_placeholder() {
                    body["placeholder"] = Value::String(placeholder);
                }
                Ok(body)
            }
            Verb::Delete => {
                if !self.store.delete::<R>(&id())? {
                    return Err(AdminError::NotFound { kind });
                }
                Ok(json!({ "message": format!("{} deleted.", kind.title()) }))
            }
            Verb::Toggle => match self.store.toggle::<R>(&id())? {
                Some(enabled) => Ok(json!({
                    "message": format!("{} toggled.", kind.title()),
                    "enabled": enabled,
                })),
                None => Err(AdminError::NotFound { kind }),
            },
            Verb::Duplicate => match self.store.duplicate_pattern(&id())? {
                Some(copy) => Ok(json!({
                    "message": "Pattern duplicated.",
                    "pattern": copy,
                })),
                None => Err(AdminError::NotFound { kind }),
            },
        }
    }
}
