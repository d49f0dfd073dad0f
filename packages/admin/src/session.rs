//! Who is calling, and the anti-forgery tokens issued to them.

use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use blockplus_records::RecordKind;

use crate::AdminError;

/// What an admin action operates on. Each resource has its own token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    Record(RecordKind),
    Settings,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Record(RecordKind::Pattern),
        Resource::Record(RecordKind::BlockRule),
        Resource::Record(RecordKind::Snippet),
        Resource::Record(RecordKind::Variation),
        Resource::Settings,
    ];

    /// The token name the editor scripts receive the token under.
    pub fn token_name(&self) -> String {
        match self {
            Resource::Record(kind) => format!("blockplus_{}_nonce", kind.as_str()),
            Resource::Settings => "blockplus_settings_nonce".to_string(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Record(kind) => write!(f, "{}", kind),
            Resource::Settings => f.write_str("settings"),
        }
    }
}

/// The caller of an admin action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub name: String,
    /// Holds the capability to manage blockplus records and settings.
    pub can_manage: bool,
}

impl Operator {
    pub fn administrator(name: impl Into<String>) -> Self {
        Operator {
            name: name.into(),
            can_manage: true,
        }
    }

    pub fn without_capability(name: impl Into<String>) -> Self {
        Operator {
            name: name.into(),
            can_manage: false,
        }
    }
}

/// One operator's session: a fresh random token per resource.
#[derive(Debug, Clone)]
pub struct Session {
    operator: Operator,
    tokens: BTreeMap<Resource, String>,
}

impl Session {
    pub fn start(operator: Operator) -> Session {
        let tokens = Resource::ALL
            .iter()
            .map(|resource| (*resource, Uuid::new_v4().simple().to_string()))
            .collect();
        log::debug!("Started admin session for {}", operator.name);
        Session { operator, tokens }
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn token(&self, resource: Resource) -> &str {
        self.tokens.get(&resource).map_or("", String::as_str)
    }

    /// Every token, keyed by [`Resource::token_name`].
    pub fn token_map(&self) -> BTreeMap<String, String> {
        self.tokens
            .iter()
            .map(|(resource, token)| (resource.token_name(), token.clone()))
            .collect()
    }

    /// Check the capability and the token for `resource`.
    ///
    /// Both failures give the same [`AdminError::PermissionDenied`].
    pub fn authorize(&self, resource: Resource, token: &str) -> Result<(), AdminError> {
        let expected = self.token(resource);
        if !self.operator.can_manage || expected.is_empty() || token != expected {
            log::warn!(
                "Rejected {} request from {}",
                resource,
                self.operator.name
            );
            return Err(AdminError::PermissionDenied);
        }
        Ok(())
    }
}
