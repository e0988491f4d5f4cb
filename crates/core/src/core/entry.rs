use crate::config::constants::{FIRST_KEY, LAST_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a navigation list entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum NavKey {
    /// Insert before everything
    First,
    /// Insert after everything
    Last,
    /// A repository resource, identified by its path
    Resource(String),
}

impl NavKey {
    pub fn resource(key: impl Into<String>) -> Self {
        Self::Resource(key.into())
    }

    /// Parse a key as submitted by a selection widget
    pub fn parse(raw: &str) -> Self {
        match raw {
            FIRST_KEY => Self::First,
            LAST_KEY => Self::Last,
            other => Self::Resource(other.to_string()),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Resource(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::First => FIRST_KEY,
            Self::Last => LAST_KEY,
            Self::Resource(key) => key,
        }
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NavKey> for String {
    fn from(key: NavKey) -> Self {
        match key {
            NavKey::Resource(key) => key,
            sentinel => sentinel.as_str().to_string(),
        }
    }
}

impl From<String> for NavKey {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for NavKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// A direct child of a folder, as listed by a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceChild {
    /// Repository path of the resource
    pub key: String,
    /// Plain resource name, the label fallback
    pub name: String,
    #[serde(default)]
    pub is_folder: bool,
    /// Raw `NavPos` property value
    #[serde(default)]
    pub nav_position: Option<String>,
    /// Raw `NavText` property value
    #[serde(default)]
    pub nav_text: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl ResourceChild {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            is_folder: false,
            nav_position: None,
            nav_text: None,
            is_deleted: false,
        }
    }

    pub fn folder(mut self, is_folder: bool) -> Self {
        self.is_folder = is_folder;
        self
    }

    pub fn position(mut self, raw: impl Into<String>) -> Self {
        self.nav_position = Some(raw.into());
        self
    }

    pub fn text(mut self, raw: impl Into<String>) -> Self {
        self.nav_text = Some(raw.into());
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Navigation label: `NavText` unless blank, otherwise the plain name
    pub fn display_name(&self) -> &str {
        match self.nav_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => &self.name,
        }
    }
}

/// One row of a candidate list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavEntry {
    pub key: NavKey,
    pub display_name: String,
    pub position: f64,
}

impl NavEntry {
    pub fn new(key: NavKey, display_name: impl Into<String>, position: f64) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            position,
        }
    }
}
