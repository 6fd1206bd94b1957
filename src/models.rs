//! Data models for the notepad.
//!
//! Stored records, the tagged lookup result returned by the store, request
//! bodies for the JSON endpoints, and the JSON response envelope.

use serde::{Deserialize, Serialize};

// ============================================================================
// Stored Note
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Plain,
    Md,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Md => "md",
        }
    }
}

/// Metadata attached to every stored note. Absent fields are omitted from the
/// stored JSON so that "never set" stays distinguishable from `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NoteMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<bool>,
    #[serde(default, rename = "updateAt", skip_serializing_if = "Option::is_none")]
    pub update_at: Option<i64>,
}

impl NoteMeta {
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    pub fn is_shared(&self) -> bool {
        self.share.unwrap_or(false)
    }

    pub fn is_protected(&self) -> bool {
        self.pw.is_some()
    }
}

/// A note as persisted in the `notes` tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Note {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub metadata: NoteMeta,
}

/// Result of reading a path from the store.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteLookup {
    /// The path has never been written.
    NotFound,
    Unprotected(Note),
    Protected(Note),
}

impl NoteLookup {
    pub fn from_note(note: Option<Note>) -> Self {
        match note {
            None => NoteLookup::NotFound,
            Some(note) if note.metadata.is_protected() => NoteLookup::Protected(note),
            Some(note) => NoteLookup::Unprotected(note),
        }
    }

    pub fn exists(&self) -> bool {
        !matches!(self, NoteLookup::NotFound)
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, NoteLookup::Protected(_))
    }

    /// The stored note, or an empty one when the path was never written.
    pub fn into_note(self) -> Note {
        match self {
            NoteLookup::NotFound => Note::default(),
            NoteLookup::Unprotected(note) | NoteLookup::Protected(note) => note,
        }
    }
}

// ============================================================================
// Request Bodies
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AppAuthRequest {
    #[serde(default)]
    pub passwd: String,
    #[serde(default, rename = "returnUrl")]
    pub return_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordRequest {
    #[serde(default)]
    pub passwd: String,
}

/// Partial settings update. A missing field leaves the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingRequest {
    pub mode: Option<Mode>,
    pub share: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub t: String,
}

// ============================================================================
// JSON Envelope
// ============================================================================

/// `{err, data?, msg?}` as returned by every JSON endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub err: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            err: 0,
            data: None,
            msg: None,
        }
    }

    pub fn with_data(data: serde_json::Value) -> Self {
        Self {
            err: 0,
            data: Some(data),
            msg: None,
        }
    }
}
