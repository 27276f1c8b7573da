//! Generic rendered-document model.
//!
//! A [`Document`] is one object from a template render: a mapping from string
//! keys to arbitrarily nested JSON values. Validators only ever read four
//! derived fields from it (see [`Identity`]); every lookup degrades to the
//! empty string instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dot-separated path of the `kind` field.
pub const KIND_PATH: &str = "kind";
/// Dot-separated path of the `apiVersion` field.
pub const API_VERSION_PATH: &str = "apiVersion";
/// Dot-separated path of the `metadata.name` field.
pub const NAME_PATH: &str = "metadata.name";
/// Dot-separated path of the `metadata.namespace` field.
pub const NAMESPACE_PATH: &str = "metadata.namespace";

/// Errors raised while building documents from raw values.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
    #[error("expected a sequence of documents, found {found}")]
    NotASequence { found: &'static str },
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One rendered document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

/// The four fields a containment check compares, borrowed from a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<'a> {
    pub kind: &'a str,
    pub api_version: &'a str,
    pub name: &'a str,
    pub namespace: &'a str,
}

impl Document {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap an arbitrary JSON value. Only objects are valid documents.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DocumentError::NotAMapping {
                found: value_kind(&other),
            }),
        }
    }

    /// Walk a dot-separated path through nested mappings.
    ///
    /// Returns `None` when a segment is missing or when a non-mapping value
    /// sits in the middle of the path.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.0.get(first)?, |current, segment| {
            current.as_object()?.get(segment)
        })
    }

    /// String value at `path`, or `""` if absent or not a string.
    pub fn field(&self, path: &str) -> &str {
        self.lookup(path).and_then(Value::as_str).unwrap_or("")
    }

    pub fn kind(&self) -> &str {
        self.field(KIND_PATH)
    }

    pub fn api_version(&self) -> &str {
        self.field(API_VERSION_PATH)
    }

    pub fn name(&self) -> &str {
        self.field(NAME_PATH)
    }

    pub fn namespace(&self) -> &str {
        self.field(NAMESPACE_PATH)
    }

    pub fn identity(&self) -> Identity<'_> {
        Identity {
            kind: self.kind(),
            api_version: self.api_version(),
            name: self.name(),
            namespace: self.namespace(),
        }
    }
}

/// Parse a JSON array of objects into an ordered document set.
pub fn documents_from_json(text: &str) -> Result<Vec<Document>, DocumentError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items.into_iter().map(Document::from_value).collect(),
        other => Err(DocumentError::NotASequence {
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
