use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Literal segment that separates a field index from its attribute path.
pub const FIELDS_SEGMENT: &str = "fields";

/// Slot name of the recipient address.
pub const EMAIL_SLOT: &str = "email";

/// One segment of an error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{index}"),
            PathSegment::Key(key) => f.write_str(key),
        }
    }
}

/// Location of a validation failure.
///
/// Field paths read `(index, "fields", attribute...)`; anything else is a
/// top-level slot such as the recipient email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorPath(Vec<PathSegment>);

impl ErrorPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    pub fn email() -> Self {
        Self(vec![PathSegment::Key(EMAIL_SLOT.into())])
    }

    pub fn field(index: usize, attribute: &str) -> Self {
        let mut segments = vec![
            PathSegment::Index(index),
            PathSegment::Key(FIELDS_SEGMENT.into()),
        ];
        segments.extend(
            attribute
                .split('.')
                .filter(|part| !part.is_empty())
                .map(|part| PathSegment::Key(part.to_string())),
        );
        Self(segments)
    }

    /// Splits a field path into its index and attribute path.
    pub fn as_field(&self) -> Option<(usize, String)> {
        match self.0.as_slice() {
            [PathSegment::Index(index), PathSegment::Key(fields), rest @ ..]
                if fields == FIELDS_SEGMENT && !rest.is_empty() =>
            {
                let attribute = rest
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(".");
                Some((*index, attribute))
            }
            _ => None,
        }
    }

    /// Key used by a rendering surface to attach a message to an input:
    /// `"{index}.{attribute}"` for field paths, the joined path otherwise.
    pub fn slot_key(&self) -> String {
        match self.as_field() {
            Some((index, attribute)) => format!("{index}.{attribute}"),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&joined)
    }
}

/// Validation error metadata reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: ErrorPath,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ValidationError {
    pub fn new(path: ErrorPath, message: impl Into<String>, code: &str) -> Self {
        Self {
            path,
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

/// Every violation collected from one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Error)]
#[error("form has {} validation error(s)", .errors.len())]
pub struct ErrorSet {
    pub errors: Vec<ValidationError>,
}

impl ErrorSet {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn decode(&self) -> DecodedErrors {
        decode_errors(&self.errors)
    }
}

/// Errors split into the buckets a rendering surface attaches to inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodedErrors {
    /// Single top-level message (email slot, or a submission failure).
    #[serde(default)]
    pub message: Option<String>,
    /// `"{index}.{attribute}"` to message.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl DecodedErrors {
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.fields.is_empty()
    }

    pub fn field(&self, index: usize, attribute: &str) -> Option<&str> {
        self.fields
            .get(&ErrorPath::field(index, attribute).slot_key())
            .map(String::as_str)
    }
}

/// Turns a flat error list into top-level and per-field buckets. The first
/// message for a slot wins.
pub fn decode_errors(errors: &[ValidationError]) -> DecodedErrors {
    let mut decoded = DecodedErrors::default();
    for error in errors {
        match error.path.as_field() {
            Some(_) => {
                decoded
                    .fields
                    .entry(error.path.slot_key())
                    .or_insert_with(|| error.message.clone());
            }
            None => {
                if decoded.message.is_none() {
                    decoded.message = Some(error.message.clone());
                }
            }
        }
    }
    decoded
}
