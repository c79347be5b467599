use serde::{Deserialize, Serialize};

use crate::spec::field::FormField;

/// Aggregate handed to validation on each submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub recipient_email: String,
    pub fields: Vec<FormField>,
}

impl Submission {
    pub fn new(recipient_email: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            fields,
        }
    }
}

/// Working copy of a form as exchanged with a rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default)]
    pub recipient_email: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl FormDocument {
    pub fn to_submission(&self) -> Submission {
        Submission::new(self.recipient_email.clone(), self.fields.clone())
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
