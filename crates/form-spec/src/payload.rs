use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::spec::field::FormField;
use crate::validate::ValidatedSubmission;

/// Body of the outbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundPayload {
    pub to: String,
    #[serde(rename = "formData")]
    pub form_data: BTreeMap<String, String>,
}

impl OutboundPayload {
    pub fn from_validated(submission: &ValidatedSubmission) -> Self {
        Self {
            to: submission.recipient_email().to_string(),
            form_data: flatten_fields(submission.fields()),
        }
    }
}

/// Maps each label to its value. A later field with the same label
/// overwrites the earlier one.
pub fn flatten_fields(fields: &[FormField]) -> BTreeMap<String, String> {
    fields.iter().fold(BTreeMap::new(), |mut acc, field| {
        acc.insert(field.label().to_string(), field.value().to_string());
        acc
    })
}

/// Labels that occur more than once, in first-seen order.
pub fn duplicate_labels(fields: &[FormField]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    for field in fields {
        let label = field.label();
        if !seen.insert(label) && !duplicates.iter().any(|dup: &String| dup == label) {
            duplicates.push(label.to_string());
        }
    }
    duplicates
}
