use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spec::field::{FieldId, FieldKind, FieldType, FormField};

/// Field being composed before it joins the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldDraft {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub placeholder: String,
    /// Options accumulated so far; only meaningful for Select drafts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDraft {
    pub fn new(
        field_type: FieldType,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            field_type,
            label: label.into(),
            placeholder: placeholder.into(),
            options: Vec::new(),
        }
    }

    /// Whether the draft passes the add-field guard.
    pub fn is_ready(&self) -> bool {
        !self.label.is_empty()
            && !self.placeholder.is_empty()
            && (self.field_type != FieldType::Select || !self.options.is_empty())
    }

    fn kind(&self) -> FieldKind {
        match self.field_type {
            FieldType::Text => FieldKind::Text,
            FieldType::Number => FieldKind::Number,
            FieldType::Select => FieldKind::Select {
                options: self.options.clone(),
            },
        }
    }
}

/// Appends `candidate` when it is non-empty and not already present.
pub fn accumulate_option(options: &mut Vec<String>, candidate: &str) -> bool {
    if candidate.is_empty() || options.iter().any(|option| option == candidate) {
        return false;
    }
    options.push(candidate.to_string());
    true
}

/// A loaded collection carries the same id on more than one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate field id `{0}`")]
pub struct DuplicateFieldId(pub FieldId);

/// Fails on the first id that already appeared earlier in `fields`.
pub fn ensure_unique_ids(fields: &[FormField]) -> Result<(), DuplicateFieldId> {
    let mut seen = BTreeSet::new();
    for field in fields {
        if !seen.insert(field.id().as_str()) {
            return Err(DuplicateFieldId(field.id().clone()));
        }
    }
    Ok(())
}

/// Ordered field collection plus the draft in progress.
#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    fields: Vec<FormField>,
    draft: FieldDraft,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes over an existing collection. Ids must be unique, otherwise
    /// removals and value updates could only reach the first match.
    pub fn from_fields(fields: Vec<FormField>) -> Result<Self, DuplicateFieldId> {
        ensure_unique_ids(&fields)?;
        Ok(Self {
            fields,
            draft: FieldDraft::default(),
        })
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }

    pub fn field(&self, id: &FieldId) -> Option<&FormField> {
        self.fields.iter().find(|field| field.id() == id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn draft(&self) -> &FieldDraft {
        &self.draft
    }

    /// Changes the draft type; leaving Select drops the accumulated options.
    pub fn set_draft_type(&mut self, field_type: FieldType) {
        self.draft.field_type = field_type;
        if field_type != FieldType::Select {
            self.draft.options.clear();
        }
    }

    pub fn set_draft_label(&mut self, label: impl Into<String>) {
        self.draft.label = label.into();
    }

    pub fn set_draft_placeholder(&mut self, placeholder: impl Into<String>) {
        self.draft.placeholder = placeholder.into();
    }

    pub fn accumulate_option(&mut self, candidate: &str) -> bool {
        accumulate_option(&mut self.draft.options, candidate)
    }

    pub fn discard_draft(&mut self) {
        self.draft = FieldDraft::default();
    }

    /// Finalizes the current draft into a new field at the end of the
    /// collection. Returns `None` without touching anything when the draft
    /// is incomplete.
    pub fn add_field(&mut self) -> Option<FieldId> {
        if !self.draft.is_ready() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        let field = FormField::new(draft.kind(), draft.label, draft.placeholder);
        let id = field.id().clone();
        self.fields.push(field);
        Some(id)
    }

    /// Replaces the draft and adds it in one step.
    pub fn add_draft(&mut self, draft: FieldDraft) -> Option<FieldId> {
        if !draft.is_ready() {
            return None;
        }
        self.draft = draft;
        self.add_field()
    }

    pub fn remove_field(&mut self, id: &FieldId) -> bool {
        match self.fields.iter().position(|field| field.id() == id) {
            Some(position) => {
                self.fields.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn update_field_value(&mut self, id: &FieldId, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.id() == id) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }
}
