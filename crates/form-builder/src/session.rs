use form_spec::{
    DuplicateFieldId, FieldDraft, FieldEditor, FieldId, FieldType, FormDocument, FormField,
    Submission,
};
use serde::{Deserialize, Serialize};

use crate::pipeline::{PipelineState, SubmissionPipeline, SubmitOutcome};
use crate::sender::FormSender;

/// Editing intents a rendering surface reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum EditIntent {
    SetRecipient { email: String },
    SetDraftType { field_type: FieldType },
    SetDraftLabel { label: String },
    SetDraftPlaceholder { placeholder: String },
    AccumulateOption { option: String },
    AddField,
    DiscardDraft,
    RemoveField { id: FieldId },
    UpdateFieldValue { id: FieldId, value: String },
}

/// Snapshot handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView<'a> {
    pub recipient_email: &'a str,
    pub fields: &'a [FormField],
    pub draft: &'a FieldDraft,
    #[serde(flatten)]
    pub pipeline: PipelineState,
}

/// Owns everything one form needs: fields, draft, recipient and pipeline.
pub struct FormSession<S> {
    editor: FieldEditor,
    recipient_email: String,
    pipeline: SubmissionPipeline<S>,
}

impl<S: FormSender> FormSession<S> {
    pub fn new(sender: S) -> Self {
        Self {
            editor: FieldEditor::new(),
            recipient_email: String::new(),
            pipeline: SubmissionPipeline::new(sender),
        }
    }

    /// Resumes a saved document. Fails when two fields share an id.
    pub fn from_document(document: FormDocument, sender: S) -> Result<Self, DuplicateFieldId> {
        Ok(Self {
            editor: FieldEditor::from_fields(document.fields)?,
            recipient_email: document.recipient_email,
            pipeline: SubmissionPipeline::new(sender),
        })
    }

    pub fn editor(&self) -> &FieldEditor {
        &self.editor
    }

    pub fn recipient_email(&self) -> &str {
        &self.recipient_email
    }

    pub fn pipeline(&self) -> &SubmissionPipeline<S> {
        &self.pipeline
    }

    /// Applies one intent; returns whether anything changed. Edits to the
    /// recipient or the field collection clear visible errors.
    pub fn apply(&mut self, intent: EditIntent) -> bool {
        let (changed, clears_errors) = match intent {
            EditIntent::SetRecipient { email } => {
                self.recipient_email = email;
                (true, true)
            }
            EditIntent::SetDraftType { field_type } => {
                self.editor.set_draft_type(field_type);
                (true, false)
            }
            EditIntent::SetDraftLabel { label } => {
                self.editor.set_draft_label(label);
                (true, false)
            }
            EditIntent::SetDraftPlaceholder { placeholder } => {
                self.editor.set_draft_placeholder(placeholder);
                (true, false)
            }
            EditIntent::AccumulateOption { option } => {
                (self.editor.accumulate_option(&option), false)
            }
            EditIntent::AddField => (self.editor.add_field().is_some(), false),
            EditIntent::DiscardDraft => {
                self.editor.discard_draft();
                (true, false)
            }
            EditIntent::RemoveField { id } => {
                let removed = self.editor.remove_field(&id);
                (removed, removed)
            }
            EditIntent::UpdateFieldValue { id, value } => {
                let updated = self.editor.update_field_value(&id, value);
                (updated, updated)
            }
        };
        if clears_errors {
            self.pipeline.clear_errors();
        }
        changed
    }

    /// Builds a fresh submission from the current state and runs it.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = Submission::new(
            self.recipient_email.clone(),
            self.editor.fields().to_vec(),
        );
        self.pipeline.submit(submission).await
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            recipient_email: &self.recipient_email,
            fields: self.editor.fields(),
            draft: self.editor.draft(),
            pipeline: self.pipeline.state(),
        }
    }

    pub fn to_document(&self) -> FormDocument {
        FormDocument {
            recipient_email: self.recipient_email.clone(),
            fields: self.editor.fields().to_vec(),
        }
    }
}
