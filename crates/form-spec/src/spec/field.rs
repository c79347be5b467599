use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a field inside one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Allocates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FieldId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type tag of a field, without any per-kind payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Select,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Select => "Select",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field kind together with the data only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldKind {
    Text,
    Number,
    Select { options: Vec<String> },
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text => FieldType::Text,
            FieldKind::Number => FieldType::Number,
            FieldKind::Select { .. } => FieldType::Select,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Select { options } => Some(options),
            FieldKind::Text | FieldKind::Number => None,
        }
    }
}

/// One user-defined input of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    id: FieldId,
    #[serde(flatten)]
    kind: FieldKind,
    label: String,
    placeholder: String,
    #[serde(default)]
    pub(crate) value: String,
}

impl FormField {
    /// Builds a field with a fresh id. Select fields start with every
    /// option chosen, the other kinds start empty.
    pub fn new(kind: FieldKind, label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::with_id(FieldId::generate(), kind, label, placeholder)
    }

    pub fn with_id(
        id: FieldId,
        kind: FieldKind,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        let value = match &kind {
            FieldKind::Select { options } => options.join(","),
            FieldKind::Text | FieldKind::Number => String::new(),
        };
        Self {
            id,
            kind,
            label: label.into(),
            placeholder: placeholder.into(),
            value,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn options(&self) -> Option<&[String]> {
        self.kind.options()
    }

    /// Chosen options of a Select field, split out of the comma-joined value.
    pub fn selected_options(&self) -> Vec<&str> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|option| !option.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn select_value_joins_options() {
        let field = FormField::new(
            FieldKind::Select {
                options: vec!["red".into(), "green".into()],
            },
            "Colour",
            "Pick one",
        );
        assert_eq!(field.value(), "red,green");
        assert_eq!(field.selected_options(), vec!["red", "green"]);
    }

    #[test]
    fn text_and_number_start_empty() {
        assert_eq!(FormField::new(FieldKind::Text, "Name", "Your name").value(), "");
        assert_eq!(FormField::new(FieldKind::Number, "Age", "Your age").value(), "");
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(FieldId::generate(), FieldId::generate());
    }

    #[test]
    fn serializes_type_tag_inline() {
        let field = FormField::with_id(
            "f1".into(),
            FieldKind::Select {
                options: vec!["a".into()],
            },
            "Pick",
            "Choose",
        );
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "f1",
                "type": "Select",
                "options": ["a"],
                "label": "Pick",
                "placeholder": "Choose",
                "value": "a"
            })
        );

        let text: FormField = serde_json::from_value(json!({
            "id": "f2",
            "type": "Text",
            "label": "Name",
            "placeholder": "Enter your name"
        }))
        .unwrap();
        assert_eq!(text.field_type(), FieldType::Text);
        assert!(text.options().is_none());
        assert_eq!(text.value(), "");
    }
}
