use form_spec::{DuplicateFieldId, FieldDraft, FieldEditor, FieldId, FieldType, FormDocument};

fn text_draft(label: &str) -> FieldDraft {
    FieldDraft::new(FieldType::Text, label, "placeholder")
}

#[test]
fn add_field_appends_in_insertion_order() {
    let mut editor = FieldEditor::new();
    let first = editor.add_draft(text_draft("First")).expect("added");
    let second = editor.add_draft(text_draft("Second")).expect("added");

    let labels: Vec<_> = editor.fields().iter().map(|field| field.label()).collect();
    assert_eq!(labels, vec!["First", "Second"]);
    assert_ne!(first, second);
    assert_eq!(editor.fields()[0].id(), &first);
}

#[test]
fn add_field_with_empty_label_is_a_noop() {
    let mut editor = FieldEditor::new();
    assert!(editor.add_draft(text_draft("")).is_none());
    assert_eq!(editor.len(), 0);
}

#[test]
fn add_field_with_empty_placeholder_is_a_noop() {
    let mut editor = FieldEditor::new();
    assert!(
        editor
            .add_draft(FieldDraft::new(FieldType::Number, "Age", ""))
            .is_none()
    );
    assert!(editor.is_empty());
}

#[test]
fn select_without_options_is_a_noop() {
    let mut editor = FieldEditor::new();
    editor.set_draft_type(FieldType::Select);
    editor.set_draft_label("Colour");
    editor.set_draft_placeholder("Pick");
    assert!(editor.add_field().is_none());
    assert!(editor.is_empty());

    assert!(editor.accumulate_option("red"));
    assert!(editor.add_field().is_some());
    assert_eq!(editor.len(), 1);
}

#[test]
fn remove_field_removes_exactly_one() {
    let mut editor = FieldEditor::new();
    let keep = editor.add_draft(text_draft("Keep")).unwrap();
    let drop = editor.add_draft(text_draft("Drop")).unwrap();

    assert!(!editor.remove_field(&FieldId::from("missing")));
    assert_eq!(editor.len(), 2);

    assert!(editor.remove_field(&drop));
    assert_eq!(editor.len(), 1);
    assert!(editor.field(&keep).is_some());
    assert!(editor.field(&drop).is_none());
}

#[test]
fn update_value_preserves_other_attributes() {
    let mut editor = FieldEditor::new();
    let id = editor.add_draft(text_draft("Name")).unwrap();
    let before = editor.field(&id).unwrap().clone();

    assert!(editor.update_field_value(&id, "Alice"));
    let after = editor.field(&id).unwrap();
    assert_eq!(after.value(), "Alice");
    assert_eq!(after.id(), before.id());
    assert_eq!(after.label(), before.label());
    assert_eq!(after.placeholder(), before.placeholder());
    assert_eq!(after.kind(), before.kind());

    assert!(!editor.update_field_value(&FieldId::from("missing"), "x"));
}

#[test]
fn discard_draft_resets_to_defaults() {
    let mut editor = FieldEditor::new();
    editor.set_draft_type(FieldType::Select);
    editor.set_draft_label("Colour");
    editor.accumulate_option("red");
    editor.discard_draft();
    assert_eq!(editor.draft(), &FieldDraft::default());
    assert_eq!(editor.draft().field_type, FieldType::Text);
}

#[test]
fn loading_duplicate_ids_is_rejected() {
    let doc: FormDocument = serde_json::from_str(
        r#"{
            "recipient_email": "a@b.com",
            "fields": [
                { "id": "x", "type": "Text", "label": "First", "placeholder": "p", "value": "" },
                { "id": "y", "type": "Number", "label": "Age", "placeholder": "p", "value": "2" },
                { "id": "x", "type": "Text", "label": "Second", "placeholder": "p", "value": "" }
            ]
        }"#,
    )
    .unwrap();

    let err = FieldEditor::from_fields(doc.fields).unwrap_err();
    assert_eq!(err, DuplicateFieldId(FieldId::from("x")));
    assert_eq!(err.to_string(), "duplicate field id `x`");
}

#[test]
fn loading_unique_ids_keeps_order() {
    let mut source = FieldEditor::new();
    let first = source.add_draft(text_draft("First")).unwrap();
    let second = source.add_draft(text_draft("Second")).unwrap();

    let mut editor = FieldEditor::from_fields(source.into_fields()).unwrap();
    assert_eq!(editor.fields()[0].id(), &first);
    assert!(editor.remove_field(&first));
    assert_eq!(editor.fields()[0].id(), &second);
}
