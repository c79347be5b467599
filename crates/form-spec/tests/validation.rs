use form_spec::{
    ErrorPath, FIELD_ATTRIBUTES, FieldKind, FormField, Submission, decode_errors, validate,
    validate::{
        INVALID_EMAIL, LABEL_REQUIRED, OPTION_REQUIRED, PLACEHOLDER_REQUIRED,
        VALUE_BELOW_MINIMUM, VALUE_REQUIRED,
    },
};

fn name_field(value: &str) -> FormField {
    FormField::with_id("name".into(), FieldKind::Text, "Name", "Enter your name").with_value(value)
}

fn age_field(value: &str) -> FormField {
    FormField::with_id("age".into(), FieldKind::Number, "Age", "Enter your age").with_value(value)
}

fn colour_field(options: &[&str]) -> FormField {
    FormField::with_id(
        "colour".into(),
        FieldKind::Select {
            options: options.iter().map(|option| option.to_string()).collect(),
        },
        "Colour",
        "Pick a colour",
    )
}

#[test]
fn valid_submission_passes() {
    let submission = Submission::new(
        "a@b.com",
        vec![name_field("Alice"), age_field("30"), colour_field(&["red", "blue"])],
    );
    let validated = validate(&submission).expect("submission is valid");
    assert_eq!(validated.recipient_email(), "a@b.com");
    assert_eq!(validated.fields().len(), 3);
}

#[test]
fn empty_collection_only_checks_email() {
    assert!(validate(&Submission::new("a@b.com", vec![])).is_ok());
    let errors = validate(&Submission::new("nope", vec![])).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors[0].path, ErrorPath::email());
}

#[test]
fn invalid_email_does_not_short_circuit_field_checks() {
    let submission = Submission::new("not-an-email", vec![name_field(""), age_field("0")]);
    let errors = validate(&submission).unwrap_err();

    let decoded = errors.decode();
    assert_eq!(decoded.message.as_deref(), Some(INVALID_EMAIL));
    assert_eq!(decoded.field(0, "value"), Some(VALUE_REQUIRED));
    assert_eq!(decoded.field(1, "value"), Some(VALUE_BELOW_MINIMUM));
    assert_eq!(errors.errors[0].code.as_deref(), Some("invalid_email"));
}

#[test]
fn number_below_one_or_empty_is_reported_on_value() {
    for raw in ["", "0", "-3", "0.99"] {
        let submission = Submission::new("a@b.com", vec![name_field("Alice"), age_field(raw)]);
        let decoded = validate(&submission).unwrap_err().decode();
        assert!(decoded.message.is_none());
        assert!(
            decoded.fields.contains_key("1.value"),
            "value {raw:?} should fail at 1.value"
        );
        assert_eq!(decoded.fields.len(), 1);
    }
}

#[test]
fn number_field_rejects_text() {
    let decoded = validate(&Submission::new("a@b.com", vec![age_field("twelve")]))
        .unwrap_err()
        .decode();
    assert_eq!(decoded.field(0, "value"), Some("Value must be a number"));
}

#[test]
fn every_attribute_violation_is_collected() {
    let field = FormField::with_id("blank".into(), FieldKind::Text, "", "");
    let errors = validate(&Submission::new("a@b.com", vec![field])).unwrap_err();
    let decoded = decode_errors(&errors.errors);
    assert_eq!(decoded.field(0, "label"), Some(LABEL_REQUIRED));
    assert_eq!(decoded.field(0, "placeholder"), Some(PLACEHOLDER_REQUIRED));
    assert_eq!(decoded.field(0, "value"), Some(VALUE_REQUIRED));
    assert_eq!(errors.len(), 3);
}

#[test]
fn select_requires_a_chosen_option() {
    let cleared = colour_field(&["red"]).with_value(" , ");
    let decoded = validate(&Submission::new("a@b.com", vec![cleared]))
        .unwrap_err()
        .decode();
    assert_eq!(decoded.field(0, "value"), Some(OPTION_REQUIRED));

    let no_options = colour_field(&[]);
    let decoded = validate(&Submission::new("a@b.com", vec![no_options]))
        .unwrap_err()
        .decode();
    assert_eq!(decoded.field(0, "options"), Some(OPTION_REQUIRED));
    assert_eq!(decoded.field(0, "value"), Some(OPTION_REQUIRED));
}

#[test]
fn error_paths_follow_index_fields_attribute_order() {
    let errors = validate(&Submission::new("a@b.com", vec![name_field("x"), name_field("")]))
        .unwrap_err();
    let path = &errors.errors[0].path;
    assert_eq!(path.to_string(), "1.fields.value");
    assert_eq!(path.slot_key(), "1.value");
}

#[test]
fn decoded_errors_serialize_for_rendering() {
    let decoded = validate(&Submission::new("bad", vec![name_field("")]))
        .unwrap_err()
        .decode();
    let value = serde_json::to_value(&decoded).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "message": INVALID_EMAIL,
            "fields": { "0.value": VALUE_REQUIRED }
        })
    );
}

#[test]
fn every_reported_attribute_is_a_known_slot() {
    let fields = vec![
        FormField::with_id("blank".into(), FieldKind::Text, "", ""),
        age_field("abc"),
        colour_field(&[]),
    ];
    let errors = validate(&Submission::new("a@b.com", fields)).unwrap_err();
    let decoded = errors.decode();
    for error in &errors.errors {
        let (index, attribute) = error.path.as_field().expect("field path");
        assert!(
            FIELD_ATTRIBUTES.contains(&attribute.as_str()),
            "{attribute} is not reportable"
        );
        assert!(decoded.fields.contains_key(&error.path.slot_key()));
        assert!(decoded.field(index, &attribute).is_some());
    }
}
