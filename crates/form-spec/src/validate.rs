use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ErrorPath, ErrorSet, ValidationError};
use crate::spec::field::{FieldKind, FormField};
use crate::spec::submission::Submission;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const LABEL_REQUIRED: &str = "Label is required";
pub const PLACEHOLDER_REQUIRED: &str = "Placeholder is required";
pub const VALUE_REQUIRED: &str = "Value is required";
pub const VALUE_NOT_A_NUMBER: &str = "Value must be a number";
pub const VALUE_BELOW_MINIMUM: &str = "Value must be at least 1";
pub const OPTION_REQUIRED: &str = "At least one option is required";

/// Field attributes a violation can be reported on, in display order.
pub const FIELD_ATTRIBUTES: [&str; 4] = ["label", "placeholder", "options", "value"];

/// Smallest accepted value of a Number field.
pub const NUMBER_MIN: f64 = 1.0;

// The local part may not start with a dot, repeat dots, or end in `'`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});

/// A submission that passed validation. Only [`validate`] constructs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission(Submission);

impl ValidatedSubmission {
    pub fn recipient_email(&self) -> &str {
        &self.0.recipient_email
    }

    pub fn fields(&self) -> &[FormField] {
        &self.0.fields
    }
}

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// Checks the recipient and every field in one pass, collecting all
/// violations instead of stopping at the first.
pub fn validate(submission: &Submission) -> Result<ValidatedSubmission, ErrorSet> {
    let mut errors = Vec::new();

    if !is_valid_email(&submission.recipient_email) {
        errors.push(ValidationError::new(
            ErrorPath::email(),
            INVALID_EMAIL,
            "invalid_email",
        ));
    }

    for (index, field) in submission.fields.iter().enumerate() {
        errors.extend(validate_field(index, field));
    }

    if errors.is_empty() {
        Ok(ValidatedSubmission(submission.clone()))
    } else {
        Err(ErrorSet { errors })
    }
}

/// Violations of a single field, addressed by its position.
pub fn validate_field(index: usize, field: &FormField) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if field.label().is_empty() {
        errors.push(required(index, "label", LABEL_REQUIRED));
    }
    if field.placeholder().is_empty() {
        errors.push(required(index, "placeholder", PLACEHOLDER_REQUIRED));
    }

    match field.kind() {
        FieldKind::Text => {
            if field.value().is_empty() {
                errors.push(required(index, "value", VALUE_REQUIRED));
            }
        }
        FieldKind::Number => {
            if let Some(error) = validate_number(index, field.value()) {
                errors.push(error);
            }
        }
        FieldKind::Select { options } => {
            if options.is_empty() {
                errors.push(ValidationError::new(
                    ErrorPath::field(index, "options"),
                    OPTION_REQUIRED,
                    "min_items",
                ));
            }
            if field.selected_options().is_empty() {
                errors.push(ValidationError::new(
                    ErrorPath::field(index, "value"),
                    OPTION_REQUIRED,
                    "min_items",
                ));
            }
        }
    }

    errors
}

fn validate_number(index: usize, raw: &str) -> Option<ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(required(index, "value", VALUE_REQUIRED));
    }

    let number = match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => {
            return Some(ValidationError::new(
                ErrorPath::field(index, "value"),
                VALUE_NOT_A_NUMBER,
                "not_a_number",
            ));
        }
    };

    if number < NUMBER_MIN {
        return Some(ValidationError::new(
            ErrorPath::field(index, "value"),
            VALUE_BELOW_MINIMUM,
            "min",
        ));
    }

    None
}

fn required(index: usize, attribute: &str, message: &str) -> ValidationError {
    ValidationError::new(ErrorPath::field(index, attribute), message, "required")
}
