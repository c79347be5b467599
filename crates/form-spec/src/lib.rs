#![allow(missing_docs)]

pub mod editor;
pub mod errors;
pub mod payload;
pub mod spec;
pub mod validate;

pub use editor::{
    DuplicateFieldId, FieldDraft, FieldEditor, accumulate_option, ensure_unique_ids,
};
pub use errors::{
    DecodedErrors, EMAIL_SLOT, ErrorPath, ErrorSet, FIELDS_SEGMENT, PathSegment, ValidationError,
    decode_errors,
};
pub use payload::{OutboundPayload, duplicate_labels, flatten_fields};
pub use spec::{FieldId, FieldKind, FieldType, FormDocument, FormField, Submission};
pub use validate::{
    FIELD_ATTRIBUTES, ValidatedSubmission, is_valid_email, validate, validate_field,
};
