pub mod field;
pub mod submission;

pub use field::{FieldId, FieldKind, FieldType, FormField};
pub use submission::{FormDocument, Submission};
