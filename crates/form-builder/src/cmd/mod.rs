pub mod document;
pub mod field;
pub mod recipient;
pub mod submit;
pub mod template;
pub mod validate;
