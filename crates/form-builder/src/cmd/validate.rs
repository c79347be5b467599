use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use form_spec::{DecodedErrors, ErrorPath, FIELD_ATTRIBUTES, FormDocument, validate};

use super::document;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(long, value_name = "form.json")]
    pub form: PathBuf,
    /// Print the decoded errors as JSON
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let doc = document::load(&args.form)?;
    let decoded = match validate(&doc.to_submission()) {
        Ok(_) => DecodedErrors::default(),
        Err(errors) => errors.decode(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        print_report(&doc, &decoded);
    }

    if !decoded.is_empty() {
        bail!("form {} is invalid", args.form.display());
    }
    Ok(())
}

pub(crate) fn print_report(doc: &FormDocument, decoded: &DecodedErrors) {
    if decoded.is_empty() {
        println!("form is valid");
        return;
    }
    if let Some(message) = &decoded.message {
        println!("email: {message}");
    }
    for (index, field) in doc.fields.iter().enumerate() {
        for attribute in FIELD_ATTRIBUTES {
            if let Some(message) = decoded.field(index, attribute) {
                let key = ErrorPath::field(index, attribute).slot_key();
                println!("{key} ({}): {message}", field.label());
            }
        }
    }
}
