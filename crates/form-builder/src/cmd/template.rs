use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use form_spec::{FieldDraft, FieldEditor, FieldType, FormDocument};

use super::document;

#[derive(Args, Debug, Clone)]
pub struct TemplateArgs {
    /// Where to write the form; prints to stdout when omitted
    #[arg(long, value_name = "form.json")]
    pub out: Option<PathBuf>,
    /// Overwrite an existing file
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

/// Contact form with a name and a message.
pub fn starter_document() -> FormDocument {
    let mut editor = FieldEditor::new();
    editor.add_draft(FieldDraft::new(FieldType::Text, "Name", "Enter your name"));
    editor.add_draft(FieldDraft::new(
        FieldType::Text,
        "Message",
        "Enter your message",
    ));
    FormDocument {
        recipient_email: String::new(),
        fields: editor.into_fields(),
    }
}

pub fn run(args: TemplateArgs) -> Result<()> {
    let doc = starter_document();
    match &args.out {
        Some(path) => {
            if path.exists() && !args.force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            document::save(path, &doc)?;
            println!("wrote starter form to {}", path.display());
        }
        None => println!("{}", doc.to_json_pretty()?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_has_name_and_message() {
        let doc = starter_document();
        let labels: Vec<_> = doc.fields.iter().map(|field| field.label()).collect();
        assert_eq!(labels, vec!["Name", "Message"]);
        assert!(doc.fields.iter().all(|field| field.value().is_empty()));
    }
}
