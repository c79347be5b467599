use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Subcommand, ValueEnum};
use form_spec::{FieldEditor, FieldId, FieldType};
use tracing::info;

use super::document;

#[derive(Subcommand, Debug, Clone)]
pub enum FieldCommand {
    /// Append a new field
    Add(FieldAddArgs),
    /// Remove a field by id
    Remove(FieldRemoveArgs),
    /// Replace the value of a field
    Set(FieldSetArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTypeArg {
    Text,
    Number,
    Select,
}

impl From<FieldTypeArg> for FieldType {
    fn from(value: FieldTypeArg) -> Self {
        match value {
            FieldTypeArg::Text => FieldType::Text,
            FieldTypeArg::Number => FieldType::Number,
            FieldTypeArg::Select => FieldType::Select,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FieldAddArgs {
    #[arg(long, value_name = "form.json")]
    pub form: PathBuf,
    #[arg(long = "type", value_enum, default_value = "text")]
    pub field_type: FieldTypeArg,
    #[arg(long)]
    pub label: String,
    #[arg(long)]
    pub placeholder: String,
    /// Select option; repeat for more
    #[arg(long = "option", value_name = "OPTION")]
    pub options: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct FieldRemoveArgs {
    #[arg(long, value_name = "form.json")]
    pub form: PathBuf,
    #[arg(long)]
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct FieldSetArgs {
    #[arg(long, value_name = "form.json")]
    pub form: PathBuf,
    #[arg(long)]
    pub id: String,
    /// New value; for select fields a comma-separated list of options
    #[arg(long)]
    pub value: String,
}

pub fn run(command: FieldCommand) -> Result<()> {
    match command {
        FieldCommand::Add(args) => add(args),
        FieldCommand::Remove(args) => remove(args),
        FieldCommand::Set(args) => set(args),
    }
}

fn add(args: FieldAddArgs) -> Result<()> {
    let mut doc = document::load(&args.form)?;
    let mut editor = FieldEditor::from_fields(std::mem::take(&mut doc.fields))?;
    editor.set_draft_type(args.field_type.into());
    editor.set_draft_label(args.label);
    editor.set_draft_placeholder(args.placeholder);
    for option in &args.options {
        editor.accumulate_option(option);
    }

    let added = editor.add_field();
    doc.fields = editor.into_fields();
    match added {
        Some(id) => {
            document::save(&args.form, &doc)?;
            info!(%id, "field added");
            println!("{id}");
        }
        None => {
            println!("field not added: label, placeholder and at least one option for select are needed");
        }
    }
    Ok(())
}

fn remove(args: FieldRemoveArgs) -> Result<()> {
    let mut doc = document::load(&args.form)?;
    let mut editor = FieldEditor::from_fields(std::mem::take(&mut doc.fields))?;
    let id = FieldId::from(args.id);
    let removed = editor.remove_field(&id);
    doc.fields = editor.into_fields();
    if !removed {
        bail!("no field with id {id}");
    }
    document::save(&args.form, &doc)
}

fn set(args: FieldSetArgs) -> Result<()> {
    let mut doc = document::load(&args.form)?;
    let mut editor = FieldEditor::from_fields(std::mem::take(&mut doc.fields))?;
    let id = FieldId::from(args.id);
    let updated = editor.update_field_value(&id, args.value);
    doc.fields = editor.into_fields();
    if !updated {
        bail!("no field with id {id}");
    }
    document::save(&args.form, &doc)
}
