use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use form_spec::is_valid_email;
use tracing::warn;

use super::document;

#[derive(Args, Debug, Clone)]
pub struct RecipientArgs {
    #[arg(long, value_name = "form.json")]
    pub form: PathBuf,
    #[arg(long)]
    pub email: String,
}

pub fn run(args: RecipientArgs) -> Result<()> {
    let mut doc = document::load(&args.form)?;
    if !is_valid_email(&args.email) {
        warn!(email = %args.email, "recipient does not look like an email address");
    }
    doc.recipient_email = args.email;
    document::save(&args.form, &doc)
}
