use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use url::Url;

use crate::config::FormBuilderConfig;
use crate::pipeline::SubmitOutcome;
use crate::sender::HttpFormSender;
use crate::session::FormSession;

use super::document;
use super::validate::print_report;

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    #[arg(long, value_name = "form.json")]
    pub form: PathBuf,
    /// Endpoint receiving the form
    #[arg(long, value_name = "URL", env = "FORM_BUILDER_ENDPOINT")]
    pub endpoint: Option<Url>,
    /// Give up on the request after this many seconds
    #[arg(long, value_name = "SECONDS", env = "FORM_BUILDER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

pub fn run(args: SubmitArgs, config_path: Option<&Path>) -> Result<()> {
    let config = FormBuilderConfig::load(config_path)?
        .with_overrides(args.endpoint.clone(), args.timeout_secs)?;
    let doc = document::load(&args.form)?;
    let sender = HttpFormSender::from_config(&config)?;
    let session = FormSession::from_document(doc, sender)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let outcome = runtime.block_on(session.submit());

    match outcome {
        SubmitOutcome::Sent => {
            let notice = session.pipeline().state().notice.unwrap_or_default();
            println!("{notice}");
            Ok(())
        }
        SubmitOutcome::Invalid(decoded) => {
            print_report(&session.to_document(), &decoded);
            bail!("form {} is invalid; nothing was sent", args.form.display())
        }
        SubmitOutcome::Failed(message) => bail!("{message}"),
        SubmitOutcome::Busy => bail!("a submission is already in progress"),
    }
}
