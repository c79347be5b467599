use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{
    self, field::FieldCommand, recipient::RecipientArgs, submit::SubmitArgs,
    template::TemplateArgs, validate::ValidateArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "form-builder",
    about = "Compose, validate and submit dynamic forms",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// TOML file with endpoint and timeout settings
    #[arg(long, value_name = "PATH", env = "FORM_BUILDER_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the starter contact form
    Template(TemplateArgs),
    /// Add, remove or fill in fields
    #[command(subcommand)]
    Field(FieldCommand),
    /// Set the recipient email address
    Recipient(RecipientArgs),
    /// Validate a form and print the errors per field
    Validate(ValidateArgs),
    /// Validate and send a form to the configured endpoint
    Submit(SubmitArgs),
}

pub fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Template(args) => cmd::template::run(args),
        Commands::Field(command) => cmd::field::run(command),
        Commands::Recipient(args) => cmd::recipient::run(args),
        Commands::Validate(args) => cmd::validate::run(args),
        Commands::Submit(args) => cmd::submit::run(args, cli.config.as_deref()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
