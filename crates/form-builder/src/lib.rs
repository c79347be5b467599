pub mod config;
pub mod pipeline;
pub mod sender;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod cmd;

pub use config::{ConfigError, FormBuilderConfig};
pub use pipeline::{PipelineState, SubmissionPipeline, SubmitOutcome, SubmitPhase};
pub use sender::{FormSender, HttpFormSender, SendError};
pub use session::{EditIntent, FormSession, SessionView};
