pub mod bootstrap;
pub mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chatdesk_agent::{Console, ConversationSummary, LineConsole};
use chatdesk_core::config::LoadOptions;
use clap::Parser;

use crate::bootstrap::Application;

#[derive(Debug, Parser)]
#[command(
    name = "chatdesk",
    version,
    about = "Interactive help-desk assistant",
    long_about = "Collects your name and email, then answers questions, tells jokes via an OpenAI-compatible model, and simulates appointment booking.",
    after_help = "Environment:\n  OPENAI_API_KEY            API key for the text-generation service (required)\n  CHATDESK_LLM_MODEL        model name (default gpt-3.5-turbo)\n  CHATDESK_LOG_LEVEL        trace|debug|info|warn|error (default error)\n\nA .env file in the working directory is loaded when present."
)]
pub struct Cli {}

pub fn run() -> ExitCode {
    let _cli = Cli::parse();

    // Variables already present in the environment take precedence over .env.
    if let Err(error) = bootstrap::load_dotenv() {
        eprintln!("error: {error}");
        return ExitCode::from(error.exit_code());
    }

    let mut console = LineConsole::stdio();
    ExitCode::from(execute(LoadOptions::default(), &mut console))
}

/// Loads configuration, bootstraps the agent and runs one session on
/// `console`. Returns the process exit code. Nothing reaches the console when
/// configuration fails.
pub fn execute<C>(options: LoadOptions, console: &mut C) -> u8
where
    C: Console,
{
    let config = match bootstrap::load_config(options) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error}");
            return error.exit_code();
        }
    };
    logging::init(&config);

    let app = match bootstrap::bootstrap_with_config(config) {
        Ok(app) => app,
        Err(error) => {
            tracing::error!(event_name = "system.bootstrap.failed", error = %error);
            eprintln!("error: {error}");
            return error.exit_code();
        }
    };

    run_session(&app, console)
}

/// Runs one conversation. Every graceful ending exits 0; a console failure
/// exits 1.
pub fn run_session<C>(app: &Application, console: &mut C) -> u8
where
    C: Console,
{
    match drive_session(app, console) {
        Ok(_) => 0,
        Err(error) => {
            tracing::error!(event_name = "conversation.aborted", error = %error);
            eprintln!("error: {error:#}");
            1
        }
    }
}

fn drive_session<C>(app: &Application, console: &mut C) -> Result<ConversationSummary>
where
    C: Console,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(app.agent_runtime.run(console)).context("conversation aborted")
}
