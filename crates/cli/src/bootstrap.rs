use std::path::Path;

use chatdesk_agent::{AgentRuntime, GenerationError};
use chatdesk_core::config::{AppConfig, ConfigError, LoadOptions};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub agent_runtime: AgentRuntime,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("could not load .env file: {0}")]
    EnvFile(#[source] dotenvy::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("llm client setup failed: {0}")]
    LlmClient(#[source] GenerationError),
}

impl BootstrapError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::EnvFile(_) | Self::Config(_) => 2,
            Self::LlmClient(_) => 3,
        }
    }
}

/// Loads `.env` from the working directory or its parents. A missing file is
/// fine; a malformed one is reported.
pub fn load_dotenv() -> Result<(), BootstrapError> {
    missing_is_ok(dotenvy::dotenv())
}

pub fn load_env_file(path: &Path) -> Result<(), BootstrapError> {
    missing_is_ok(dotenvy::from_path(path))
}

fn missing_is_ok<T>(result: Result<T, dotenvy::Error>) -> Result<(), BootstrapError> {
    match result {
        Ok(_) => Ok(()),
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(BootstrapError::EnvFile(error)),
    }
}

/// Loads and validates configuration. Fails before any console interaction
/// when the API key is missing or blank.
pub fn load_config(options: LoadOptions) -> Result<AppConfig, BootstrapError> {
    Ok(AppConfig::load(options)?)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        model = %config.llm.model,
        "starting application bootstrap"
    );

    let agent_runtime =
        AgentRuntime::from_config(&config.llm).map_err(BootstrapError::LlmClient)?;

    Ok(Application { config, agent_runtime })
}
