use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Drug not found: '{name}'")]
    AgentNotFound { name: String },

    #[error("Invalid interaction score '{value}' for gene '{gene}' of drug '{agent_id}'")]
    InvalidScore {
        agent_id: String,
        gene: String,
        value: String,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
