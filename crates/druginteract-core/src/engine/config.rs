use thiserror::Error;

/// Decimal places used when printing scores in the report.
pub const DEFAULT_SCORE_PRECISION: usize = 9;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("The same drug was entered twice ('{0}'). Please provide two different drugs.")]
    IdenticalAgents(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub first_agent: String,
    pub second_agent: String,
    pub score_precision: usize,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    first_agent: Option<String>,
    second_agent: Option<String>,
    score_precision: Option<usize>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_agent(mut self, name: impl Into<String>) -> Self {
        self.first_agent = Some(name.into());
        self
    }
    pub fn second_agent(mut self, name: impl Into<String>) -> Self {
        self.second_agent = Some(name.into());
        self
    }
    pub fn score_precision(mut self, precision: usize) -> Self {
        self.score_precision = Some(precision);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let first_agent = self
            .first_agent
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingParameter("first_agent"))?;
        let second_agent = self
            .second_agent
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingParameter("second_agent"))?;

        if first_agent.to_lowercase() == second_agent.to_lowercase() {
            return Err(ConfigError::IdenticalAgents(first_agent));
        }

        Ok(AnalysisConfig {
            first_agent,
            second_agent,
            score_precision: self.score_precision.unwrap_or(DEFAULT_SCORE_PRECISION),
        })
    }
}
