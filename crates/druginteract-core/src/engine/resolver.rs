use crate::core::models::agent::{AgentRecord, ResolvedAgent};
use crate::engine::error::EngineError;
use tracing::debug;

/// Resolves a display name to its concept id; the first matching row wins.
pub fn resolve(name: &str, agents: &[AgentRecord]) -> Result<ResolvedAgent, EngineError> {
    let record = agents
        .iter()
        .find(|record| record.matches_name(name))
        .ok_or_else(|| EngineError::AgentNotFound {
            name: name.trim().to_string(),
        })?;

    debug!("Resolved '{}' to concept id '{}'.", name, record.id);
    Ok(ResolvedAgent {
        name: name.trim().to_string(),
        id: record.id.clone(),
    })
}

/// Resolves both agents. Fails on the first name that has no match.
pub fn resolve_pair(
    first: &str,
    second: &str,
    agents: &[AgentRecord],
) -> Result<(ResolvedAgent, ResolvedAgent), EngineError> {
    Ok((resolve(first, agents)?, resolve(second, agents)?))
}
