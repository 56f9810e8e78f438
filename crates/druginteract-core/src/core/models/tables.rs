use super::agent::AgentRecord;
use super::interaction::InteractionRecord;
use super::rule::CombinationRule;
use crate::core::io::tsv::{self, TableLoadError};
use std::path::Path;
use tracing::info;

/// The three input tables, each kept in file order.
#[derive(Debug, Clone, Default)]
pub struct DataTables {
    pub agents: Vec<AgentRecord>,
    pub interactions: Vec<InteractionRecord>,
    pub rules: Vec<CombinationRule>,
}

impl DataTables {
    pub fn new(
        agents: Vec<AgentRecord>,
        interactions: Vec<InteractionRecord>,
        rules: Vec<CombinationRule>,
    ) -> Self {
        Self {
            agents,
            interactions,
            rules,
        }
    }

    pub fn load(
        interactions_path: &Path,
        agents_path: &Path,
        rules_path: &Path,
    ) -> Result<Self, TableLoadError> {
        let interactions = tsv::read_table::<InteractionRecord>(interactions_path)?;
        let agents = tsv::read_table::<AgentRecord>(agents_path)?;
        let rules = tsv::read_table::<CombinationRule>(rules_path)?;

        info!(
            agents = agents.len(),
            interactions = interactions.len(),
            rules = rules.len(),
            "Loaded input tables."
        );
        Ok(Self::new(agents, interactions, rules))
    }

    /// Rows belonging to one agent, in table order.
    pub fn interactions_for<'a>(
        &'a self,
        agent_id: &'a str,
    ) -> impl Iterator<Item = &'a InteractionRecord> + 'a {
        self.interactions
            .iter()
            .filter(move |record| record.agent_id == agent_id)
    }
}
