use crate::core::models::interaction::InteractionRecord;
use std::collections::BTreeSet;
use tracing::warn;

/// Interaction type used for an agent without any interaction rows.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// The representative interaction type of one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionTypeSelection {
    pub agent_id: String,
    pub selected: String,
    /// Every distinct type seen for the agent, in first-seen order.
    pub distinct_types: Vec<String>,
}

impl InteractionTypeSelection {
    /// More than one type was recorded, so the selection depends on row order.
    pub fn is_ambiguous(&self) -> bool {
        self.distinct_types.len() > 1
    }
}

/// Picks the type of the agent's first interaction row in table order.
pub fn select(agent_id: &str, interactions: &[InteractionRecord]) -> InteractionTypeSelection {
    let mut distinct_types: Vec<String> = Vec::new();
    for record in interactions.iter().filter(|r| r.agent_id == agent_id) {
        if !distinct_types.contains(&record.interaction_type) {
            distinct_types.push(record.interaction_type.clone());
        }
    }

    let selected = distinct_types
        .first()
        .cloned()
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

    let selection = InteractionTypeSelection {
        agent_id: agent_id.to_string(),
        selected,
        distinct_types,
    };
    if selection.is_ambiguous() {
        warn!(
            agent_id,
            types = ?selection.distinct_types,
            "Drug has several interaction types; using the first listed ('{}').",
            selection.selected
        );
    }
    selection
}

/// Sorted set of every interaction type appearing in the table.
pub fn distinct_interaction_types(interactions: &[InteractionRecord]) -> BTreeSet<String> {
    interactions
        .iter()
        .map(|record| record.interaction_type.clone())
        .collect()
}
