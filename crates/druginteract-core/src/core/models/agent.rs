use serde::Deserialize;

/// One row of the agent table: a display name and the concept id it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentRecord {
    #[serde(rename = "drug_claim_name")]
    pub name: String,
    #[serde(rename = "concept_id")]
    pub id: String,
}

impl AgentRecord {
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["drug_claim_name", "concept_id"];

    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Case-insensitive comparison of the record name against user input.
    /// Surrounding whitespace in the input is ignored.
    pub fn matches_name(&self, input: &str) -> bool {
        self.name.to_lowercase() == input.trim().to_lowercase()
    }
}

/// An agent as entered by the user together with its canonical id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAgent {
    pub name: String,
    pub id: String,
}
