use serde::Deserialize;

/// Cell values that stand for "no score recorded" in interaction dumps.
const ABSENT_SCORE_MARKERS: &[&str] = &["", "NULL", "NA", "N/A"];

/// One observed gene-agent interaction.
///
/// The score is kept exactly as read so that the decision between "absent" and
/// "malformed" is made where the number is actually needed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InteractionRecord {
    #[serde(rename = "gene_claim_name")]
    pub gene: String,
    #[serde(rename = "interaction_type")]
    pub interaction_type: String,
    #[serde(rename = "interaction_score")]
    pub score: String,
    #[serde(rename = "drug_concept_id")]
    pub agent_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreValue {
    Absent,
    Present(f64),
}

impl InteractionRecord {
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "gene_claim_name",
        "interaction_type",
        "interaction_score",
        "drug_concept_id",
    ];

    pub fn new(
        gene: impl Into<String>,
        interaction_type: impl Into<String>,
        score: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            gene: gene.into(),
            interaction_type: interaction_type.into(),
            score: score.into(),
            agent_id: agent_id.into(),
        }
    }

    /// Interprets the raw score cell.
    ///
    /// Blank cells and the usual null markers are [`ScoreValue::Absent`]. Anything
    /// else must parse as a float; the raw text is returned as the error otherwise.
    pub fn parse_score(&self) -> Result<ScoreValue, &str> {
        let raw = self.score.trim();
        if ABSENT_SCORE_MARKERS
            .iter()
            .any(|marker| marker.eq_ignore_ascii_case(raw))
        {
            return Ok(ScoreValue::Absent);
        }
        raw.parse::<f64>()
            .map(ScoreValue::Present)
            .map_err(|_| self.score.as_str())
    }
}
