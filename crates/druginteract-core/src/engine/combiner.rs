use super::overlap::GeneOverlap;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::agent::ResolvedAgent;
use crate::core::models::effect::{CombinationEffect, CombinedScore};
use crate::core::models::interaction::{InteractionRecord, ScoreValue};
use crate::core::models::report::ReportSection;
use crate::engine::error::EngineError;
use std::collections::HashMap;
use tracing::debug;

pub const SCORES_SECTION_TITLE: &str = "Interaction scores per overlap genes";
pub const COMBINED_SECTION_TITLE: &str = "Combined interaction score";
pub const SKIPPED_NOTE: &str = "No gene overlap found; skipping calculation.";

/// Both agents' scores for one shared gene.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneScorePair {
    pub gene: String,
    pub score_first: f64,
    pub score_second: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CombinedGeneScore {
    pub gene: String,
    pub combined: CombinedScore,
}

/// Gene to score for one agent. The first row with a score wins; rows without a
/// score are passed over, malformed scores are an error.
pub fn score_map(
    agent_id: &str,
    interactions: &[InteractionRecord],
) -> Result<HashMap<String, f64>, EngineError> {
    let mut scores = HashMap::new();
    for record in interactions.iter().filter(|r| r.agent_id == agent_id) {
        match record.parse_score() {
            Ok(ScoreValue::Present(value)) => {
                scores.entry(record.gene.clone()).or_insert(value);
            }
            Ok(ScoreValue::Absent) => {}
            Err(raw) => {
                return Err(EngineError::InvalidScore {
                    agent_id: agent_id.to_string(),
                    gene: record.gene.clone(),
                    value: raw.to_string(),
                });
            }
        }
    }
    Ok(scores)
}

/// Score pairs for overlapping genes scored by both agents, in gene order.
///
/// Genes without a score for either agent are left out.
pub fn pair_scores(
    overlap: &GeneOverlap,
    first_id: &str,
    second_id: &str,
    interactions: &[InteractionRecord],
) -> Result<Vec<GeneScorePair>, EngineError> {
    let first_scores = score_map(first_id, interactions)?;
    let second_scores = score_map(second_id, interactions)?;

    let pairs: Vec<GeneScorePair> = overlap
        .genes
        .iter()
        .filter_map(|gene| {
            let score_first = *first_scores.get(gene)?;
            let score_second = *second_scores.get(gene)?;
            Some(GeneScorePair {
                gene: gene.clone(),
                score_first,
                score_second,
            })
        })
        .collect();

    if pairs.len() < overlap.len() {
        debug!(
            dropped = overlap.len() - pairs.len(),
            "Overlapping genes without a score for both drugs were left out."
        );
    }
    Ok(pairs)
}

pub fn combine(
    pairs: &[GeneScorePair],
    effect: CombinationEffect,
    reporter: &ProgressReporter,
) -> Vec<CombinedGeneScore> {
    reporter.report(Progress::TaskStart {
        total_steps: pairs.len() as u64,
    });
    let combined = pairs
        .iter()
        .map(|pair| {
            let combined = CombinedGeneScore {
                gene: pair.gene.clone(),
                combined: effect.combine(pair.score_first, pair.score_second),
            };
            reporter.report(Progress::TaskIncrement);
            combined
        })
        .collect();
    reporter.report(Progress::TaskFinish);
    combined
}

/// One plain-language line describing what the combination does to a gene.
pub fn explain(score: &CombinedGeneScore, effect: CombinationEffect, precision: usize) -> String {
    let symbol = effect.symbol();
    match score.combined {
        CombinedScore::Increased(value) => {
            let mut line = format!(
                "{}: combined score = {:.*} ({}) -> gene activity is increased.",
                score.gene, precision, value, symbol
            );
            if let Some(note) = effect.note() {
                line.push_str(&format!(" Note: {}.", note));
            }
            line
        }
        CombinedScore::Decreased(value) => format!(
            "{}: combined score = {:.*} ({}) -> gene activity is decreased.",
            score.gene, precision, value, symbol
        ),
        CombinedScore::Ambiguous { sum, difference } => format!(
            "{}: effect unknown ({}) -> gene activity is increased (sum = {:.*}) or decreased (difference = {:.*}).",
            score.gene, symbol, precision, sum, precision, difference
        ),
    }
}

pub fn scores_section(
    pairs: &[GeneScorePair],
    first: &ResolvedAgent,
    second: &ResolvedAgent,
    precision: usize,
) -> ReportSection {
    let mut section = ReportSection::new(SCORES_SECTION_TITLE)
        .line("gene: first drug = first drug score, second drug = second drug score");
    for pair in pairs {
        section.push(format!(
            "{}: {} = {:.*}, {} = {:.*}",
            pair.gene, first.name, precision, pair.score_first, second.name, precision, pair.score_second
        ));
    }
    if pairs.is_empty() {
        section.push("No overlapping gene has a score for both drugs.");
    }
    section
}

pub fn combined_section(
    scores: &[CombinedGeneScore],
    effect: CombinationEffect,
    precision: usize,
) -> ReportSection {
    let mut section =
        ReportSection::new(COMBINED_SECTION_TITLE).line(format!("Combination effect: {}", effect));
    for score in scores {
        section.push(explain(score, effect, precision));
    }
    section
}

/// Sections recorded in place of the calculation when the agents share no genes.
pub fn skipped_sections() -> [ReportSection; 2] {
    [
        ReportSection::new(SCORES_SECTION_TITLE).line(SKIPPED_NOTE),
        ReportSection::new(COMBINED_SECTION_TITLE).line(SKIPPED_NOTE),
    ]
}
