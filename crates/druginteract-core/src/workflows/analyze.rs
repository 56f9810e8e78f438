use crate::core::models::agent::ResolvedAgent;
use crate::core::models::effect::CombinationEffect;
use crate::core::models::report::Report;
use crate::core::models::tables::DataTables;
use crate::engine::classifier::{self, Classification};
use crate::engine::combiner::{self, CombinedGeneScore, GeneScorePair};
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::overlap::{self, GeneOverlap};
use crate::engine::progress::ProgressReporter;
use crate::engine::report::ReportBuilder;
use crate::engine::resolver;
use crate::engine::selector::{self, InteractionTypeSelection};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub first: ResolvedAgent,
    pub second: ResolvedAgent,
    pub overlap: GeneOverlap,
    pub first_type: InteractionTypeSelection,
    pub second_type: InteractionTypeSelection,
    pub classification: Classification,
    pub effect: CombinationEffect,
    pub gene_scores: Vec<GeneScorePair>,
    pub combined: Vec<CombinedGeneScore>,
    pub report: Report,
}

#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    tables: &DataTables,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisResult, EngineError> {
    // === Phase 1: Resolve both drugs; a missing drug aborts before any report text ===
    reporter.phase_start("Resolving drugs");
    let (first, second) =
        resolver::resolve_pair(&config.first_agent, &config.second_agent, &tables.agents)?;
    info!(
        first = %first.id,
        second = %second.id,
        "Resolved '{}' and '{}'.",
        first.name,
        second.name
    );
    reporter.phase_finish();

    let mut report = ReportBuilder::new();

    // === Phase 2: Gene overlap ===
    reporter.phase_start("Finding gene overlap");
    let overlap = overlap::find(&first.id, &second.id, &tables.interactions);
    report.push(overlap.report_section(&first, &second));
    reporter.phase_finish();

    // === Phase 3: Interaction types and classification ===
    reporter.phase_start("Classifying combination");
    let first_type = selector::select(&first.id, &tables.interactions);
    let second_type = selector::select(&second.id, &tables.interactions);
    let classification = classifier::classify(
        &first_type.selected,
        &second_type.selected,
        &overlap,
        &tables.rules,
    );
    let effect = classification.effect();
    report.push(classifier::report_section(
        &classification,
        (&first, &first_type),
        (&second, &second_type),
    ));
    reporter.phase_finish();

    // === Phase 4: Score combination ===
    reporter.phase_start("Combining scores");
    let (gene_scores, combined) = if overlap.is_empty() {
        reporter.message(combiner::SKIPPED_NOTE);
        for section in combiner::skipped_sections() {
            report.push(section);
        }
        (Vec::new(), Vec::new())
    } else {
        let gene_scores =
            combiner::pair_scores(&overlap, &first.id, &second.id, &tables.interactions)?;
        let combined = combiner::combine(&gene_scores, effect, reporter);
        report.push(combiner::scores_section(
            &gene_scores,
            &first,
            &second,
            config.score_precision,
        ));
        report.push(combiner::combined_section(
            &combined,
            effect,
            config.score_precision,
        ));
        (gene_scores, combined)
    };
    reporter.phase_finish();

    info!(
        overlap = overlap.len(),
        scored_genes = gene_scores.len(),
        result = classification.label(),
        "Analysis complete."
    );

    Ok(AnalysisResult {
        first,
        second,
        overlap,
        first_type,
        second_type,
        classification,
        effect,
        gene_scores,
        combined,
        report: report.build(),
    })
}
