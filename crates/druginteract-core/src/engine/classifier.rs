use super::overlap::GeneOverlap;
use super::selector::InteractionTypeSelection;
use crate::core::models::agent::ResolvedAgent;
use crate::core::models::effect::CombinationEffect;
use crate::core::models::report::ReportSection;
use crate::core::models::rule::CombinationRule;
use tracing::{debug, info};

pub const SECTION_TITLE: &str = "Combination drugs";
pub const NOT_APPLICABLE_LABEL: &str = "not applicable";
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Outcome of looking up the pair of interaction types in the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The agents share no genes; the rule table was not consulted.
    NotApplicable,
    /// The agents share genes but no rule covers their interaction types.
    Unknown,
    Matched { effect: String, rule_index: usize },
}

impl Classification {
    pub fn label(&self) -> &str {
        match self {
            Self::NotApplicable => NOT_APPLICABLE_LABEL,
            Self::Unknown => UNKNOWN_LABEL,
            Self::Matched { effect, .. } => effect.as_str(),
        }
    }

    pub fn effect(&self) -> CombinationEffect {
        match self {
            Self::NotApplicable | Self::Unknown => CombinationEffect::Unknown,
            Self::Matched { effect, .. } => CombinationEffect::from_label(Some(effect.as_str())),
        }
    }
}

/// Classifies the combination of two interaction types.
///
/// Rules are scanned in table order and the first one matching the pair in either
/// orientation wins. With an empty overlap nothing is scanned.
pub fn classify(
    first_type: &str,
    second_type: &str,
    overlap: &GeneOverlap,
    rules: &[CombinationRule],
) -> Classification {
    if overlap.is_empty() {
        debug!("No gene overlap; skipping rule lookup.");
        return Classification::NotApplicable;
    }

    let classification = rules
        .iter()
        .position(|rule| rule.matches(first_type, second_type))
        .map(|rule_index| Classification::Matched {
            effect: rules[rule_index].effect.clone(),
            rule_index,
        })
        .unwrap_or(Classification::Unknown);

    info!(
        first_type,
        second_type,
        result = classification.label(),
        "Combination classified."
    );
    classification
}

pub fn report_section(
    classification: &Classification,
    first: (&ResolvedAgent, &InteractionTypeSelection),
    second: (&ResolvedAgent, &InteractionTypeSelection),
) -> ReportSection {
    let mut section = ReportSection::new(SECTION_TITLE);
    for (agent, selection) in [first, second] {
        section.push(format!("{} type: {}", agent.name, selection.selected));
        if selection.is_ambiguous() {
            section.push(format!(
                "Note: {} has {} interaction types ({}); the first listed type was used.",
                agent.name,
                selection.distinct_types.len(),
                selection.distinct_types.join(", ")
            ));
        }
    }

    match classification {
        Classification::NotApplicable => {
            section.push("No gene overlap found; skipping combination result.");
        }
        Classification::Unknown => {
            section.push(format!(
                "Combination result is unknown: no rule for {} + {}.",
                first.1.selected, second.1.selected
            ));
        }
        Classification::Matched { effect, .. } => {
            section.push(format!("Combination result: {}", effect));
            section.push(format!("Combination effect: {}", classification.effect()));
        }
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn overlap_of(genes: &[&str]) -> GeneOverlap {
        GeneOverlap {
            first_gene_count: genes.len(),
            second_gene_count: genes.len(),
            genes: genes.iter().map(|g| g.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn rules() -> Vec<CombinationRule> {
        vec![
            CombinationRule::new("agonist", "antagonist", "contraindicated"),
            CombinationRule::new("inhibitor", "substrate", "increased toxicity"),
        ]
    }

    fn selection(selected: &str, types: &[&str]) -> InteractionTypeSelection {
        InteractionTypeSelection {
            agent_id: "D".to_string(),
            selected: selected.to_string(),
            distinct_types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn agent(name: &str) -> ResolvedAgent {
        ResolvedAgent {
            name: name.to_string(),
            id: "D".to_string(),
        }
    }

    #[test]
    fn classify_returns_unknown_without_matching_rule() {
        let result = classify("agonist", "NULL", &overlap_of(&["CYP2C9"]), &rules());
        assert_eq!(result, Classification::Unknown);
        assert_eq!(result.label(), "Unknown");
    }

    #[test]
    fn classify_is_symmetric_for_every_rule() {
        let rules = rules();
        let overlap = overlap_of(&["CYP2C9"]);
        for rule in &rules {
            let forward = classify(&rule.type_a, &rule.type_b, &overlap, &rules);
            let backward = classify(&rule.type_b, &rule.type_a, &overlap, &rules);
            assert_eq!(forward.label(), rule.effect);
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn classify_ignores_case() {
        let result = classify("SUBSTRATE", "Inhibitor", &overlap_of(&["G"]), &rules());
        assert_eq!(result.label(), "increased toxicity");
    }

    #[test]
    fn classify_prefers_first_matching_rule() {
        let rules = vec![
            CombinationRule::new("agonist", "agonist", "enhancing"),
            CombinationRule::new("agonist", "agonist", "opposing"),
        ];
        let result = classify("agonist", "agonist", &overlap_of(&["G"]), &rules);
        assert_eq!(
            result,
            Classification::Matched {
                effect: "enhancing".to_string(),
                rule_index: 0
            }
        );
        assert_eq!(result.effect(), CombinationEffect::Enhancing);
    }

    #[test]
    fn classify_skips_rules_without_overlap() {
        let rules = vec![CombinationRule::new("agonist", "antagonist", "opposing")];
        let result = classify("agonist", "antagonist", &GeneOverlap::default(), &rules);
        assert_eq!(result, Classification::NotApplicable);
        assert_eq!(result.label(), "not applicable");
        assert_eq!(result.effect(), CombinationEffect::Unknown);
    }

    #[test]
    fn report_section_describes_unknown_result() {
        let section = report_section(
            &Classification::Unknown,
            (&agent("clonidine"), &selection("agonist", &["agonist"])),
            (&agent("compro"), &selection("NULL", &["NULL"])),
        );
        let text = section.lines.join("\n");
        assert!(text.contains("clonidine type: agonist"));
        assert!(text.contains("compro type: NULL"));
        assert!(text.to_lowercase().contains("combination result is unknown"));
    }

    #[test]
    fn report_section_flags_ambiguous_types() {
        let section = report_section(
            &Classification::NotApplicable,
            (&agent("a"), &selection("agonist", &["agonist", "inhibitor"])),
            (&agent("b"), &selection("NULL", &["NULL"])),
        );
        assert!(section.lines.iter().any(|l| l.starts_with("Note: a has 2 interaction types")));
        assert!(section
            .lines
            .contains(&"No gene overlap found; skipping combination result.".to_string()));
    }

    #[test]
    fn report_section_shows_matched_effect() {
        let section = report_section(
            &Classification::Matched {
                effect: "opposing".to_string(),
                rule_index: 3,
            },
            (&agent("a"), &selection("agonist", &["agonist"])),
            (&agent("b"), &selection("antagonist", &["antagonist"])),
        );
        assert!(section.lines.contains(&"Combination result: opposing".to_string()));
        assert!(section.lines.contains(&"Combination effect: opposing (-)".to_string()));
    }
}
