use crate::core::models::agent::ResolvedAgent;
use crate::core::models::interaction::InteractionRecord;
use crate::core::models::report::ReportSection;
use std::collections::BTreeSet;
use tracing::info;

pub const SECTION_TITLE: &str = "Find overlap genes";

/// Genes influenced by both agents, plus each agent's own gene count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneOverlap {
    pub first_gene_count: usize,
    pub second_gene_count: usize,
    pub genes: BTreeSet<String>,
}

impl GeneOverlap {
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn contains(&self, gene: &str) -> bool {
        self.genes.contains(gene)
    }

    pub fn report_section(&self, first: &ResolvedAgent, second: &ResolvedAgent) -> ReportSection {
        let mut section = ReportSection::new(SECTION_TITLE)
            .line(format!("Drug 1 input: {} (id: {})", first.name, first.id))
            .line(format!("Drug 2 input: {} (id: {})", second.name, second.id))
            .line(format!(
                "Number of genes for {}: {}",
                first.name, self.first_gene_count
            ))
            .line(format!(
                "Number of genes for {}: {}",
                second.name, self.second_gene_count
            ));

        if self.is_empty() {
            section.push("No overlapping genes found.");
        } else {
            section.push(format!("Number of overlapping genes: {}", self.len()));
            let genes: Vec<&str> = self.genes.iter().map(String::as_str).collect();
            section.push(format!("Overlapping genes: {}", genes.join(", ")));
        }
        section
    }
}

/// Distinct genes with at least one interaction row for `agent_id`.
pub fn gene_set(agent_id: &str, interactions: &[InteractionRecord]) -> BTreeSet<String> {
    interactions
        .iter()
        .filter(|record| record.agent_id == agent_id)
        .map(|record| record.gene.clone())
        .collect()
}

/// Intersects the gene sets of both agents. Symmetric in its agent arguments.
pub fn find(first_id: &str, second_id: &str, interactions: &[InteractionRecord]) -> GeneOverlap {
    #[cfg(feature = "parallel")]
    let (first_genes, second_genes) = rayon::join(
        || gene_set(first_id, interactions),
        || gene_set(second_id, interactions),
    );

    #[cfg(not(feature = "parallel"))]
    let (first_genes, second_genes) = (
        gene_set(first_id, interactions),
        gene_set(second_id, interactions),
    );

    let genes: BTreeSet<String> = first_genes.intersection(&second_genes).cloned().collect();

    info!(
        first_genes = first_genes.len(),
        second_genes = second_genes.len(),
        overlap = genes.len(),
        "Gene overlap computed."
    );

    GeneOverlap {
        first_gene_count: first_genes.len(),
        second_gene_count: second_genes.len(),
        genes,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Two drugs sharing three CYP genes, each with genes of its own.
    pub(crate) fn clonidine_compro_interactions() -> Vec<InteractionRecord> {
        vec![
            InteractionRecord::new("CYP2C9", "agonist", "0.009349657", "D1"),
            InteractionRecord::new("CYP2D6", "agonist", "0.013622434", "D1"),
            InteractionRecord::new("CYP2C19", "agonist", "0.008345148", "D1"),
            InteractionRecord::new("GENE_A", "agonist", "0.001", "D1"),
            InteractionRecord::new("GENE_B", "agonist", "0.002", "D1"),
            InteractionRecord::new("CYP2C9", "NULL", "0.008681824", "D2"),
            InteractionRecord::new("CYP2D6", "NULL", "0.006324701", "D2"),
            InteractionRecord::new("CYP2C19", "NULL", "0.007749066", "D2"),
            InteractionRecord::new("GENE_X", "NULL", "0.004", "D2"),
            InteractionRecord::new("GENE_Y", "NULL", "0.005", "D2"),
            InteractionRecord::new("GENE_Z", "NULL", "0.006", "D2"),
        ]
    }

    fn agent(name: &str, id: &str) -> ResolvedAgent {
        ResolvedAgent {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn find_returns_shared_genes() {
        let overlap = find("D1", "D2", &clonidine_compro_interactions());
        let expected: BTreeSet<String> = ["CYP2C9", "CYP2D6", "CYP2C19"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(overlap.genes, expected);
        assert_eq!(overlap.len(), 3);
        assert_eq!(overlap.first_gene_count, 5);
        assert_eq!(overlap.second_gene_count, 6);
    }

    #[test]
    fn find_is_symmetric() {
        let interactions = clonidine_compro_interactions();
        let forward = find("D1", "D2", &interactions);
        let backward = find("D2", "D1", &interactions);
        assert_eq!(forward.genes, backward.genes);
        assert_eq!(forward.first_gene_count, backward.second_gene_count);
    }

    #[test]
    fn find_is_empty_for_agent_without_rows() {
        let overlap = find("D1", "D404", &clonidine_compro_interactions());
        assert!(overlap.is_empty());
        assert_eq!(overlap.second_gene_count, 0);
    }

    #[test]
    fn gene_set_counts_duplicate_rows_once() {
        let interactions = vec![
            InteractionRecord::new("CYP2C9", "agonist", "0.1", "D1"),
            InteractionRecord::new("CYP2C9", "inhibitor", "0.2", "D1"),
        ];
        assert_eq!(gene_set("D1", &interactions).len(), 1);
    }

    #[test]
    fn report_section_lists_counts_and_genes() {
        let overlap = find("D1", "D2", &clonidine_compro_interactions());
        let section = overlap.report_section(&agent("clonidine", "D1"), &agent("compro", "D2"));
        let text = section.lines.join("\n");
        assert_eq!(section.title, SECTION_TITLE);
        assert!(text.contains("Drug 1 input: clonidine"));
        assert!(text.contains("Drug 2 input: compro"));
        assert!(text.contains("Number of genes for clonidine: 5"));
        assert!(text.contains("Number of overlapping genes: 3"));
        assert!(text.contains("Overlapping genes: CYP2C19, CYP2C9, CYP2D6"));
    }

    #[test]
    fn report_section_notes_missing_overlap() {
        let section = GeneOverlap::default()
            .report_section(&agent("clonidine", "D1"), &agent("other", "D3"));
        assert!(section.lines.iter().any(|l| l == "No overlapping genes found."));
    }
}
