use druginteract::engine::config::DEFAULT_SCORE_PRECISION;

pub struct DefaultsConfig {
    pub interactions: &'static str,
    pub drugs: &'static str,
    pub combinations: &'static str,
    pub precision: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            interactions: "data/prepared/interactions.tsv",
            drugs: "data/prepared/drugs.tsv",
            combinations: "data/drug_combinations.tsv",
            precision: DEFAULT_SCORE_PRECISION,
        }
    }
}
