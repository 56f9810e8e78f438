use serde::Deserialize;

/// An undirected rule: the effect of combining an agent of `type_a` with one of `type_b`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CombinationRule {
    #[serde(rename = "drugtype_1")]
    pub type_a: String,
    #[serde(rename = "drugtype_2")]
    pub type_b: String,
    #[serde(rename = "result")]
    pub effect: String,
}

impl CombinationRule {
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["drugtype_1", "drugtype_2", "result"];

    pub fn new(
        type_a: impl Into<String>,
        type_b: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            type_a: type_a.into(),
            type_b: type_b.into(),
            effect: effect.into(),
        }
    }

    /// True if the rule covers the pair in either orientation, ignoring case.
    pub fn matches(&self, first: &str, second: &str) -> bool {
        let eq = |a: &str, b: &str| a.to_lowercase() == b.to_lowercase();
        (eq(&self.type_a, first) && eq(&self.type_b, second))
            || (eq(&self.type_a, second) && eq(&self.type_b, first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_is_symmetric_and_case_insensitive() {
        let rule = CombinationRule::new("agonist", "Antagonist", "opposing");
        assert!(rule.matches("AGONIST", "antagonist"));
        assert!(rule.matches("antagonist", "agonist"));
        assert!(!rule.matches("agonist", "agonist"));
        assert!(!rule.matches("inhibitor", "antagonist"));
    }
}
