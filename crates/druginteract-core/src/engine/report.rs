use crate::core::models::report::{Report, ReportSection};

/// Collects report sections in pipeline order.
///
/// Owned by a single analysis run; stages hand back their section and the caller
/// pushes it here. [`ReportBuilder::build`] freezes the result.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    sections: Vec<ReportSection>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn build(self) -> Report {
        Report::from_sections(self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_insertion_order() {
        let mut builder = ReportBuilder::new();
        builder.push(ReportSection::new("one"));
        builder.push(ReportSection::new("two").line("x"));

        let report = builder.build();
        let titles: Vec<_> = report.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[test]
    fn empty_builder_yields_empty_report() {
        assert!(ReportBuilder::new().build().sections().is_empty());
    }
}
