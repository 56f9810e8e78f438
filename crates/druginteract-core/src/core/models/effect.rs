use std::fmt;

/// How the interaction types of two agents combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinationEffect {
    Enhancing,
    Opposing,
    Synergistic,
    Unknown,
}

/// The outcome of combining two per-gene scores under a [`CombinationEffect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombinedScore {
    Increased(f64),
    Decreased(f64),
    /// The effect is unknown, so both readings are kept.
    Ambiguous { sum: f64, difference: f64 },
}

impl CombinationEffect {
    /// Classifies a free-text effect label by keyword, ignoring case.
    ///
    /// `synerg` is checked first so that labels such as "synergetisch" are not
    /// shadowed by a more generic keyword.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Unknown;
        };
        let label = label.to_lowercase();
        if label.contains("synerg") {
            Self::Synergistic
        } else if label.contains("enhanc") {
            Self::Enhancing
        } else if label.contains("oppos") {
            Self::Opposing
        } else {
            Self::Unknown
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Enhancing | Self::Synergistic => "+",
            Self::Opposing => "-",
            Self::Unknown => "+/-",
        }
    }

    /// Extra remark shown next to the symbol.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            Self::Synergistic => {
                Some("the combined effect may be stronger than the sum of both drugs")
            }
            Self::Enhancing | Self::Opposing | Self::Unknown => None,
        }
    }

    pub fn combine(&self, score_first: f64, score_second: f64) -> CombinedScore {
        match self {
            Self::Enhancing | Self::Synergistic => CombinedScore::Increased(score_first + score_second),
            Self::Opposing => CombinedScore::Decreased(score_first - score_second),
            Self::Unknown => CombinedScore::Ambiguous {
                sum: score_first + score_second,
                difference: score_first - score_second,
            },
        }
    }
}

impl fmt::Display for CombinationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enhancing => "enhancing",
            Self::Opposing => "opposing",
            Self::Synergistic => "synergistic",
            Self::Unknown => "unknown",
        };
        write!(f, "{} ({})", name, self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn from_label_matches_keywords_case_insensitively() {
        assert_eq!(CombinationEffect::from_label(Some("Enhancing")), CombinationEffect::Enhancing);
        assert_eq!(
            CombinationEffect::from_label(Some("strongly OPPOSING")),
            CombinationEffect::Opposing
        );
        assert_eq!(
            CombinationEffect::from_label(Some("synergetisch")),
            CombinationEffect::Synergistic
        );
        assert_eq!(
            CombinationEffect::from_label(Some("Synergistic")),
            CombinationEffect::Synergistic
        );
    }

    #[test]
    fn from_label_falls_back_to_unknown() {
        assert_eq!(CombinationEffect::from_label(None), CombinationEffect::Unknown);
        assert_eq!(
            CombinationEffect::from_label(Some("contraindicated")),
            CombinationEffect::Unknown
        );
        assert_eq!(CombinationEffect::from_label(Some("Unknown")), CombinationEffect::Unknown);
    }

    #[test]
    fn symbols_match_effects() {
        assert_eq!(CombinationEffect::Enhancing.symbol(), "+");
        assert_eq!(CombinationEffect::Opposing.symbol(), "-");
        assert_eq!(CombinationEffect::Synergistic.symbol(), "+");
        assert!(CombinationEffect::Synergistic.note().is_some());
        assert_eq!(CombinationEffect::Unknown.symbol(), "+/-");
    }

    #[test]
    fn enhancing_and_synergistic_add_scores() {
        for effect in [CombinationEffect::Enhancing, CombinationEffect::Synergistic] {
            match effect.combine(0.5, 0.3) {
                CombinedScore::Increased(value) => assert!((value - 0.8).abs() < EPS),
                other => panic!("unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn opposing_subtracts_second_from_first() {
        match CombinationEffect::Opposing.combine(0.5, 0.3) {
            CombinedScore::Decreased(value) => assert!((value - 0.2).abs() < EPS),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn unknown_keeps_both_readings() {
        match CombinationEffect::Unknown.combine(0.5, 0.3) {
            CombinedScore::Ambiguous { sum, difference } => {
                assert!((sum - 0.8).abs() < EPS);
                assert!((difference - 0.2).abs() < EPS);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
