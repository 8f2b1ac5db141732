//! Configuration types for comparison methods

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data type of the column under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Continuous or discrete numbers
    Numeric,
    /// Ordered categories
    Ordinal,
    /// Unordered categories
    Categorical,
    /// True/false values
    Boolean,
    /// Dates and timestamps
    Temporal,
    /// Free-form text
    Text,
}

impl ColumnType {
    /// Get the name of this column type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Ordinal => "ordinal",
            Self::Categorical => "categorical",
            Self::Boolean => "boolean",
            Self::Temporal => "temporal",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Statistical test used to compare groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMethod {
    /// Student's/Welch's t-test (two groups)
    TTest,

    /// One-way analysis of variance
    Anova,

    /// Mann-Whitney U rank test (two groups)
    MannWhitneyU,

    /// Kruskal-Wallis H rank test
    KruskalWallis,

    /// Chi-squared test of independence
    ChiSquared,
}

impl ComparisonMethod {
    /// User-facing name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::TTest => "T-Test",
            Self::Anova => "ANOVA",
            Self::MannWhitneyU => "Mann-Whitney U Test",
            Self::KruskalWallis => "Kruskal-Wallis H Test",
            Self::ChiSquared => "Chi-Squared Test",
        }
    }

    /// Column types this method can compare
    pub fn supported_types(&self) -> &'static [ColumnType] {
        match self {
            Self::TTest | Self::Anova => &[ColumnType::Numeric],
            Self::MannWhitneyU | Self::KruskalWallis => &[
                ColumnType::Numeric,
                ColumnType::Ordinal,
                ColumnType::Temporal,
            ],
            Self::ChiSquared => &[
                ColumnType::Categorical,
                ColumnType::Ordinal,
                ColumnType::Boolean,
            ],
        }
    }

    pub fn supports(&self, column_type: ColumnType) -> bool {
        self.supported_types().contains(&column_type)
    }

    /// Whether the groups must not share any rows
    ///
    /// Every method here is an independent-samples test.
    pub fn requires_mutually_exclusive(&self) -> bool {
        match self {
            Self::TTest
            | Self::Anova
            | Self::MannWhitneyU
            | Self::KruskalWallis
            | Self::ChiSquared => true,
        }
    }
}

impl Default for ComparisonMethod {
    fn default() -> Self {
        Self::TTest
    }
}

impl fmt::Display for ComparisonMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_support() {
        assert!(ComparisonMethod::TTest.supports(ColumnType::Numeric));
        assert!(!ComparisonMethod::TTest.supports(ColumnType::Text));
        assert!(ComparisonMethod::MannWhitneyU.supports(ColumnType::Ordinal));
        assert!(ComparisonMethod::ChiSquared.supports(ColumnType::Boolean));
        assert!(!ComparisonMethod::ChiSquared.supports(ColumnType::Numeric));
    }

    #[test]
    fn test_no_method_supports_text() {
        let methods = [
            ComparisonMethod::TTest,
            ComparisonMethod::Anova,
            ComparisonMethod::MannWhitneyU,
            ComparisonMethod::KruskalWallis,
            ComparisonMethod::ChiSquared,
        ];
        for method in methods {
            assert!(!method.supports(ColumnType::Text), "{method} should reject text");
            assert!(method.requires_mutually_exclusive());
        }
    }

    #[test]
    fn test_serde_names() {
        let method: ComparisonMethod = serde_json::from_str("\"mann_whitney_u\"").unwrap();
        assert_eq!(method, ComparisonMethod::MannWhitneyU);

        let column: ColumnType = serde_json::from_str("\"categorical\"").unwrap();
        assert_eq!(column, ColumnType::Categorical);
        assert_eq!(serde_json::to_string(&ColumnType::Numeric).unwrap(), "\"numeric\"");
    }

    #[test]
    fn test_defaults_and_display() {
        assert_eq!(ComparisonMethod::default(), ComparisonMethod::TTest);
        assert_eq!(ComparisonMethod::Anova.to_string(), "ANOVA");
        assert_eq!(ColumnType::Temporal.to_string(), "temporal");
    }
}
