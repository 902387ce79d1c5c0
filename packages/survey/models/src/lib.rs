#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Survey dataset and analysis result types for urban public-space indicators.
//!
//! A [`SurveyDataset`] holds a fixed set of categorical [`Indicator`]s, each
//! an ordered list of category frequencies. The analysis pipeline derives
//! [`IndicatorStatistics`], the integrated metrics ([`GreenCoverage`],
//! [`ChildSuitability`]) and the [`PerformanceRow`] matrix, all bundled in a
//! [`SurveyAnalysis`] that the report assembler consumes.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Observed frequency of one category label within an indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Category label as it appears on the survey form.
    pub label: String,
    /// Number of surveyed sites that chose this category.
    pub count: u64,
}

/// A surveyed categorical variable describing one aspect of a public space.
///
/// Category order is significant: it is the order used for percentage
/// tables and for breaking ties when selecting the modal category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    /// Stable key used by analyzers (e.g. `"cantidad_arboles"`).
    pub id: String,
    /// Human-readable name (e.g. "Cantidad Árboles").
    pub name: String,
    /// Category frequencies in survey order.
    pub categories: Vec<CategoryCount>,
}

impl Indicator {
    /// Returns the frequency recorded for `label`, if the category exists.
    #[must_use]
    pub fn count(&self, label: &str) -> Option<u64> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
    }

    /// Returns the sum of all category frequencies, or `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.categories
            .iter()
            .try_fold(0u64, |acc, c| acc.checked_add(c.count))
    }
}

/// The complete survey: metadata plus every indicator in survey order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDataset {
    /// Survey title.
    pub title: String,
    /// Region the surveyed spaces belong to.
    pub region: String,
    /// Fieldwork period (e.g. "Enero 2026").
    pub period: String,
    /// Institution that ran the survey.
    pub institution: String,
    /// Indicators in survey order.
    pub indicators: Vec<Indicator>,
}

impl SurveyDataset {
    /// Looks up an indicator by its id.
    #[must_use]
    pub fn indicator(&self, id: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.id == id)
    }
}

/// One category's frequency and its share of the indicator total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    /// Category label.
    pub label: String,
    /// Observed frequency.
    pub count: u64,
    /// `100 * count / total`.
    pub percentage: f64,
}

/// Descriptive statistics for a single indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorStatistics {
    /// Indicator id.
    pub id: String,
    /// Indicator display name.
    pub name: String,
    /// Total number of responses (sum of category frequencies).
    pub total: u64,
    /// Per-category frequency and percentage, in survey order.
    pub categories: Vec<CategoryShare>,
    /// Category with the highest frequency; earliest category wins ties.
    pub modal_category: String,
    /// Frequency of the modal category.
    pub modal_frequency: u64,
}

impl IndicatorStatistics {
    /// Share of responses that chose the modal category, as a percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn modal_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.modal_frequency as f64 / self.total as f64 * 100.0
    }

    /// Returns the percentage recorded for `label`, if the category exists.
    #[must_use]
    pub fn percentage(&self, label: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.percentage)
    }
}

/// Share of surveyed spaces with at least some tree presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenCoverage {
    /// Spaces reporting "16 o más" or "1-5" trees.
    pub spaces_with_trees: u64,
    /// Total spaces surveyed for the tree-count indicator.
    pub total_spaces: u64,
    /// `100 * spaces_with_trees / total_spaces`.
    pub coverage_percentage: f64,
}

/// Suitability of the surveyed spaces for children's recreation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildSuitability {
    /// Spaces rated "not adequate".
    pub not_adequate: u64,
    /// Spaces rated "ample and adequate".
    pub adequate: u64,
    /// Spaces rated "somewhat limited".
    pub limited: u64,
    /// Total spaces surveyed for the child-suitability indicator.
    pub total_spaces: u64,
    /// Percentage of spaces rated "not adequate".
    pub not_adequate_percentage: f64,
    /// Percentage of spaces rated "ample and adequate".
    pub adequate_percentage: f64,
    /// Percentage of spaces rated "somewhat limited".
    pub limited_percentage: f64,
    /// Critical-deficiency metric: the "not adequate" count.
    pub critical_deficiency: u64,
}

/// Qualitative rating of an indicator from its modal share.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceRating {
    /// Modal share of at least 66%.
    Good,
    /// Modal share of at least 50%.
    Moderate,
    /// Anything below 50%.
    Deficient,
}

impl PerformanceRating {
    /// Minimum modal percentage rated [`Self::Good`].
    pub const GOOD_THRESHOLD: f64 = 66.0;
    /// Minimum modal percentage rated [`Self::Moderate`].
    pub const MODERATE_THRESHOLD: f64 = 50.0;

    /// Rates a modal percentage.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::GOOD_THRESHOLD {
            Self::Good
        } else if percentage >= Self::MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Deficient
        }
    }

    /// Spanish label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Bueno",
            Self::Moderate => "Moderado",
            Self::Deficient => "Deficiente",
        }
    }

    /// Status marker shown next to the label.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Good => "✅",
            Self::Moderate => "⚠️",
            Self::Deficient => "❌",
        }
    }
}

/// One row of the indicator performance matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    /// Indicator display name.
    pub indicator: String,
    /// Modal category.
    pub modal_response: String,
    /// Modal frequency.
    pub modal_frequency: u64,
    /// Indicator total.
    pub total: u64,
    /// Modal frequency as a percentage of the total.
    pub modal_percentage: f64,
    /// Rating derived from `modal_percentage`.
    pub rating: PerformanceRating,
}

/// Recommendation priority tier, from most to least urgent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Tier 1.
    Critical = 1,
    /// Tier 2.
    High = 2,
    /// Tier 3.
    Medium = 3,
    /// Tier 4.
    Low = 4,
}

impl Priority {
    /// Numeric tier (1 = most urgent).
    #[must_use]
    pub const fn tier(self) -> u8 {
        self as u8
    }

    /// Spanish label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Crítica",
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }
}

/// Everything the report needs: survey metadata, per-indicator statistics
/// and the integrated analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnalysis {
    /// Survey title.
    pub title: String,
    /// Region the surveyed spaces belong to.
    pub region: String,
    /// Fieldwork period.
    pub period: String,
    /// Institution that ran the survey.
    pub institution: String,
    /// Statistics per indicator, in survey order.
    pub statistics: Vec<IndicatorStatistics>,
    /// Green-coverage analysis.
    pub green_coverage: GreenCoverage,
    /// Child-suitability analysis.
    pub child_suitability: ChildSuitability,
    /// Indicator performance matrix, in survey order.
    pub performance: Vec<PerformanceRow>,
}

impl SurveyAnalysis {
    /// Number of surveyed spaces, taken as the largest indicator total.
    #[must_use]
    pub fn surveyed_spaces(&self) -> u64 {
        self.statistics.iter().map(|s| s.total).max().unwrap_or(0)
    }
}
