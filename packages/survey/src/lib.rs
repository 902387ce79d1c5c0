#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Descriptive statistics for the urban public-space survey.
//!
//! The pipeline is strictly linear: the [`dataset`] provider supplies the
//! indicator frequencies, [`statistics`] derives totals, percentages and
//! modal categories, [`analyzers`] reduce specific indicators to integrated
//! metrics, and [`performance`] rates each indicator. [`analyze`] runs all
//! of it and returns a single [`SurveyAnalysis`] or the first error.

pub mod analyzers;
pub mod dataset;
pub mod performance;
pub mod schema;
pub mod statistics;

use urban_survey_models::{SurveyAnalysis, SurveyDataset};

/// Errors that can occur while loading or analyzing survey data.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// An analyzer needs an indicator the dataset does not have.
    #[error("Missing indicator '{indicator}'")]
    MissingIndicator {
        /// Indicator id that was looked up.
        indicator: String,
    },

    /// An analyzer needs a category label the indicator does not have.
    #[error("Indicator '{indicator}' has no category '{category}'")]
    MissingCategory {
        /// Indicator id.
        indicator: String,
        /// Category label that was looked up.
        category: String,
    },

    /// Schema validation found labels the analyzers depend on missing.
    #[error("Indicator '{indicator}' does not match the expected schema, missing: {}", .missing.join(", "))]
    SchemaMismatch {
        /// Indicator id.
        indicator: String,
        /// Every expected label that was absent.
        missing: Vec<String>,
    },

    /// The indicator has no recorded observations.
    #[error("Indicator '{indicator}' has a total of zero responses")]
    ZeroTotal {
        /// Indicator id.
        indicator: String,
    },

    /// Category frequencies do not fit in a `u64` when summed.
    #[error("Indicator '{indicator}' total overflows")]
    TotalOverflow {
        /// Indicator id.
        indicator: String,
    },

    /// The dataset document is structurally valid TOML but semantically wrong.
    #[error("Invalid dataset: {message}")]
    InvalidDataset {
        /// Description of what went wrong.
        message: String,
    },

    /// The dataset document is not valid TOML for the dataset schema.
    #[error("Dataset parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// I/O error reading a dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the whole analysis over `dataset`.
///
/// Validates the analyzer schemas first, then computes statistics, the
/// integrated analyses and the performance matrix. No partial result is
/// produced: the first error aborts the run.
///
/// # Errors
///
/// Returns [`SurveyError`] if the dataset lacks an indicator or category the
/// analyzers depend on, or if any indicator has a zero total.
pub fn analyze(dataset: &SurveyDataset) -> Result<SurveyAnalysis, SurveyError> {
    schema::validate(dataset)?;

    log::info!(
        "Calculating statistics for {} indicators",
        dataset.indicators.len()
    );
    let statistics = statistics::calculate_statistics(dataset)?;

    log::info!("Running integrated analyses");
    let green_coverage = analyzers::green_coverage(dataset)?;
    let child_suitability = analyzers::child_suitability(dataset)?;
    log::info!(
        "Green coverage: {:.1}%, children not adequate: {:.1}%",
        green_coverage.coverage_percentage,
        child_suitability.not_adequate_percentage
    );

    let performance = performance::performance_matrix(&statistics);

    Ok(SurveyAnalysis {
        title: dataset.title.clone(),
        region: dataset.region.clone(),
        period: dataset.period.clone(),
        institution: dataset.institution.clone(),
        statistics,
        green_coverage,
        child_suitability,
        performance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzes_builtin_survey() {
        let analysis = analyze(&dataset::survey_dataset()).unwrap();
        assert_eq!(analysis.statistics.len(), 6);
        assert_eq!(analysis.performance.len(), 6);
        assert_eq!(analysis.surveyed_spaces(), 6);
        assert_eq!(analysis.green_coverage.spaces_with_trees, 5);
        assert_eq!(analysis.child_suitability.critical_deficiency, 3);
        assert_eq!(analysis.region, "Región Metropolitana de Santiago");
    }

    #[test]
    fn analysis_is_deterministic() {
        let dataset = dataset::survey_dataset();
        assert_eq!(analyze(&dataset).unwrap(), analyze(&dataset).unwrap());
    }

    #[test]
    fn zero_total_aborts_the_run() {
        let mut dataset = dataset::survey_dataset();
        for category in &mut dataset.indicators[0].categories {
            category.count = 0;
        }
        let err = analyze(&dataset).unwrap_err();
        assert!(
            matches!(&err, SurveyError::ZeroTotal { indicator } if indicator == "calidad_general"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn schema_mismatch_aborts_before_statistics() {
        let mut dataset = dataset::survey_dataset();
        dataset.indicators.retain(|i| i.id != schema::CHILD_SUITABILITY);
        assert!(matches!(
            analyze(&dataset),
            Err(SurveyError::MissingIndicator { .. })
        ));
    }
}
