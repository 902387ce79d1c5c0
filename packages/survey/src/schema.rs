//! Indicator schemas the integrated analyzers depend on.
//!
//! Analyzers read specific category labels of specific indicators. Rather
//! than failing on the first missing key deep inside an analyzer,
//! [`validate`] checks every declared schema up front and reports all
//! absent labels at once.

use urban_survey_models::{Indicator, SurveyDataset};

use crate::SurveyError;

/// Tree-count indicator id.
pub const TREE_COUNT: &str = "cantidad_arboles";
/// Tree-count category: 16 or more trees.
pub const TREES_16_OR_MORE: &str = "16 o más";
/// Tree-count category: 1 to 5 trees.
pub const TREES_1_TO_5: &str = "1-5";

/// Child-suitability indicator id.
pub const CHILD_SUITABILITY: &str = "aptitud_infantil";
/// Child-suitability category: not adequate.
pub const CHILD_NOT_ADEQUATE: &str = "No es adecuado";
/// Child-suitability category: ample and adequate.
pub const CHILD_ADEQUATE: &str = "Sí, es amplio y adecuado";
/// Child-suitability category: somewhat limited.
pub const CHILD_LIMITED: &str = "Es algo limitado";

/// The categories one indicator must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSchema {
    /// Indicator id.
    pub indicator: &'static str,
    /// Category labels that must be present.
    pub categories: &'static [&'static str],
}

/// Schemas required by the built-in analyzers.
pub const ANALYZER_SCHEMAS: &[IndicatorSchema] = &[
    IndicatorSchema {
        indicator: TREE_COUNT,
        categories: &[TREES_16_OR_MORE, TREES_1_TO_5],
    },
    IndicatorSchema {
        indicator: CHILD_SUITABILITY,
        categories: &[CHILD_NOT_ADEQUATE, CHILD_ADEQUATE, CHILD_LIMITED],
    },
];

impl IndicatorSchema {
    /// Returns the expected labels absent from `indicator`, in schema order.
    #[must_use]
    pub fn missing_categories(&self, indicator: &Indicator) -> Vec<String> {
        self.categories
            .iter()
            .filter(|label| indicator.count(label).is_none())
            .map(ToString::to_string)
            .collect()
    }

    /// Checks this schema against `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::MissingIndicator`] if the indicator is absent
    /// and [`SurveyError::SchemaMismatch`] if any label is absent.
    pub fn check(&self, dataset: &SurveyDataset) -> Result<(), SurveyError> {
        let indicator =
            dataset
                .indicator(self.indicator)
                .ok_or_else(|| SurveyError::MissingIndicator {
                    indicator: self.indicator.to_string(),
                })?;

        let missing = self.missing_categories(indicator);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SurveyError::SchemaMismatch {
                indicator: self.indicator.to_string(),
                missing,
            })
        }
    }
}

/// Validates `dataset` against every analyzer schema.
///
/// # Errors
///
/// Returns the first schema violation found, in [`ANALYZER_SCHEMAS`] order.
pub fn validate(dataset: &SurveyDataset) -> Result<(), SurveyError> {
    for schema in ANALYZER_SCHEMAS {
        schema.check(dataset)?;
        log::debug!("Indicator '{}' matches analyzer schema", schema.indicator);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::survey_dataset;

    #[test]
    fn builtin_survey_matches_schemas() {
        validate(&survey_dataset()).unwrap();
    }

    #[test]
    fn reports_every_missing_label() {
        let mut dataset = survey_dataset();
        let children = dataset
            .indicators
            .iter_mut()
            .find(|i| i.id == CHILD_SUITABILITY)
            .unwrap();
        children
            .categories
            .retain(|c| c.label != CHILD_ADEQUATE && c.label != CHILD_LIMITED);

        match validate(&dataset) {
            Err(SurveyError::SchemaMismatch { indicator, missing }) => {
                assert_eq!(indicator, CHILD_SUITABILITY);
                assert_eq!(missing, vec![CHILD_ADEQUATE, CHILD_LIMITED]);
            }
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }

    #[test]
    fn reports_missing_indicator() {
        let mut dataset = survey_dataset();
        dataset.indicators.retain(|i| i.id != TREE_COUNT);
        assert!(matches!(
            validate(&dataset),
            Err(SurveyError::MissingIndicator { indicator }) if indicator == TREE_COUNT
        ));
    }

    #[test]
    fn extra_categories_are_allowed() {
        let mut dataset = survey_dataset();
        let trees = dataset
            .indicators
            .iter_mut()
            .find(|i| i.id == TREE_COUNT)
            .unwrap();
        trees.categories.push(urban_survey_models::CategoryCount {
            label: "No sabe".to_string(),
            count: 0,
        });
        validate(&dataset).unwrap();
    }
}
