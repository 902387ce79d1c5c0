//! Integrated analyzers.
//!
//! Each analyzer reduces specific categories of one indicator to a summary
//! metric. The labels they read are declared in [`crate::schema`].

use urban_survey_models::{ChildSuitability, GreenCoverage, Indicator, SurveyDataset};

use crate::SurveyError;
use crate::schema::{
    CHILD_ADEQUATE, CHILD_LIMITED, CHILD_NOT_ADEQUATE, CHILD_SUITABILITY, TREE_COUNT,
    TREES_1_TO_5, TREES_16_OR_MORE,
};
use crate::statistics::{indicator_total, percentage};

fn lookup_indicator<'a>(
    dataset: &'a SurveyDataset,
    id: &str,
) -> Result<&'a Indicator, SurveyError> {
    dataset
        .indicator(id)
        .ok_or_else(|| SurveyError::MissingIndicator {
            indicator: id.to_string(),
        })
}

fn lookup_count(indicator: &Indicator, label: &str) -> Result<u64, SurveyError> {
    indicator
        .count(label)
        .ok_or_else(|| SurveyError::MissingCategory {
            indicator: indicator.id.clone(),
            category: label.to_string(),
        })
}

/// Share of spaces with some tree presence ("16 o más" plus "1-5").
///
/// # Errors
///
/// Returns [`SurveyError::MissingIndicator`] or
/// [`SurveyError::MissingCategory`] if the tree-count data lacks the
/// expected labels, or [`SurveyError::ZeroTotal`] if it is empty.
pub fn green_coverage(dataset: &SurveyDataset) -> Result<GreenCoverage, SurveyError> {
    let trees = lookup_indicator(dataset, TREE_COUNT)?;
    let many = lookup_count(trees, TREES_16_OR_MORE)?;
    let few = lookup_count(trees, TREES_1_TO_5)?;
    // Checked total bounds the partial sum below.
    let total = indicator_total(trees)?;

    let spaces_with_trees = many + few;

    Ok(GreenCoverage {
        spaces_with_trees,
        total_spaces: total,
        coverage_percentage: percentage(spaces_with_trees, total),
    })
}

/// Breakdown of child suitability, flagging the "not adequate" count as the
/// critical deficiency.
///
/// # Errors
///
/// Returns [`SurveyError::MissingIndicator`] or
/// [`SurveyError::MissingCategory`] if the child-suitability data lacks the
/// expected labels, or [`SurveyError::ZeroTotal`] if it is empty.
pub fn child_suitability(dataset: &SurveyDataset) -> Result<ChildSuitability, SurveyError> {
    let children = lookup_indicator(dataset, CHILD_SUITABILITY)?;
    let not_adequate = lookup_count(children, CHILD_NOT_ADEQUATE)?;
    let adequate = lookup_count(children, CHILD_ADEQUATE)?;
    let limited = lookup_count(children, CHILD_LIMITED)?;
    let total = indicator_total(children)?;

    Ok(ChildSuitability {
        not_adequate,
        adequate,
        limited,
        total_spaces: total,
        not_adequate_percentage: percentage(not_adequate, total),
        adequate_percentage: percentage(adequate, total),
        limited_percentage: percentage(limited, total),
        critical_deficiency: not_adequate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::survey_dataset;

    const TOLERANCE: f64 = 0.01;

    fn indicator_mut<'a>(dataset: &'a mut SurveyDataset, id: &str) -> &'a mut Indicator {
        dataset.indicators.iter_mut().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn green_coverage_of_builtin_survey() {
        let coverage = green_coverage(&survey_dataset()).unwrap();
        assert_eq!(coverage.spaces_with_trees, 5);
        assert_eq!(coverage.total_spaces, 6);
        assert!((coverage.coverage_percentage - 83.33).abs() < TOLERANCE);
    }

    #[test]
    fn green_coverage_follows_the_data() {
        let mut dataset = survey_dataset();
        let trees = indicator_mut(&mut dataset, TREE_COUNT);
        for category in &mut trees.categories {
            category.count = match category.label.as_str() {
                TREES_16_OR_MORE | TREES_1_TO_5 => 1,
                "6-15" => 4,
                _ => 2,
            };
        }
        let coverage = green_coverage(&dataset).unwrap();
        assert_eq!(coverage.spaces_with_trees, 2);
        assert_eq!(coverage.total_spaces, 8);
        assert!((coverage.coverage_percentage - 25.0).abs() < TOLERANCE);
    }

    #[test]
    fn child_suitability_of_builtin_survey() {
        let children = child_suitability(&survey_dataset()).unwrap();
        assert_eq!(children.total_spaces, 6);
        assert_eq!(children.critical_deficiency, 3);
        assert_eq!(children.adequate, 2);
        assert_eq!(children.limited, 1);
        assert!((children.not_adequate_percentage - 50.0).abs() < TOLERANCE);
        assert!((children.adequate_percentage - 33.33).abs() < TOLERANCE);
        assert!((children.limited_percentage - 16.67).abs() < TOLERANCE);
    }

    #[test]
    fn child_suitability_percentages_sum_to_one_hundred() {
        let children = child_suitability(&survey_dataset()).unwrap();
        let sum = children.not_adequate_percentage
            + children.adequate_percentage
            + children.limited_percentage;
        assert!((sum - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn missing_category_is_reported_by_label() {
        let mut dataset = survey_dataset();
        indicator_mut(&mut dataset, CHILD_SUITABILITY)
            .categories
            .retain(|c| c.label != CHILD_LIMITED);

        match child_suitability(&dataset) {
            Err(SurveyError::MissingCategory {
                indicator,
                category,
            }) => {
                assert_eq!(indicator, CHILD_SUITABILITY);
                assert_eq!(category, CHILD_LIMITED);
            }
            other => panic!("expected missing category, got {other:?}"),
        }
    }

    #[test]
    fn missing_indicator_is_reported() {
        let mut dataset = survey_dataset();
        dataset.indicators.retain(|i| i.id != TREE_COUNT);
        assert!(matches!(
            green_coverage(&dataset),
            Err(SurveyError::MissingIndicator { .. })
        ));
    }

    #[test]
    fn zero_total_is_reported() {
        let mut dataset = survey_dataset();
        for category in &mut indicator_mut(&mut dataset, TREE_COUNT).categories {
            category.count = 0;
        }
        assert!(matches!(
            green_coverage(&dataset),
            Err(SurveyError::ZeroTotal { .. })
        ));
    }
}
