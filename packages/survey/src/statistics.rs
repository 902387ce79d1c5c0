//! Per-indicator descriptive statistics.

use urban_survey_models::{CategoryShare, Indicator, IndicatorStatistics, SurveyDataset};

use crate::SurveyError;

/// Sums the category frequencies of `indicator`, rejecting empty and
/// overflowing totals.
///
/// # Errors
///
/// Returns [`SurveyError::ZeroTotal`] if the indicator has no observations
/// and [`SurveyError::TotalOverflow`] if the sum does not fit in a `u64`.
pub fn indicator_total(indicator: &Indicator) -> Result<u64, SurveyError> {
    match indicator.total() {
        Some(0) => Err(SurveyError::ZeroTotal {
            indicator: indicator.id.clone(),
        }),
        Some(total) => Ok(total),
        None => Err(SurveyError::TotalOverflow {
            indicator: indicator.id.clone(),
        }),
    }
}

/// `100 * part / total`. Callers guarantee `total > 0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: u64, total: u64) -> f64 {
    part as f64 / total as f64 * 100.0
}

/// Computes total, per-category percentages and the modal category.
///
/// Ties for the modal category go to the category listed first.
///
/// # Errors
///
/// Returns an error if the indicator total is zero or overflows.
pub fn indicator_statistics(indicator: &Indicator) -> Result<IndicatorStatistics, SurveyError> {
    let total = indicator_total(indicator)?;

    let categories: Vec<CategoryShare> = indicator
        .categories
        .iter()
        .map(|c| CategoryShare {
            label: c.label.clone(),
            count: c.count,
            percentage: percentage(c.count, total),
        })
        .collect();

    // Strictly-greater comparison keeps the first of equal maxima.
    let modal = indicator
        .categories
        .iter()
        .reduce(|best, c| if c.count > best.count { c } else { best })
        .ok_or_else(|| SurveyError::ZeroTotal {
            indicator: indicator.id.clone(),
        })?;

    log::debug!(
        "{}: total={total} modal='{}' ({})",
        indicator.id,
        modal.label,
        modal.count
    );

    Ok(IndicatorStatistics {
        id: indicator.id.clone(),
        name: indicator.name.clone(),
        total,
        categories,
        modal_category: modal.label.clone(),
        modal_frequency: modal.count,
    })
}

/// Computes statistics for every indicator in dataset order.
///
/// # Errors
///
/// Returns the first error encountered; no partial results are returned.
pub fn calculate_statistics(
    dataset: &SurveyDataset,
) -> Result<Vec<IndicatorStatistics>, SurveyError> {
    dataset.indicators.iter().map(indicator_statistics).collect()
}
