//! Indicator performance matrix: each indicator's modal response rated by
//! its share of responses.

use urban_survey_models::{IndicatorStatistics, PerformanceRating, PerformanceRow};

/// Builds one [`PerformanceRow`] per indicator, in input order.
#[must_use]
pub fn performance_matrix(statistics: &[IndicatorStatistics]) -> Vec<PerformanceRow> {
    statistics
        .iter()
        .map(|stats| {
            let modal_percentage = stats.modal_percentage();
            PerformanceRow {
                indicator: stats.name.clone(),
                modal_response: stats.modal_category.clone(),
                modal_frequency: stats.modal_frequency,
                total: stats.total,
                modal_percentage,
                rating: PerformanceRating::from_percentage(modal_percentage),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::survey_dataset;
    use crate::statistics::calculate_statistics;

    #[test]
    fn rates_builtin_survey() {
        let stats = calculate_statistics(&survey_dataset()).unwrap();
        let matrix = performance_matrix(&stats);
        let ratings: Vec<(&str, PerformanceRating)> = matrix
            .iter()
            .map(|row| (row.indicator.as_str(), row.rating))
            .collect();

        assert_eq!(
            ratings,
            vec![
                ("Calidad General", PerformanceRating::Moderate),
                ("Seguridad Peatonal", PerformanceRating::Good),
                ("Cantidad Árboles", PerformanceRating::Moderate),
                ("Diversidad Especies", PerformanceRating::Deficient),
                ("Sombra Arbórea", PerformanceRating::Good),
                ("Aptitud Infantil", PerformanceRating::Moderate),
            ]
        );
    }

    #[test]
    fn rows_carry_modal_response() {
        let stats = calculate_statistics(&survey_dataset()).unwrap();
        let matrix = performance_matrix(&stats);
        let shade = &matrix[4];
        assert_eq!(shade.modal_response, "Sí, la mayoría");
        assert_eq!(shade.modal_frequency, 4);
        assert_eq!(shade.total, 6);
    }
}
