//! Survey dataset provider.
//!
//! The field survey is baked into the binary at compile time via
//! [`include_str!`] from `data/survey.toml`. Other datasets with the same
//! TOML schema can be parsed with [`parse_dataset`] or read from disk with
//! [`load_dataset`].

use std::collections::BTreeSet;
use std::path::Path;

use urban_survey_models::SurveyDataset;

use crate::SurveyError;

/// The survey TOML embedded at compile time.
const SURVEY_TOML: &str = include_str!("../data/survey.toml");

/// Returns the built-in survey dataset.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed. The file is compiled into the
/// binary, so a failure here is a development error caught by tests.
#[must_use]
pub fn survey_dataset() -> SurveyDataset {
    parse_dataset(SURVEY_TOML).unwrap_or_else(|e| panic!("Failed to parse survey.toml: {e}"))
}

/// Parses a [`SurveyDataset`] from a TOML string.
///
/// # Errors
///
/// Returns [`SurveyError::Parse`] if the TOML is malformed or missing
/// required fields, and [`SurveyError::InvalidDataset`] if indicator ids or
/// category labels within an indicator are duplicated.
pub fn parse_dataset(toml_str: &str) -> Result<SurveyDataset, SurveyError> {
    let dataset: SurveyDataset = toml::de::from_str(toml_str)?;
    check_unique(&dataset)?;
    Ok(dataset)
}

/// Reads and parses a dataset file.
///
/// # Errors
///
/// Returns [`SurveyError::Io`] if the file cannot be read, otherwise the
/// same errors as [`parse_dataset`].
pub fn load_dataset(path: &Path) -> Result<SurveyDataset, SurveyError> {
    log::info!("Loading survey dataset from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_dataset(&contents)
}

fn check_unique(dataset: &SurveyDataset) -> Result<(), SurveyError> {
    let mut ids = BTreeSet::new();
    for indicator in &dataset.indicators {
        if !ids.insert(indicator.id.as_str()) {
            return Err(SurveyError::InvalidDataset {
                message: format!("duplicate indicator id '{}'", indicator.id),
            });
        }

        let mut labels = BTreeSet::new();
        for category in &indicator.categories {
            if !labels.insert(category.label.as_str()) {
                return Err(SurveyError::InvalidDataset {
                    message: format!(
                        "duplicate category '{}' in indicator '{}'",
                        category.label, indicator.id
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_builtin_survey() {
        let dataset = survey_dataset();
        let ids: Vec<&str> = dataset.indicators.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "calidad_general",
                "seguridad_peatonal",
                "cantidad_arboles",
                "diversidad_especies",
                "sombra_arborea",
                "aptitud_infantil",
            ]
        );
    }

    #[test]
    fn every_indicator_covers_six_sites() {
        for indicator in &survey_dataset().indicators {
            assert_eq!(indicator.total(), Some(6), "{}", indicator.id);
        }
    }

    #[test]
    fn preserves_category_order() {
        let dataset = survey_dataset();
        let trees = dataset.indicator("cantidad_arboles").unwrap();
        let labels: Vec<&str> = trees.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["16 o más", "1-5", "6-15", "0"]);
    }

    #[test]
    fn child_suitability_literal_counts() {
        let dataset = survey_dataset();
        let children = dataset.indicator("aptitud_infantil").unwrap();
        assert_eq!(children.count("No es adecuado"), Some(3));
        assert_eq!(children.count("Sí, es amplio y adecuado"), Some(2));
        assert_eq!(children.count("Es algo limitado"), Some(1));
    }

    #[test]
    fn rejects_duplicate_indicator_ids() {
        let toml = r#"
            title = "t"
            region = "r"
            period = "p"
            institution = "i"

            [[indicators]]
            id = "a"
            name = "A"
            categories = [{ label = "x", count = 1 }]

            [[indicators]]
            id = "a"
            name = "A again"
            categories = [{ label = "x", count = 1 }]
        "#;
        assert!(matches!(
            parse_dataset(toml),
            Err(SurveyError::InvalidDataset { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_category_labels() {
        let toml = r#"
            title = "t"
            region = "r"
            period = "p"
            institution = "i"

            [[indicators]]
            id = "a"
            name = "A"
            categories = [{ label = "x", count = 1 }, { label = "x", count = 2 }]
        "#;
        let err = parse_dataset(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate category 'x'"), "{err}");
    }

    #[test]
    fn rejects_negative_counts() {
        let toml = r#"
            title = "t"
            region = "r"
            period = "p"
            institution = "i"

            [[indicators]]
            id = "a"
            name = "A"
            categories = [{ label = "x", count = -1 }]
        "#;
        assert!(matches!(parse_dataset(toml), Err(SurveyError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dataset(Path::new("/nonexistent/survey.toml")).unwrap_err();
        assert!(matches!(err, SurveyError::Io(_)));
    }
}
