#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Markdown technical report for the urban public-space survey.
//!
//! [`render_markdown`] turns a [`SurveyAnalysis`] into the technical
//! report: metadata, executive summary, per-indicator statistics tables,
//! the performance matrix, the integrated analyses, the prioritized
//! recommendations and the conclusions. Rendering is pure: the same
//! analysis and [`ReportOptions`] always produce the same bytes.

pub mod content;
pub mod date;

use std::fmt;

use chrono::NaiveDate;
use urban_survey_models::{IndicatorStatistics, SurveyAnalysis};

use crate::content::{CONCLUSIONS, HEADLINES, RECOMMENDATIONS};

/// File name the report is written under.
pub const REPORT_FILE_NAME: &str = "REPORTE_TECNICO_ESTADISTICO.md";

/// Report version stamped in the footer.
pub const REPORT_VERSION: &str = "1.0";

/// Per-run report settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Date printed as the generation date.
    pub generated_on: NaiveDate,
    /// Version stamped in the footer.
    pub version: String,
}

impl ReportOptions {
    /// Options for a report generated on `generated_on` at the current
    /// [`REPORT_VERSION`].
    #[must_use]
    pub fn new(generated_on: NaiveDate) -> Self {
        Self {
            generated_on,
            version: REPORT_VERSION.to_string(),
        }
    }
}

/// A report ready to be formatted as Markdown.
pub struct MarkdownReport<'a> {
    analysis: &'a SurveyAnalysis,
    options: &'a ReportOptions,
}

impl<'a> MarkdownReport<'a> {
    /// Wraps an analysis for rendering.
    #[must_use]
    pub const fn new(analysis: &'a SurveyAnalysis, options: &'a ReportOptions) -> Self {
        Self { analysis, options }
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.analysis;
        writeln!(f)?;
        writeln!(f, "# 📊 REPORTE TÉCNICO: ANÁLISIS ESTADÍSTICO INTEGRADO")?;
        writeln!(f, "## {} - {}", a.title, a.region)?;
        writeln!(f)?;
        writeln!(
            f,
            "**Fecha de generación:** {}  ",
            date::spanish_long_date(self.options.generated_on)
        )?;
        writeln!(f, "**Institución:** {}  ", a.institution)?;
        writeln!(f, "**Período:** {}  ", a.period)?;
        writeln!(
            f,
            "**Cobertura:** {} espacios públicos urbanos  ",
            a.surveyed_spaces()
        )?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 📈 RESUMEN EJECUTIVO")?;
        writeln!(f)?;
        writeln!(
            f,
            "El análisis integra datos de terreno (Survey123), análisis espectral (NDVI Sentinel-2) y "
        )?;
        writeln!(
            f,
            "evaluación visual de infraestructura verde. Se evaluaron **{} espacios públicos** con **{}% ",
            self.analysis.surveyed_spaces(),
            format_percentage(data_completeness(self.analysis))
        )?;
        writeln!(f, "de completitud de datos**.")?;
        writeln!(f)?;
        writeln!(f, "### Hallazgos Principales")?;
        writeln!(f)?;
        for (i, headline) in HEADLINES.iter().enumerate() {
            writeln!(f, "{}. {headline}", i + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn write_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 📋 ESTADÍSTICAS DESCRIPTIVAS POR INDICADOR")?;
        writeln!(f)?;
        for stats in &self.analysis.statistics {
            write_indicator(f, stats)?;
        }
        Ok(())
    }

    fn write_performance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## 🎯 MATRIZ DE DESEMPEÑO")?;
        writeln!(f)?;
        writeln!(
            f,
            "| Indicador | Respuesta Modal | Frecuencia | Porcentaje | Evaluación |"
        )?;
        writeln!(
            f,
            "|-----------|-----------------|------------|------------|------------|"
        )?;
        for row in &self.analysis.performance {
            writeln!(
                f,
                "| {} | {} | {}/{} | {:.1}% | {} {} |",
                row.indicator,
                row.modal_response,
                row.modal_frequency,
                row.total,
                row.modal_percentage,
                row.rating.symbol(),
                row.rating.label()
            )?;
        }
        writeln!(f)
    }

    fn write_integrated(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let green = &self.analysis.green_coverage;
        let children = &self.analysis.child_suitability;

        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## 🌳 ANÁLISIS INTEGRADOS")?;
        writeln!(f)?;
        writeln!(f, "### Cobertura Verde")?;
        writeln!(
            f,
            "- Espacios **CON vegetación arbórea:** {}/{} ({:.1}%)",
            green.spaces_with_trees, green.total_spaces, green.coverage_percentage
        )?;
        writeln!(
            f,
            "- Indicador: Cobertura verde presente en **{:.1}%** de espacios evaluados",
            green.coverage_percentage
        )?;
        writeln!(f)?;
        writeln!(f, "### Seguridad Infantil (Crítica)")?;
        writeln!(
            f,
            "- Espacios **NO ADECUADOS:** {}/{} ({:.1}%) ⚠️",
            children.critical_deficiency, children.total_spaces, children.not_adequate_percentage
        )?;
        writeln!(
            f,
            "- Espacios **ADECUADOS:** {}/{} ({:.1}%)",
            children.adequate, children.total_spaces, children.adequate_percentage
        )?;
        writeln!(
            f,
            "- Espacios **LIMITADOS:** {}/{} ({:.1}%)",
            children.limited, children.total_spaces, children.limited_percentage
        )?;
        writeln!(
            f,
            "- **Conclusión:** Déficit crítico en infraestructura lúdica infantil"
        )?;
        writeln!(f)
    }

    fn write_recommendations(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## 💡 RECOMENDACIONES")?;
        for rec in RECOMMENDATIONS {
            writeln!(f)?;
            writeln!(
                f,
                "### Prioridad {} ({}): {}",
                rec.priority.tier(),
                rec.priority.label(),
                rec.title
            )?;
            writeln!(f, "{}", rec.rationale)?;
            for action in rec.actions {
                writeln!(f, "- {action}")?;
            }
        }
        writeln!(f)
    }

    fn write_conclusions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## ✅ CONCLUSIONES")?;
        for paragraph in CONCLUSIONS {
            writeln!(f)?;
            writeln!(f, "{paragraph}")?;
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "**Reporte generado automáticamente**  ")?;
        writeln!(f, "**Versión:** {}  ", self.options.version)?;
        writeln!(f, "**Validación:** ✅ Completado  ")
    }
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_summary(f)?;
        self.write_statistics(f)?;
        self.write_performance(f)?;
        self.write_integrated(f)?;
        Self::write_recommendations(f)?;
        self.write_conclusions(f)
    }
}

fn write_indicator(f: &mut fmt::Formatter<'_>, stats: &IndicatorStatistics) -> fmt::Result {
    writeln!(f, "### {}", stats.name)?;
    writeln!(f)?;
    writeln!(f, "**Respuesta modal:** {}  ", stats.modal_category)?;
    writeln!(
        f,
        "**Frecuencia modal:** {}/{} ({:.1}%)",
        stats.modal_frequency,
        stats.total,
        stats.modal_percentage()
    )?;
    writeln!(f)?;
    writeln!(f, "| Categoría | Frecuencia | Porcentaje |")?;
    writeln!(f, "|-----------|------------|------------|")?;
    for category in &stats.categories {
        writeln!(
            f,
            "| {} | {} | {:.2}% |",
            category.label, category.count, category.percentage
        )?;
    }
    writeln!(f)
}

/// Share of expected responses actually recorded across all indicators,
/// taking the largest indicator total as the number of surveyed spaces.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn data_completeness(analysis: &SurveyAnalysis) -> f64 {
    let spaces = analysis.surveyed_spaces();
    let expected = spaces.saturating_mul(analysis.statistics.len() as u64);
    if expected == 0 {
        return 0.0;
    }
    let recorded: u64 = analysis.statistics.iter().map(|s| s.total).sum();
    recorded as f64 / expected as f64 * 100.0
}

/// Formats a percentage without trailing zeros ("100", "83.33").
fn format_percentage(value: f64) -> String {
    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Renders the full Markdown report.
#[must_use]
pub fn render_markdown(analysis: &SurveyAnalysis, options: &ReportOptions) -> String {
    let report = MarkdownReport::new(analysis, options).to_string();
    log::debug!(
        "Rendered report: {} indicators, {} bytes",
        analysis.statistics.len(),
        report.len()
    );
    report
}
