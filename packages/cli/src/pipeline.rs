//! Pipeline orchestrator: dataset -> statistics -> analyses -> artifacts.
//!
//! Each stage advances the stage bar by one. Artifacts are only written
//! after the whole analysis succeeds, so a failing run leaves nothing
//! behind.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;
use urban_survey::{SurveyError, analyze, dataset};
use urban_survey_cli_utils::{MultiProgress, ProgressCallback};
use urban_survey_models::{SurveyAnalysis, SurveyDataset};
use urban_survey_report::{REPORT_FILE_NAME, ReportOptions, render_markdown};

/// File name of the JSON export.
pub const EXPORT_FILE_NAME: &str = "estadisticas.json";

/// What a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Markdown technical report.
    Report,
    /// Statistics summary on stdout.
    Stats,
    /// JSON export of the full analysis.
    Export,
}

impl Artifact {
    #[must_use]
    const fn label(self) -> &'static str {
        match self {
            Self::Report => "Writing report",
            Self::Stats => "Printing statistics",
            Self::Export => "Exporting JSON",
        }
    }
}

/// Run settings gathered from the command line.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Dataset file; the built-in survey when `None`.
    pub dataset: Option<PathBuf>,
    /// Directory artifacts are written to.
    pub output_dir: PathBuf,
    /// Date printed in the report.
    pub generated_on: NaiveDate,
}

/// Loads the configured dataset.
///
/// # Errors
///
/// Returns [`SurveyError`] if the dataset file cannot be read or parsed.
pub fn load(config: &PipelineConfig) -> Result<SurveyDataset, SurveyError> {
    config.dataset.as_deref().map_or_else(
        || {
            log::info!("Using built-in survey dataset");
            Ok(dataset::survey_dataset())
        },
        dataset::load_dataset,
    )
}

/// Runs the pipeline and produces `artifacts`, returning the paths written.
///
/// Terminal output is printed through `multi` so it never interleaves with
/// the stage bar.
///
/// # Errors
///
/// Returns an error if loading or analysis fails, or if an artifact cannot
/// be written.
pub fn run(
    config: &PipelineConfig,
    artifacts: &[Artifact],
    multi: &MultiProgress,
    progress: &dyn ProgressCallback,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let start = Instant::now();
    progress.set_total(2 + artifacts.len() as u64);

    progress.set_message("Loading dataset".to_string());
    let dataset = load(config)?;
    log::info!("{} indicators loaded", dataset.indicators.len());
    progress.inc(1);

    progress.set_message("Analyzing".to_string());
    let analysis = analyze(&dataset)?;
    progress.inc(1);

    let mut written = Vec::new();
    for artifact in artifacts {
        progress.set_message(artifact.label().to_string());
        match artifact {
            Artifact::Report => written.push(write_report(&analysis, config)?),
            Artifact::Export => written.push(write_export(&analysis, &config.output_dir)?),
            Artifact::Stats => {
                let summary = StatisticsSummary::new(&analysis);
                multi.suspend(|| println!("{summary}"));
            }
        }
        progress.inc(1);
    }

    progress.finish(format!(
        "Analysis complete in {:.1}s",
        start.elapsed().as_secs_f64()
    ));
    for path in &written {
        log::info!("Generated {}", path.display());
    }

    Ok(written)
}

/// Writes the Markdown report into the output directory.
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be written.
pub fn write_report(
    analysis: &SurveyAnalysis,
    config: &PipelineConfig,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(&config.output_dir)?;
    let path = config.output_dir.join(REPORT_FILE_NAME);
    let report = render_markdown(analysis, &ReportOptions::new(config.generated_on));
    std::fs::write(&path, report)?;
    Ok(path)
}

/// Writes the full analysis as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_export(
    analysis: &SurveyAnalysis,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, serde_json::to_string_pretty(analysis)?)?;
    Ok(path)
}

/// Plain-text summary of every indicator and the integrated analyses.
pub struct StatisticsSummary<'a> {
    analysis: &'a SurveyAnalysis,
}

impl<'a> StatisticsSummary<'a> {
    /// Wraps an analysis for printing.
    #[must_use]
    pub const fn new(analysis: &'a SurveyAnalysis) -> Self {
        Self { analysis }
    }
}

impl fmt::Display for StatisticsSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stats in &self.analysis.statistics {
            writeln!(
                f,
                "{} (n={}): modal '{}' {}/{} ({:.1}%)",
                stats.name,
                stats.total,
                stats.modal_category,
                stats.modal_frequency,
                stats.total,
                stats.modal_percentage()
            )?;
            for category in &stats.categories {
                writeln!(
                    f,
                    "  {:<28} {:>3} {:>7.2}%",
                    category.label, category.count, category.percentage
                )?;
            }
        }

        let green = &self.analysis.green_coverage;
        let children = &self.analysis.child_suitability;
        writeln!(
            f,
            "Green coverage: {}/{} ({:.1}%)",
            green.spaces_with_trees, green.total_spaces, green.coverage_percentage
        )?;
        write!(
            f,
            "Children not adequate: {}/{} ({:.1}%) CRITICAL",
            children.critical_deficiency, children.total_spaces, children.not_adequate_percentage
        )
    }
}
