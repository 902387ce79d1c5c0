#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the urban public-space survey analysis.
//!
//! Computes descriptive statistics and integrated analyses over the survey
//! and writes the Markdown technical report and/or a JSON export. Without a
//! subcommand, an interactive menu asks what to produce when stdin is a
//! terminal; otherwise every artifact is produced.
//!
//! Uses `indicatif-log-bridge` (via [`urban_survey_cli_utils::init_logger`])
//! so that log lines and the stage bar never fight for the terminal.

mod pipeline;

use std::io::IsTerminal as _;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::Select;
use urban_survey_cli_utils::IndicatifProgress;

use crate::pipeline::{Artifact, PipelineConfig};

#[derive(Parser)]
#[command(
    name = "urban_survey",
    about = "Urban public-space survey statistics and technical report"
)]
struct Cli {
    /// Survey dataset TOML file (defaults to the built-in survey)
    #[arg(long, global = true, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Directory the report and export are written to
    #[arg(long, global = true, value_name = "DIR", default_value = "data/generated")]
    output_dir: PathBuf,

    /// Report generation date (YYYY-MM-DD), defaults to today
    #[arg(long, global = true, value_name = "DATE")]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Write the Markdown technical report
    Report,
    /// Print per-indicator statistics to stdout
    Stats,
    /// Write the full analysis as JSON
    Export,
    /// Write both the report and the JSON export
    All,
}

impl Commands {
    const ALL: &[Self] = &[Self::All, Self::Report, Self::Stats, Self::Export];

    #[must_use]
    const fn label(self) -> &'static str {
        match self {
            Self::All => "Report + JSON export",
            Self::Report => "Technical report",
            Self::Stats => "Print statistics",
            Self::Export => "JSON export",
        }
    }

    #[must_use]
    const fn artifacts(self) -> &'static [Artifact] {
        match self {
            Self::Report => &[Artifact::Report],
            Self::Stats => &[Artifact::Stats],
            Self::Export => &[Artifact::Export],
            Self::All => &[Artifact::Report, Artifact::Export],
        }
    }
}

/// Resolves the command to run.
///
/// An explicit subcommand always wins. Without one, `prompt` asks the user
/// when stdin is a terminal; otherwise the run produces every artifact.
fn choose_command<F>(
    command: Option<Commands>,
    interactive: bool,
    prompt: F,
) -> Result<Commands, dialoguer::Error>
where
    F: FnOnce() -> Result<Commands, dialoguer::Error>,
{
    match command {
        Some(command) => Ok(command),
        None if interactive => prompt(),
        None => {
            log::info!("No terminal attached, producing all artifacts");
            Ok(Commands::All)
        }
    }
}

fn prompt_command() -> Result<Commands, dialoguer::Error> {
    let labels: Vec<&str> = Commands::ALL.iter().map(|c| c.label()).collect();
    let idx = Select::new()
        .with_prompt("What would you like to produce?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Commands::ALL[idx])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = urban_survey_cli_utils::init_logger();
    let cli = Cli::parse();

    let command = choose_command(cli.command, std::io::stdin().is_terminal(), prompt_command)?;

    let config = PipelineConfig {
        dataset: cli.dataset,
        output_dir: cli.output_dir,
        generated_on: cli
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    };

    let artifacts = command.artifacts();
    let progress = IndicatifProgress::steps_bar(&multi, "Survey analysis", 0);

    if let Err(e) = pipeline::run(&config, artifacts, &multi, progress.as_ref()) {
        progress.finish_and_clear();
        log::error!("Analysis failed: {e}");
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_subcommand_wins() {
        let command = choose_command(Some(Commands::Stats), false, || {
            panic!("must not prompt")
        })
        .unwrap();
        assert_eq!(command, Commands::Stats);
    }

    #[test]
    fn no_terminal_runs_everything_without_prompting() {
        let command = choose_command(None, false, || panic!("must not prompt")).unwrap();
        assert_eq!(command, Commands::All);
    }

    #[test]
    fn terminal_prompts_for_command() {
        let command = choose_command(None, true, || Ok(Commands::Export)).unwrap();
        assert_eq!(command, Commands::Export);
    }

    #[test]
    fn all_produces_report_and_export() {
        assert_eq!(
            Commands::All.artifacts(),
            &[Artifact::Report, Artifact::Export]
        );
        assert_eq!(Commands::Report.artifacts(), &[Artifact::Report]);
        assert_eq!(Commands::Stats.artifacts(), &[Artifact::Stats]);
        assert_eq!(Commands::Export.artifacts(), &[Artifact::Export]);
    }

    #[test]
    fn menu_lists_every_command_once() {
        for command in [
            Commands::Report,
            Commands::Stats,
            Commands::Export,
            Commands::All,
        ] {
            assert_eq!(
                Commands::ALL.iter().filter(|c| **c == command).count(),
                1,
                "{command:?}"
            );
        }
        let mut labels: Vec<&str> = Commands::ALL.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Commands::ALL.len());
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "urban_survey",
            "report",
            "--date",
            "2026-01-19",
            "--output-dir",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Report));
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2026, 1, 19));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert!(cli.dataset.is_none());
    }
}
