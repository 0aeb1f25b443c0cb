//! Season report rendering.
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tycoon_game::{SeasonSummary, StandingsRow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Plain standings lines
    #[default]
    Console,
    /// Full season summary as pretty-printed JSON
    Json,
}

/// Where and how the end-of-season report is written.
#[derive(Debug, Clone, Default)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct SeasonReport<'a> {
    pub selected_team: &'a str,
    pub season: &'a SeasonSummary,
}

/// Terminal output gets a coloured heading; files always get plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    Terminal,
    Plain,
}

pub fn generate_console_report<W>(
    out: &mut W,
    standings: &[StandingsRow],
    styling: Styling,
) -> Result<()>
where
    W: Write + ?Sized,
{
    let heading = "Final Standings:";
    match styling {
        Styling::Terminal => writeln!(out, "{}", heading.bright_cyan().bold())?,
        Styling::Plain => writeln!(out, "{heading}")?,
    }
    for row in standings {
        writeln!(out, "{} - {} Wins, {} Losses", row.name, row.wins, row.losses)?;
    }
    Ok(())
}

pub fn generate_json_report<W>(out: &mut W, report: &SeasonReport<'_>) -> Result<()>
where
    W: Write + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, report).context("serializing season report")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W>(
    out: &mut W,
    format: ReportFormat,
    styling: Styling,
    report: &SeasonReport<'_>,
) -> Result<()>
where
    W: Write + ?Sized,
{
    match format {
        ReportFormat::Console => generate_console_report(out, &report.season.standings, styling),
        ReportFormat::Json => generate_json_report(out, report),
    }
}

pub fn write_report_file(path: &Path, format: ReportFormat, report: &SeasonReport<'_>) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, format, Styling::Plain, report)?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tycoon_game::League;

    fn sample_season() -> SeasonSummary {
        let mut league = League::new(31);
        league.create_teams();
        league.simulate_season().unwrap()
    }

    #[test]
    fn console_report_lists_every_team() {
        let season = sample_season();
        let report = SeasonReport {
            selected_team: "Cubs",
            season: &season,
        };
        let mut out = Vec::new();
        write_report(&mut out, ReportFormat::Console, Styling::Terminal, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Final Standings:"));
        assert_eq!(text.lines().filter(|l| l.contains(" Wins, ")).count(), 30);
        let first = &season.standings[0];
        assert!(text.contains(&format!(
            "{} - {} Wins, {} Losses",
            first.name, first.wins, first.losses
        )));
    }

    #[test]
    fn json_report_includes_selection_and_standings() {
        let season = sample_season();
        let report = SeasonReport {
            selected_team: "Mets",
            season: &season,
        };
        let mut out = Vec::new();
        write_report(&mut out, ReportFormat::Json, Styling::Terminal, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["selected_team"], "Mets");
        assert_eq!(value["season"]["seed"], 31);
        assert_eq!(value["season"]["standings"].as_array().unwrap().len(), 30);
    }

    #[test]
    fn report_file_is_written() {
        let season = sample_season();
        let report = SeasonReport {
            selected_team: "Rays",
            season: &season,
        };
        let path = std::env::temp_dir().join("tycoon-report-test.json");
        write_report_file(&path, ReportFormat::Json, &report).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"selected_team\": \"Rays\""));
    }

    #[test]
    fn console_report_file_has_no_escape_codes() {
        let season = sample_season();
        let report = SeasonReport {
            selected_team: "Cubs",
            season: &season,
        };
        let path = std::env::temp_dir().join("tycoon-report-test.txt");
        write_report_file(&path, ReportFormat::Console, &report).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains('\x1b'));
        assert_eq!(content.lines().next(), Some("Final Standings:"));
        assert_eq!(content.lines().count(), 31);
    }

    #[test]
    fn plain_styling_writes_bare_heading() {
        let mut out = Vec::new();
        generate_console_report(&mut out, &[], Styling::Plain).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Final Standings:\n");
    }

    #[test]
    fn report_file_errors_name_the_path() {
        let season = sample_season();
        let report = SeasonReport {
            selected_team: "Rays",
            season: &season,
        };
        let path = std::env::temp_dir()
            .join("tycoon-missing-dir")
            .join("nested")
            .join("report.txt");
        let err = write_report_file(&path, ReportFormat::Console, &report).unwrap_err();
        assert!(err.to_string().contains("failed to create"));
    }
}
