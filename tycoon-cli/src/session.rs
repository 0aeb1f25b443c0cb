//! Interactive league session: banner, team pick, and the post-selection menu.
use anyhow::{Result, bail};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufRead, Write};
use tycoon_game::constants::SEASON_ROUNDS;
use tycoon_game::{League, LeagueError, SeasonSummary};

use crate::menu::{MenuChoice, parse_team_choice};
use crate::report::{ReportSettings, SeasonReport, Styling, write_report, write_report_file};

/// How a session finished.
#[derive(Debug)]
pub enum SessionEnd {
    SeasonComplete(Box<SeasonSummary>),
    Exited,
}

/// Drives one playthrough over any line-oriented input and writer.
pub struct Session<R, W> {
    league: League,
    input: R,
    output: W,
    report: ReportSettings,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub const fn new(league: League, input: R, output: W, report: ReportSettings) -> Self {
        Self {
            league,
            input,
            output,
            report,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the start screen, take the team pick, then run the menu.
    ///
    /// # Errors
    ///
    /// Fails when input ends while a prompt is waiting or output cannot be written.
    pub fn run(&mut self) -> Result<SessionEnd> {
        self.start_screen()?;
        self.pick_team()?;
        self.post_selection_menu()
    }

    fn start_screen(&mut self) -> Result<()> {
        let rule = "====================================";
        writeln!(self.output, "{}", rule.cyan())?;
        writeln!(
            self.output,
            "{}",
            " Welcome To Baseball Manager Tycoon ".bright_cyan().bold()
        )?;
        writeln!(self.output, "{}", rule.cyan())?;
        writeln!(self.output, "Select your team to begin!")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn pick_team(&mut self) -> Result<()> {
        writeln!(self.output, "Pick a team:")?;
        for (idx, team) in self.league.teams().iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, team.name)?;
        }
        self.output.flush()?;

        let count = self.league.teams().len();
        loop {
            let line = self.read_line()?;
            let Some(choice) = parse_team_choice(&line) else {
                self.invalid_selection(count)?;
                continue;
            };
            match self.league.select_team(choice) {
                Ok(team) => {
                    writeln!(self.output, "You chose: {}", team.name.green().bold())?;
                    return Ok(());
                }
                Err(LeagueError::InvalidTeamChoice { .. }) => {
                    debug!("rejected team choice {choice}");
                    self.invalid_selection(count)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn invalid_selection(&mut self, count: usize) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            format!("Invalid selection. Enter a number between 1 and {count}.").red()
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn post_selection_menu(&mut self) -> Result<SessionEnd> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Now that you've selected your team, what would you like to do?"
        )?;
        loop {
            for choice in MenuChoice::ALL {
                writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
            }
            write!(self.output, "Enter choice: ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match MenuChoice::parse(&line) {
                Some(MenuChoice::ViewRoster) => self.view_roster()?,
                Some(MenuChoice::StartSeason) => {
                    let summary = self.simulate_season()?;
                    return Ok(SessionEnd::SeasonComplete(Box::new(summary)));
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting game...")?;
                    return Ok(SessionEnd::Exited);
                }
                None => writeln!(self.output, "{}", "Invalid choice. Try again.".red())?,
            }
        }
    }

    fn view_roster(&mut self) -> Result<()> {
        let team = self.league.require_selected()?;
        writeln!(self.output)?;
        writeln!(self.output, "Roster for {}:", team.name.bold())?;
        for player in team.roster() {
            writeln!(
                self.output,
                "{} - Batting Skill: {}, Pitching Skill: {}",
                player.name, player.batting, player.pitching
            )?;
        }
        Ok(())
    }

    fn simulate_season(&mut self) -> Result<SeasonSummary> {
        let team_name = self.league.require_selected()?.name.clone();
        writeln!(
            self.output,
            "Starting the {SEASON_ROUNDS}-game season for {team_name}..."
        )?;
        self.output.flush()?;

        let summary = self.league.simulate_season()?;
        self.print_standings(&team_name, &summary)?;
        Ok(summary)
    }

    fn print_standings(&mut self, team_name: &str, summary: &SeasonSummary) -> Result<()> {
        let report = SeasonReport {
            selected_team: team_name,
            season: summary,
        };
        if let Some(path) = &self.report.output {
            write_report_file(path, self.report.format, &report)?;
            info!("season report written to {}", path.display());
            writeln!(self.output, "Season report written to {}", path.display())?;
        } else {
            write_report(&mut self.output, self.report.format, Styling::Terminal, &report)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Read one line; undecodable bytes are replaced so they fail parsing, not the session.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            bail!("standard input closed");
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportFormat;
    use std::io::Cursor;

    fn run_session(seed: u64, script: &str, report: ReportSettings) -> (Result<SessionEnd>, String) {
        run_session_bytes(seed, script.as_bytes(), report)
    }

    fn run_session_bytes(
        seed: u64,
        script: &[u8],
        report: ReportSettings,
    ) -> (Result<SessionEnd>, String) {
        let mut league = League::new(seed);
        league.create_teams();
        let mut session = Session::new(league, Cursor::new(script.to_vec()), Vec::new(), report);
        let end = session.run();
        let text = String::from_utf8(session.into_output()).unwrap();
        (end, text)
    }

    #[test]
    fn exit_path_prints_banner_and_goodbye() {
        let (end, text) = run_session(1, "5\n3\n", ReportSettings::default());
        assert!(matches!(end.unwrap(), SessionEnd::Exited));
        assert!(text.contains("Welcome To Baseball Manager Tycoon"));
        assert!(text.contains("30. Angels"));
        assert!(text.contains("You chose: "));
        assert!(text.contains("Cubs"));
        assert!(text.contains("Exiting game..."));
        assert!(!text.contains("Final Standings:"));
    }

    #[test]
    fn invalid_team_choices_reprompt() {
        let (end, text) = run_session(2, "abc\n0\n31\n2\n3\n", ReportSettings::default());
        assert!(end.is_ok());
        assert_eq!(text.matches("Invalid selection").count(), 3);
        assert!(text.contains("Yankees"));
    }

    #[test]
    fn non_utf8_input_reprompts() {
        let script = [0xff, 0xfe, b'\n', b'1', b'\n', 0xff, b'\n', b'3', b'\n'];
        let (end, text) = run_session_bytes(12, &script, ReportSettings::default());
        assert!(matches!(end.unwrap(), SessionEnd::Exited));
        assert_eq!(text.matches("Invalid selection").count(), 1);
        assert!(text.contains("You chose: "));
        assert_eq!(text.matches("Invalid choice. Try again.").count(), 1);
        assert!(text.contains("Exiting game..."));
    }

    #[test]
    fn invalid_menu_choices_loop_back() {
        let (end, text) = run_session(3, "1\n9\nroster\n3\n", ReportSettings::default());
        assert!(end.is_ok());
        assert_eq!(text.matches("Invalid choice. Try again.").count(), 2);
        assert_eq!(text.matches("Enter choice: ").count(), 3);
    }

    #[test]
    fn roster_view_lists_selected_players() {
        let (_, text) = run_session(4, "7\n1\n3\n", ReportSettings::default());
        assert!(text.contains("Roster for "));
        assert!(text.contains("Astros"));
        for idx in 0..5 {
            assert!(text.contains(&format!("Player {idx} - Batting Skill: ")));
        }
    }

    #[test]
    fn season_path_prints_standings() {
        let (end, text) = run_session(5, "10\n2\n", ReportSettings::default());
        let SessionEnd::SeasonComplete(summary) = end.unwrap() else {
            panic!("season should complete");
        };
        assert_eq!(summary.standings.len(), 30);
        assert!(text.contains("Starting the 60-game season for Phillies..."));
        assert!(text.contains("Final Standings:"));
        assert_eq!(text.lines().filter(|l| l.ends_with(" Losses")).count(), 30);
    }

    #[test]
    fn season_report_can_go_to_a_file() {
        let path = std::env::temp_dir().join("tycoon-session-report.json");
        let report = ReportSettings {
            format: ReportFormat::Json,
            output: Some(path.clone()),
        };
        let (end, text) = run_session(6, "1\n2\n", report);
        assert!(end.is_ok());
        assert!(text.contains("Season report written to"));
        assert!(!text.contains("Final Standings:"));
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["selected_team"], "Red Sox");
    }

    #[test]
    fn closed_input_is_an_error() {
        let (end, text) = run_session(7, "", ReportSettings::default());
        let err = end.unwrap_err();
        assert_eq!(err.to_string(), "standard input closed");
        assert!(text.contains("Pick a team:"));

        let (end, _) = run_session(7, "4\n1\n", ReportSettings::default());
        assert!(end.is_err());
    }

    #[test]
    fn same_seed_gives_same_transcript() {
        let (_, first) = run_session(8, "3\n1\n2\n", ReportSettings::default());
        let (_, second) = run_session(8, "3\n1\n2\n", ReportSettings::default());
        assert_eq!(first, second);
    }
}
