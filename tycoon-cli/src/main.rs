mod menu;
mod report;
mod session;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;

use report::{ReportFormat, ReportSettings};
use session::{Session, SessionEnd};
use tycoon_game::League;

#[derive(Debug, Parser)]
#[command(name = "tycoon-cli", version)]
#[command(about = "Baseball Manager Tycoon - pick a team and simulate a season")]
struct Args {
    /// Seed for rosters and the season (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Standings report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the season report instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            format: self.report,
            output: self.output.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let seed = resolve_seed(args.seed);
    info!("league seed {seed}");
    let mut league = League::new(seed);
    league.create_teams();

    let stdin = io::stdin();
    let mut session = Session::new(league, stdin.lock(), io::stdout(), args.report_settings());
    match session.run()? {
        SessionEnd::SeasonComplete(summary) => {
            info!(
                "season finished after {} series (seed {})",
                summary.matchups_played(),
                summary.seed
            );
        }
        SessionEnd::Exited => info!("exited before the season"),
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn resolve_seed(requested: Option<u64>) -> u64 {
    requested.unwrap_or_else(rand::random)
}
