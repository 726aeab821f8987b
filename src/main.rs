use std::path::PathBuf;

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use clap::{Parser, Subcommand};

mod config;
mod distance;
mod error;
mod logging;
mod models;
mod report;
mod scoring;
mod stats;
mod store;

use models::{Entry, CHALLENGE_START};

#[derive(Parser)]
#[command(name = "step-challenge")]
#[command(about = "Weekly step tracker and leaderboard for the 3-month step challenge", long_about = None)]
struct Cli {
    /// Session file holding the current data (defaults to $STEP_CHALLENGE_STATE, then ./step_challenge.json)
    #[arg(long, global = true)]
    state: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Team totals and distance achievement
    Summary,
    /// Current standings by points
    Leaderboard,
    /// Every weekly entry, newest first, with its index
    Entries,
    /// Log a week of steps for a participant
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        steps: u64,
        #[arg(long, default_value_t = CHALLENGE_START)]
        week_start: NaiveDate,
        /// Defaults to six days after the week start
        #[arg(long)]
        week_end: Option<NaiveDate>,
    },
    /// Delete an entry by the index shown in `entries`
    Delete {
        #[arg(long)]
        name: String,
        #[arg(long)]
        index: usize,
    },
    /// Write a JSON backup of all data
    Export {
        /// Print to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace all data with a JSON backup
    Import {
        #[arg(long)]
        file: PathBuf,
    },
    /// Clear every entry and restore the default roster
    Reset {
        #[arg(long)]
        confirm: bool,
    },
    /// Weekly step progression as CSV
    Trends {
        /// Print to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a markdown report
    Report {
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Show the points system, or preview points for a weekly total
    Points {
        #[arg(long)]
        steps: Option<u64>,
    },
    /// Describe how far a number of steps would take you
    Distance {
        #[arg(long)]
        steps: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    match &cli.command {
        Commands::Points { steps } => {
            print!("{}", report::render_points_system());
            if let Some(steps) = *steps {
                println!("{}", report::render_points_preview(steps));
            }
            return Ok(());
        }
        Commands::Distance { steps } => {
            println!("{}", distance::describe(*steps));
            return Ok(());
        }
        _ => {}
    }

    let state_path = config::resolve_state_path(cli.state);
    let mut data = store::load_or_seed(&state_path)?;

    match cli.command {
        Commands::Summary => {
            println!("3-Month Step Challenge ({})", report::challenge_dates());
            print!("{}", report::render_summary(&data));
        }
        Commands::Leaderboard => {
            print!("{}", report::render_leaderboard(&data));
        }
        Commands::Entries => {
            print!("{}", report::render_entries(&data));
        }
        Commands::Add {
            name,
            steps,
            week_start,
            week_end,
        } => {
            let entry = Entry {
                week_start,
                week_end: week_end.unwrap_or(week_start + Duration::days(6)),
                steps,
            };
            data.add_entry(&name, entry)?;
            store::save(&data, &state_path)?;
            let weeks = data.get(&name).map_or(0, |p| p.entries.len());
            println!(
                "Added {} steps for {name}, now {weeks} weeks logged ({}).",
                report::with_commas(steps),
                report::render_points_preview(steps)
            );
        }
        Commands::Delete { name, index } => {
            let removed = data.delete_entry(&name, index)?;
            store::save(&data, &state_path)?;
            println!(
                "Deleted {name}'s entry for {} to {} ({} steps).",
                removed.week_start,
                removed.week_end,
                report::with_commas(removed.steps)
            );
        }
        Commands::Export { out } => {
            let json = data.export_json()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Backup written to {}.", path.display());
                }
                None => println!("{json}"),
            }
        }
        Commands::Import { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            data.import_json(&text).with_context(|| {
                format!("{} was not imported; existing data kept", file.display())
            })?;
            store::save(&data, &state_path)?;
            println!(
                "Data imported successfully ({} participants).",
                data.participants().len()
            );
        }
        Commands::Reset { confirm } => {
            if !confirm {
                anyhow::bail!("reset deletes all entries; rerun with --confirm to proceed");
            }
            data.reset();
            store::save(&data, &state_path)?;
            println!("All entries cleared.");
        }
        Commands::Trends { out } => {
            let rows = match &out {
                Some(path) => {
                    let file = std::fs::File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    report::write_trends_csv(&data, file)?
                }
                None => report::write_trends_csv(&data, std::io::stdout().lock())?,
            };
            if rows == 0 {
                eprintln!("No data yet. Add some entries to see trends!");
            } else if let Some(path) = out {
                println!("Wrote {rows} trend rows to {}.", path.display());
            }
        }
        Commands::Report { out } => {
            report::write_report(&data, &out)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Points { .. } | Commands::Distance { .. } => {}
    }

    Ok(())
}
