//! Roster CLI
//!
//! Seeds the planning roster from the squad sheet + survey exports, then
//! browses and edits it from the terminal. All state lives in one JSON
//! file; every edit command is load -> mutate -> save.

mod seed;
mod views;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use roster_core::api;
use roster_core::import::build_roster;
use roster_core::{
    default_reference, filter_players, ClubReference, JsonFileStore, Roster, RosterStore,
};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Seasonal squad planning for the club", long_about = None)]
struct Cli {
    /// Roster JSON file
    #[arg(long, default_value = "roster.json", global = true)]
    roster: PathBuf,

    /// Club reference YAML (teams/statuses/positions); embedded defaults
    /// when omitted
    #[arg(long, global = true)]
    reference: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the roster file from the squad sheet and survey exports
    Seed {
        /// Squad sheet CSV (Team,Player,Games,Role)
        #[arg(long)]
        squads: PathBuf,

        /// Survey export CSV with the original question headers
        #[arg(long)]
        survey: Option<PathBuf>,

        /// Overwrite an existing roster file
        #[arg(long, default_value = "false")]
        force: bool,
    },

    /// Club-wide counts and status breakdowns
    Dashboard {
        /// Emit JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// One team's 2025 squads next to its planned 2026 squad
    Team {
        name: String,
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List players, with an optional name filter
    Players {
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Every goalkeeper in the club
    Goalkeepers {
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Players with no prior-season history
    Recruits,

    /// Change a player's next-season status
    SetStatus { id: u32, status: String },

    /// Change a player's position; omit the value to clear it
    SetPosition { id: u32, position: Option<String> },

    /// Change a player's planned 2026 team; omit the value to clear it
    SetTeam { id: u32, team: Option<String> },

    /// Record a fill-in appearance
    AddAppearance {
        id: u32,
        team: String,
        #[arg(long, default_value = "0")]
        games: u32,
    },

    /// Remove a fill-in appearance
    RemoveAppearance { id: u32, team: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let reference = match &cli.reference {
        Some(path) => ClubReference::load_from_path(path)
            .with_context(|| format!("loading reference {}", path.display()))?,
        None => default_reference().clone(),
    };
    let store = JsonFileStore::new(&cli.roster);

    match cli.command {
        Commands::Seed { squads, survey, force } => {
            if store.exists() && !force {
                anyhow::bail!(
                    "{} already exists; pass --force to overwrite",
                    store.path().display()
                );
            }

            let squad_rows = seed::read_squad_csv(&squads)?;
            let survey_rows = match &survey {
                Some(path) => seed::read_survey_csv(path)?,
                None => Vec::new(),
            };

            let (roster, report) = build_roster(squad_rows, survey_rows, &reference);
            store.save(&roster).context("writing roster file")?;

            println!(
                "Seeded {} players ({} recruits) into {}",
                roster.len(),
                report.recruits,
                store.path().display()
            );
            for name in &report.skipped {
                println!("  skipped (no main team): {name}");
            }
        }

        Commands::Dashboard { json } => {
            let roster = store.load()?;
            if json {
                println!("{}", api::dashboard_json(&roster, &reference).map_err(anyhow::Error::msg)?);
            } else {
                views::print_dashboard(&roster, &reference);
            }
        }

        Commands::Team { name, json } => {
            anyhow::ensure!(reference.is_team(&name), "unknown team {name:?}");
            let roster = store.load()?;
            if json {
                let request = serde_json::json!({ "team": name }).to_string();
                println!(
                    "{}",
                    api::team_view_json(&roster, &reference, &request)
                        .map_err(anyhow::Error::msg)?
                );
            } else {
                views::print_team(&roster, &name);
            }
        }

        Commands::Players { filter, json } => {
            let roster = store.load()?;
            if json {
                let request = serde_json::json!({ "filter": filter }).to_string();
                println!(
                    "{}",
                    api::list_players_json(&roster, &request).map_err(anyhow::Error::msg)?
                );
            } else {
                views::print_players(&filter_players(roster.players(), &filter));
            }
        }

        Commands::Goalkeepers { json } => {
            let roster = store.load()?;
            if json {
                println!(
                    "{}",
                    api::goalkeepers_json(&roster, &reference).map_err(anyhow::Error::msg)?
                );
            } else {
                views::print_goalkeepers(&roster, &reference);
            }
        }

        Commands::Recruits => {
            let roster = store.load()?;
            views::print_recruits(&roster);
        }

        Commands::SetStatus { id, status } => {
            edit(&store, |roster| {
                roster.set_status(id, &status, &reference)?;
                Ok(())
            })?;
        }

        Commands::SetPosition { id, position } => {
            edit(&store, |roster| {
                roster.set_position(id, position.as_deref(), &reference)?;
                Ok(())
            })?;
        }

        Commands::SetTeam { id, team } => {
            edit(&store, |roster| {
                roster.set_team_2026(id, team.as_deref(), &reference)?;
                Ok(())
            })?;
        }

        Commands::AddAppearance { id, team, games } => {
            edit(&store, |roster| {
                roster.add_appearance(id, &team, games, &reference)?;
                Ok(())
            })?;
        }

        Commands::RemoveAppearance { id, team } => {
            edit(&store, |roster| {
                roster.remove_appearance(id, &team)?;
                Ok(())
            })?;
        }
    }

    Ok(())
}

/// Load -> mutate -> save.
fn edit<F>(store: &JsonFileStore, apply: F) -> Result<()>
where
    F: FnOnce(&mut Roster) -> roster_core::Result<()>,
{
    let mut roster = store.load()?;
    apply(&mut roster)?;
    store.save(&roster).context("writing roster file")?;
    println!("ok");
    Ok(())
}
