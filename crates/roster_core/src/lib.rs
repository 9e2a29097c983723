//! # roster_core - Seasonal Roster Planning
//!
//! Domain library for a multi-team club's season handover: who played
//! where last season, who is coming back, and which squad each player is
//! pencilled into for next season.
//!
//! The library has three layers:
//! - `models` + `data`: the player/appearance entities and the injected
//!   reference lists (teams, statuses, positions) they validate against
//! - `analysis`: pure derivations over a player collection (team squads,
//!   fill-ins, dashboard counts, recruit/goalkeeper subsets)
//! - `roster`: the mutable collection with validated assignment
//!   operations; `store` persists it as a JSON file

pub mod analysis;
pub mod api;
pub mod data;
pub mod error;
pub mod import;
pub mod models;
pub mod roster;
pub mod store;

pub use analysis::{
    dashboard_summary, filter_players, goalkeepers, name_order, planned_squad, players_for_team,
    recruits, team_fill_ins, team_main_squad, DashboardSummary, TeamSummary,
};
pub use data::{default_reference, ClubReference};
pub use error::{Result, RosterError};
pub use models::{Appearance, Player, PlayerPatch, SurveyInfo};
pub use roster::{NewPlayer, Roster};
pub use store::{JsonFileStore, RosterStore, StoreError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u32 = 1;
