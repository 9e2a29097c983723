//! # Analysis Module
//!
//! Pure derivations over a player collection. Every function takes the
//! full roster snapshot (plus reference lists where needed) and returns a
//! fresh view; nothing here mutates or caches anything.
//!
//! ## Submodules
//!
//! - `squads` - team-scoped views (main squad, fill-ins, planned squad)
//! - `filters` - cross-team subsets (name filter, recruits, goalkeepers)
//! - `dashboard` - per-team counts and status breakdowns

pub mod dashboard;
pub mod filters;
pub mod squads;

pub use dashboard::{dashboard_summary, DashboardSummary, TeamSummary};
pub use filters::{filter_players, goalkeepers, recruits};
pub use squads::{planned_squad, players_for_team, team_fill_ins, team_main_squad};

use std::cmp::Ordering;

use crate::models::Player;

/// The one name comparator every sorted view uses: case-insensitive
/// lexicographic on the display name.
pub fn name_order(a: &Player, b: &Player) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}
