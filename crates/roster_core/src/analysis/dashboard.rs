//! Club-wide dashboard counts.

use std::collections::BTreeMap;

use serde::Serialize;

use super::squads::{team_fill_ins, team_main_squad};
use crate::data::ClubReference;
use crate::models::Player;

/// One team's card on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub team: String,
    pub main_squad: usize,
    pub fill_ins: usize,
    /// Status -> count over the team's main squad. Only statuses that
    /// actually occur appear; there are never zero entries.
    pub status_breakdown: BTreeMap<String, usize>,
}

impl TeamSummary {
    /// Share of the main squad holding `status`, as a percentage. An empty
    /// team counts as a squad of one so the bar renders 0% instead of
    /// dividing by zero.
    pub fn status_percent(&self, status: &str) -> f64 {
        let count = self.status_breakdown.get(status).copied().unwrap_or(0);
        count as f64 * 100.0 / self.main_squad.max(1) as f64
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub teams: Vec<TeamSummary>,
    pub total_main: usize,
    pub total_fill_ins: usize,
}

impl DashboardSummary {
    pub fn team(&self, name: &str) -> Option<&TeamSummary> {
        self.teams.iter().find(|t| t.team == name)
    }
}

/// Per-team main squad / fill-in counts with a status breakdown, plus the
/// grand totals shown in the header cards.
pub fn dashboard_summary(players: &[Player], reference: &ClubReference) -> DashboardSummary {
    let mut teams = Vec::with_capacity(reference.teams.len());
    let mut total_main = 0;
    let mut total_fill_ins = 0;

    for team in &reference.teams {
        let main = team_main_squad(players, team);
        let fills = team_fill_ins(players, team);

        let mut status_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        for player in &main {
            *status_breakdown.entry(player.status.clone()).or_insert(0) += 1;
        }

        total_main += main.len();
        total_fill_ins += fills.len();
        teams.push(TeamSummary {
            team: team.clone(),
            main_squad: main.len(),
            fill_ins: fills.len(),
            status_breakdown,
        });
    }

    DashboardSummary { teams, total_main, total_fill_ins }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_reference;
    use crate::models::Appearance;

    fn fixture() -> Vec<Player> {
        let mut players = vec![
            Player::with_main_team(1, "One", "PL", 10, "Yes, planning to play"),
            Player::with_main_team(2, "Two", "PL", 8, "Yes, planning to play"),
            Player::with_main_team(3, "Three", "PL", 5, "Unsure just yet"),
            Player::with_main_team(4, "Four", "PB", 12, "Not returning"),
        ];
        // Four also filled in for PL
        players[3].appearances.push(Appearance::new("PL", 2, false));
        players
    }

    #[test]
    fn breakdown_counts_only_present_statuses() {
        let players = fixture();
        let summary = dashboard_summary(&players, default_reference());

        let pl = summary.team("PL").unwrap();
        assert_eq!(pl.main_squad, 3);
        assert_eq!(pl.fill_ins, 1);
        assert_eq!(pl.status_breakdown.get("Yes, planning to play"), Some(&2));
        assert_eq!(pl.status_breakdown.get("Unsure just yet"), Some(&1));
        // absent statuses are omitted, never zero-valued
        assert!(!pl.status_breakdown.contains_key("Not returning"));
    }

    #[test]
    fn totals_sum_over_all_teams() {
        let players = fixture();
        let summary = dashboard_summary(&players, default_reference());
        assert_eq!(summary.total_main, 4);
        assert_eq!(summary.total_fill_ins, 1);
        assert_eq!(summary.teams.len(), default_reference().teams.len());
    }

    #[test]
    fn empty_team_yields_zero_percent() {
        let players = fixture();
        let summary = dashboard_summary(&players, default_reference());

        let metro = summary.team("Metro").unwrap();
        assert_eq!(metro.main_squad, 0);
        assert_eq!(metro.status_percent("Unsure just yet"), 0.0);

        let pl = summary.team("PL").unwrap();
        let pct = pl.status_percent("Unsure just yet");
        assert!((pct - 33.333).abs() < 0.01, "got {pct}");
    }
}
