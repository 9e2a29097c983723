//! Team-scoped squad views for the planning screens.

use super::name_order;
use crate::models::Player;

/// Players whose primary squad last season was `team`.
///
/// Requires both the `main_team` field and a matching main appearance; a
/// player with one but not the other is an inconsistent row and simply
/// drops out of the view.
pub fn team_main_squad<'a>(players: &'a [Player], team: &str) -> Vec<&'a Player> {
    players
        .iter()
        .filter(|p| {
            p.main_team.as_deref() == Some(team)
                && p.appearances.iter().any(|a| a.is_main && a.team == team)
        })
        .collect()
}

/// Players who filled in for `team` last season: a non-main appearance for
/// it, while their own main team is elsewhere.
///
/// Disjoint from [`team_main_squad`] for the same team, since a player
/// holds at most one appearance per team.
pub fn team_fill_ins<'a>(players: &'a [Player], team: &str) -> Vec<&'a Player> {
    players
        .iter()
        .filter(|p| {
            p.main_team.as_deref() != Some(team)
                && p.appearances.iter().any(|a| !a.is_main && a.team == team)
        })
        .collect()
}

/// Players pencilled into `team` for next season, name-sorted.
///
/// Driven purely by `team_2026`; prior-season history and status play no
/// part.
pub fn planned_squad<'a>(players: &'a [Player], team: &str) -> Vec<&'a Player> {
    let mut planned: Vec<&Player> =
        players.iter().filter(|p| p.team_2026.as_deref() == Some(team)).collect();
    planned.sort_by(|a, b| name_order(a, b));
    planned
}

/// Everyone who touched `team` last season in any capacity, name-sorted.
pub fn players_for_team<'a>(players: &'a [Player], team: &str) -> Vec<&'a Player> {
    let mut result: Vec<&Player> =
        players.iter().filter(|p| p.has_appearance_for(team)).collect();
    result.sort_by(|a, b| name_order(a, b));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appearance;

    fn fixture() -> Vec<Player> {
        // Zoe: PL main squad, filled in for PB
        let mut zoe = Player::with_main_team(1, "Zoe Adams", "PL", 15, "Not heard from");
        zoe.appearances.push(Appearance::new("PB", 3, false));

        // Andy: PB main squad, planned for PL next season
        let mut andy = Player::with_main_team(2, "andy Baker", "PB", 11, "Not heard from");
        andy.team_2026 = Some("PL".to_string());

        // Casey: main_team recorded but the main appearance row is missing
        let mut casey = Player::with_main_team(3, "Casey Cole", "PL", 0, "Not heard from");
        casey.appearances.clear();

        // Drew: recruit planned for PL
        let mut drew = Player::recruit(4, "Drew Evans", "New to club/restarting");
        drew.team_2026 = Some("PL".to_string());

        vec![zoe, andy, casey, drew]
    }

    #[test]
    fn main_squad_requires_matching_main_appearance() {
        let players = fixture();
        let squad = team_main_squad(&players, "PL");
        assert_eq!(squad.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
        // Casey has main_team = PL but no main appearance row
        assert!(!squad.iter().any(|p| p.id == 3));
    }

    #[test]
    fn fill_ins_exclude_the_teams_own_main_squad() {
        let players = fixture();
        let fills = team_fill_ins(&players, "PB");
        assert_eq!(fills.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
        assert!(team_fill_ins(&players, "PL").is_empty());
    }

    #[test]
    fn main_squad_and_fill_ins_are_disjoint() {
        let players = fixture();
        for team in ["PL", "PB", "PC"] {
            let main: Vec<u32> = team_main_squad(&players, team).iter().map(|p| p.id).collect();
            let fills: Vec<u32> = team_fill_ins(&players, team).iter().map(|p| p.id).collect();
            assert!(main.iter().all(|id| !fills.contains(id)), "overlap for {team}");
        }
    }

    #[test]
    fn planned_squad_is_name_sorted_case_insensitive() {
        let players = fixture();
        let planned = planned_squad(&players, "PL");
        let names: Vec<&str> = planned.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["andy Baker", "Drew Evans"]);
    }

    #[test]
    fn players_for_team_spans_main_and_fill_in() {
        let players = fixture();
        let touched: Vec<u32> = players_for_team(&players, "PB").iter().map(|p| p.id).collect();
        assert_eq!(touched, vec![2, 1]); // andy Baker, Zoe Adams
    }
}
