//! Cross-team player subsets.

use super::name_order;
use crate::data::ClubReference;
use crate::models::Player;

/// Players whose name contains `filter_text`, case-insensitive. An empty
/// filter matches everyone. Input order is preserved; column sorting is
/// the caller's concern.
pub fn filter_players<'a>(players: &'a [Player], filter_text: &str) -> Vec<&'a Player> {
    if filter_text.is_empty() {
        return players.iter().collect();
    }
    let needle = filter_text.to_lowercase();
    players.iter().filter(|p| p.name.to_lowercase().contains(&needle)).collect()
}

/// Players with no prior-season history.
pub fn recruits(players: &[Player]) -> Vec<&Player> {
    players.iter().filter(|p| p.is_recruit).collect()
}

/// Every goalkeeper in the club, name-sorted. Position is compared against
/// the reference's goalkeeper code rather than a literal.
pub fn goalkeepers<'a>(players: &'a [Player], reference: &ClubReference) -> Vec<&'a Player> {
    let mut keepers: Vec<&Player> = players
        .iter()
        .filter(|p| p.position.as_deref() == Some(reference.goalkeeper_position.as_str()))
        .collect();
    keepers.sort_by(|a, b| name_order(a, b));
    keepers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_reference;

    fn fixture() -> Vec<Player> {
        let mut nate = Player::with_main_team(1, "Nate Morris", "PL", 16, "Not heard from");
        nate.position = Some("GK".to_string());

        let mut adam = Player::with_main_team(2, "adam Lowe", "PB", 8, "Not heard from");
        adam.position = Some("GK".to_string());

        let mut striker = Player::with_main_team(3, "Matt Nash", "PL", 12, "Not heard from");
        striker.position = Some("Striker".to_string());

        let recruit = Player::recruit(4, "Nathan Cross", "New to club/restarting");

        vec![nate, adam, striker, recruit]
    }

    #[test]
    fn empty_filter_matches_all_in_input_order() {
        let players = fixture();
        let all = filter_players(&players, "");
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, 1);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let players = fixture();
        let hits: Vec<u32> = filter_players(&players, "nat").iter().map(|p| p.id).collect();
        assert_eq!(hits, vec![1, 4]);
        assert!(filter_players(&players, "zzz").is_empty());
    }

    #[test]
    fn goalkeepers_sorted_by_name() {
        let players = fixture();
        let keepers = goalkeepers(&players, default_reference());
        let names: Vec<&str> = keepers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["adam Lowe", "Nate Morris"]);
    }

    #[test]
    fn recruits_only() {
        let players = fixture();
        let new_faces: Vec<u32> = recruits(&players).iter().map(|p| p.id).collect();
        assert_eq!(new_faces, vec![4]);
    }
}
