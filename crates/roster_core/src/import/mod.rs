//! One-time seed import.
//!
//! Merges two exports into an initial roster: the squad sheet (who played
//! for which team last season, with games counts and a main/fill-in flag
//! per team tab) and the registration survey (contact details and intent
//! answers, one or more submissions per person).
//!
//! Matching between the two is by normalized name. Survey respondents who
//! never appear in the squad sheet come in as recruits.

use std::collections::HashMap;

use crate::data::ClubReference;
use crate::models::{Appearance, Player, SurveyInfo};
use crate::roster::Roster;

/// One squad-sheet row: a player's participation for one team.
#[derive(Debug, Clone)]
pub struct SquadSheetRow {
    pub team: String,
    pub name: String,
    pub games: u32,
    pub is_main: bool,
}

/// One survey submission.
#[derive(Debug, Clone, Default)]
pub struct SurveyRow {
    pub first_name: String,
    pub surname: String,
    pub info: SurveyInfo,
}

impl SurveyRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.surname.trim())
    }
}

/// What the import did, for the seed command's summary output.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub recruits: usize,
    /// Squad-sheet players whose main team could not be resolved.
    pub skipped: Vec<String>,
}

/// Collapse whitespace and case so sheet and survey spellings line up.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Strip a mobile number down to its digits. None when nothing is left.
pub fn normalize_mobile(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    (!digits.is_empty()).then_some(digits)
}

/// Keep the latest submission per person, keyed by normalized name.
/// Submission timestamps are the sheet's own strings; they sort
/// lexicographically.
pub fn latest_surveys(rows: Vec<SurveyRow>) -> HashMap<String, SurveyRow> {
    let mut latest: HashMap<String, SurveyRow> = HashMap::new();
    for row in rows {
        if row.first_name.trim().is_empty() || row.surname.trim().is_empty() {
            continue;
        }
        let key = normalize_name(&row.full_name());
        match latest.get(&key) {
            Some(existing)
                if row.info.submitted_at.as_deref().unwrap_or("")
                    < existing.info.submitted_at.as_deref().unwrap_or("") => {}
            _ => {
                latest.insert(key, row);
            }
        }
    }
    latest
}

/// Pick a player's main team from their sheet rows: highest games wins,
/// grade rank breaks ties. Rows flagged main are preferred; when none are,
/// every row is considered.
pub fn determine_main_team(rows: &[SquadSheetRow], reference: &ClubReference) -> Option<String> {
    let mains: Vec<&SquadSheetRow> = rows.iter().filter(|r| r.is_main).collect();
    let candidates: Vec<&SquadSheetRow> =
        if mains.is_empty() { rows.iter().collect() } else { mains };
    candidates
        .iter()
        .max_by_key(|r| (r.games, reference.grade_rank(&r.team)))
        .map(|r| r.team.clone())
}

/// Build the initial roster from sheet and survey rows.
pub fn build_roster(
    squad_rows: Vec<SquadSheetRow>,
    survey_rows: Vec<SurveyRow>,
    reference: &ClubReference,
) -> (Roster, ImportReport) {
    let mut surveys = latest_surveys(survey_rows);
    let mut report = ImportReport::default();
    let mut roster = Roster::default();

    // Group sheet rows per player, first-seen order.
    let mut order: Vec<String> = Vec::new();
    let mut by_player: HashMap<String, Vec<SquadSheetRow>> = HashMap::new();
    for row in squad_rows {
        if row.name.trim().is_empty() {
            continue;
        }
        let key = normalize_name(&row.name);
        if !by_player.contains_key(&key) {
            order.push(key.clone());
        }
        by_player.entry(key).or_default().push(row);
    }

    let mut next_id = 1u32;
    for key in order {
        let rows = &by_player[&key];
        let display_name = rows[0].name.trim().to_string();

        let Some(main_team) = determine_main_team(rows, reference) else {
            log::warn!("Skipping {display_name}: no main team could be determined");
            report.skipped.push(display_name);
            continue;
        };

        let mut player = Player::with_main_team(
            next_id,
            display_name,
            main_team.clone(),
            0,
            &reference.default_status,
        );
        player.appearances.clear();
        for row in rows {
            // The main flag only sticks to the resolved main team; a main
            // row for another team becomes a fill-in record there.
            let is_main = row.is_main && row.team == main_team;
            if player.has_appearance_for(&row.team) {
                continue;
            }
            player.appearances.push(Appearance::new(row.team.clone(), row.games, is_main));
        }

        if let Some(survey) = surveys.remove(&key) {
            player.survey = survey.info;
            if let Some(mobile) = player.survey.mobile.take() {
                player.survey.mobile = normalize_mobile(&mobile);
            }
        }

        next_id += 1;
        report.imported += 1;
        roster.insert(player);
    }

    // Whoever answered the survey without a squad-sheet row is new to the
    // club: no history, recruit flag set.
    let mut leftovers: Vec<(String, SurveyRow)> = surveys.into_iter().collect();
    leftovers.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, survey) in leftovers {
        let mut player =
            Player::recruit(next_id, survey.full_name(), &reference.default_status);
        player.survey = survey.info;
        if let Some(mobile) = player.survey.mobile.take() {
            player.survey.mobile = normalize_mobile(&mobile);
        }
        next_id += 1;
        report.recruits += 1;
        roster.insert(player);
    }

    log::info!(
        "Seeded {} players ({} recruits, {} skipped)",
        roster.len(),
        report.recruits,
        report.skipped.len()
    );
    (roster, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_reference;

    fn row(team: &str, name: &str, games: u32, is_main: bool) -> SquadSheetRow {
        SquadSheetRow { team: team.to_string(), name: name.to_string(), games, is_main }
    }

    fn survey(first: &str, last: &str, submitted_at: &str) -> SurveyRow {
        SurveyRow {
            first_name: first.to_string(),
            surname: last.to_string(),
            info: SurveyInfo {
                submitted_at: Some(submitted_at.to_string()),
                ..SurveyInfo::default()
            },
        }
    }

    #[test]
    fn normalize_name_collapses_whitespace_and_case() {
        assert_eq!(normalize_name("  Sam   WALKER "), "sam walker");
    }

    #[test]
    fn normalize_mobile_keeps_digits_only() {
        assert_eq!(normalize_mobile("+61 400 123 456").as_deref(), Some("61400123456"));
        assert_eq!(normalize_mobile("n/a"), None);
    }

    #[test]
    fn latest_submission_wins() {
        let latest = latest_surveys(vec![
            survey("Sam", "Walker", "2025-09-01 10:00"),
            survey("Sam", "Walker", "2025-09-14 08:30"),
            survey("", "Walker", "2025-09-20 09:00"),
        ]);
        assert_eq!(latest.len(), 1);
        assert_eq!(
            latest["sam walker"].info.submitted_at.as_deref(),
            Some("2025-09-14 08:30")
        );
    }

    #[test]
    fn main_team_highest_games_then_grade() {
        let reference = default_reference();
        // Same games for PB and PLR: the higher grade (PLR) wins.
        let rows =
            vec![row("PB", "X", 9, true), row("PLR", "X", 9, true), row("PE", "X", 12, false)];
        assert_eq!(determine_main_team(&rows, reference).as_deref(), Some("PLR"));

        // No main rows at all: fall back to every row.
        let rows = vec![row("PC", "Y", 3, false), row("PE", "Y", 7, false)];
        assert_eq!(determine_main_team(&rows, reference).as_deref(), Some("PE"));

        assert_eq!(determine_main_team(&[], reference), None);
    }

    #[test]
    fn build_roster_merges_sheet_and_survey() {
        let reference = default_reference();
        let squad = vec![
            row("PL", "Sam Walker", 14, true),
            row("PB", "Sam Walker", 2, false),
            row("PB", "Jo Hart", 11, true),
        ];
        let mut jo_survey = survey("Jo", "Hart", "2025-09-10 12:00");
        jo_survey.info.mobile = Some("+61 499 000 111".to_string());
        let surveys = vec![jo_survey, survey("Robin", "Pike", "2025-09-11 12:00")];

        let (roster, report) = build_roster(squad, surveys, reference);

        assert_eq!(report.imported, 2);
        assert_eq!(report.recruits, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(roster.len(), 3);

        let sam = roster.players().iter().find(|p| p.name == "Sam Walker").unwrap();
        assert_eq!(sam.main_team.as_deref(), Some("PL"));
        assert_eq!(sam.appearances.len(), 2);
        assert!(sam.main_appearance().is_some());
        assert!(!sam.is_recruit);

        let jo = roster.players().iter().find(|p| p.name == "Jo Hart").unwrap();
        assert_eq!(jo.survey.mobile.as_deref(), Some("61499000111"));

        let robin = roster.players().iter().find(|p| p.name == "Robin Pike").unwrap();
        assert!(robin.is_recruit);
        assert!(robin.appearances.is_empty());

        for p in roster.players() {
            assert!(p.validate(reference).is_ok());
        }
    }

    #[test]
    fn main_flag_for_another_team_becomes_fill_in() {
        let reference = default_reference();
        // Flagged main on two tabs; PL resolves as main, the PB record
        // must come through as a fill-in to keep the single-main invariant.
        let squad = vec![row("PL", "Dual Main", 10, true), row("PB", "Dual Main", 4, true)];
        let (roster, _) = build_roster(squad, vec![], reference);

        let p = &roster.players()[0];
        assert_eq!(p.main_team.as_deref(), Some("PL"));
        assert_eq!(p.appearances.iter().filter(|a| a.is_main).count(), 1);
        assert!(p.validate(reference).is_ok());
    }
}
