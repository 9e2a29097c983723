//! CSV readers for the seed command.
//!
//! Two inputs: the squad sheet export (one row per player per team, with a
//! Main/Fill-in role column) and the raw registration survey export with
//! its original question headers.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use roster_core::import::{SquadSheetRow, SurveyRow};
use roster_core::SurveyInfo;

/// Read the squad sheet: `Team,Player,Games,Role`.
pub fn read_squad_csv(path: &Path) -> Result<Vec<SquadSheetRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening squad sheet {}", path.display()))?;

    let headers = header_index(&mut reader)?;
    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading squad sheet row {}", line + 2))?;
        let get = |col: &str| field(&headers, &record, col);

        let Some(name) = get("Player") else { continue };
        let Some(team) = get("Team") else { continue };
        let games = get("Games").and_then(|g| g.parse().ok()).unwrap_or(0);
        let role = get("Role").unwrap_or_default();
        let is_main = match role.to_lowercase().as_str() {
            "main" | "main squad" | "" => true,
            "fill-in" | "fillin" | "fill in" => false,
            other => bail!("unknown role {other:?} on squad sheet row {}", line + 2),
        };

        rows.push(SquadSheetRow { team, name, games, is_main });
    }
    Ok(rows)
}

/// Read the survey export, keyed by the sheet's original question headers.
pub fn read_survey_csv(path: &Path) -> Result<Vec<SurveyRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening survey export {}", path.display()))?;

    let headers = header_index(&mut reader)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("reading survey row")?;
        let get = |col: &str| field(&headers, &record, col);

        let (Some(first_name), Some(surname)) = (get("First name"), get("Surname")) else {
            continue;
        };

        rows.push(SurveyRow {
            first_name,
            surname,
            info: SurveyInfo {
                email: get("Email"),
                mobile: get("Mobile number"),
                submission_id: get("Submission ID"),
                respondent_id: get("Respondent ID"),
                submitted_at: get("Submitted at"),
                playing_availability: get("Playing availability for the 2026 winter season?"),
                fillin_emergency: get("Fill-in / emergency"),
                happy_followup: get("Happy for a follow up later?"),
                reason_unsure: get("What's the main reason you're unsure right now?"),
                what_describes_you: get("What best describes you?"),
                interested_in: get("Interested in playing:"),
                club_level_last: get("Club and level lasted played?"),
                main_team_last_year: get("Main team played with last year?"),
                did_play_last_year: get("Did you play last year?"),
                club_grade_last: get("Club and grade/level last played?"),
                playing_preference: get("Playing preference for the 2026 winter season?"),
                anything_else: get("Anything else I should know?"),
            },
        });
    }
    Ok(rows)
}

/// Header name -> column index, trimmed. The sheet export carries stray
/// newlines inside some question headers.
fn header_index(reader: &mut csv::Reader<std::fs::File>) -> Result<HashMap<String, usize>> {
    let headers = reader.headers().context("reading CSV headers")?;
    Ok(headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.split_whitespace().collect::<Vec<_>>().join(" "), i))
        .collect())
}

fn field(headers: &HashMap<String, usize>, record: &csv::StringRecord, col: &str) -> Option<String> {
    let idx = *headers.get(col)?;
    let value = record.get(idx)?.trim();
    (!value.is_empty()).then(|| value.to_string())
}
