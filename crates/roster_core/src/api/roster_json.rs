//! JSON boundary for a thin HTTP or UI shell.
//!
//! Requests come in as JSON strings, responses go out as JSON strings;
//! the shell owns transport and rendering and nothing else. Errors are
//! returned as `code: message` strings using the stable codes from
//! [`RosterError::code`].

use serde::{Deserialize, Serialize};

use crate::analysis::{
    dashboard_summary, filter_players, goalkeepers, planned_squad, players_for_team, recruits,
    team_fill_ins, team_main_squad,
};
use crate::data::ClubReference;
use crate::error::RosterError;
use crate::models::{Player, PlayerPatch, SurveyInfo};
use crate::roster::{NewPlayer, Roster};

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn roster_err(e: &RosterError) -> String {
    err_code(e.code(), e)
}

fn parse<'a, T: Deserialize<'a>>(request_json: &'a str) -> Result<T, String> {
    serde_json::from_str(request_json).map_err(|e| err_code("bad_request", e))
}

fn respond<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| err_code("serialization", e))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPlayersRequest {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub recruits_only: bool,
}

/// List players, optionally restricted to one team's participants (any
/// appearance), a name filter, or recruits only.
pub fn list_players_json(roster: &Roster, request_json: &str) -> Result<String, String> {
    let request: ListPlayersRequest = parse(request_json)?;

    let players = roster.players();
    let selected: Vec<&Player> = match (&request.team, request.recruits_only) {
        (Some(team), _) => players_for_team(players, team),
        (None, true) => recruits(players),
        (None, false) => filter_players(players, request.filter.as_deref().unwrap_or("")),
    };

    // Name filter composes with the other selections.
    let selected: Vec<&Player> = match &request.filter {
        Some(filter) if request.team.is_some() || request.recruits_only => {
            let needle = filter.to_lowercase();
            selected.into_iter().filter(|p| p.name.to_lowercase().contains(&needle)).collect()
        }
        _ => selected,
    };

    respond(&selected)
}

pub fn get_player_json(roster: &Roster, player_id: u32) -> Result<String, String> {
    let player =
        roster.player(player_id).ok_or_else(|| roster_err(&RosterError::PlayerNotFound(player_id)))?;
    respond(&player)
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub main_team: String,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(flatten)]
    pub survey: SurveyInfo,
}

pub fn create_player_json(
    roster: &mut Roster,
    reference: &ClubReference,
    request_json: &str,
) -> Result<String, String> {
    let request: CreatePlayerRequest = parse(request_json)?;
    let new = NewPlayer {
        name: request.name,
        main_team: request.main_team,
        games: request.games,
        status: request.status,
        notes: request.notes,
        survey: request.survey,
    };
    let player = roster.create_player(new, reference).map_err(|e| roster_err(&e))?;
    respond(&player)
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlayerRequest {
    pub player_id: u32,
    #[serde(flatten)]
    pub patch: PlayerPatch,
}

/// Combined single-player edit; all fields validate before any commits.
pub fn update_player_json(
    roster: &mut Roster,
    reference: &ClubReference,
    request_json: &str,
) -> Result<String, String> {
    let request: UpdatePlayerRequest = parse(request_json)?;
    let player = roster
        .apply_patch(request.player_id, &request.patch, reference)
        .map_err(|e| roster_err(&e))?;
    respond(&player)
}

pub fn delete_player_json(roster: &mut Roster, player_id: u32) -> Result<String, String> {
    roster.delete_player(player_id).map_err(|e| roster_err(&e))?;
    respond(&serde_json::json!({ "ok": true }))
}

#[derive(Debug, Deserialize)]
pub struct AddAppearanceRequest {
    pub player_id: u32,
    pub team: String,
    #[serde(default)]
    pub games: u32,
}

pub fn add_appearance_json(
    roster: &mut Roster,
    reference: &ClubReference,
    request_json: &str,
) -> Result<String, String> {
    let request: AddAppearanceRequest = parse(request_json)?;
    let appearances = roster
        .add_appearance(request.player_id, &request.team, request.games, reference)
        .map_err(|e| roster_err(&e))?;
    respond(&appearances)
}

#[derive(Debug, Deserialize)]
pub struct RemoveAppearanceRequest {
    pub player_id: u32,
    pub team: String,
}

pub fn remove_appearance_json(roster: &mut Roster, request_json: &str) -> Result<String, String> {
    let request: RemoveAppearanceRequest = parse(request_json)?;
    let appearances = roster
        .remove_appearance(request.player_id, &request.team)
        .map_err(|e| roster_err(&e))?;
    respond(&appearances)
}

pub fn dashboard_json(roster: &Roster, reference: &ClubReference) -> Result<String, String> {
    respond(&dashboard_summary(roster.players(), reference))
}

#[derive(Debug, Deserialize)]
pub struct TeamViewRequest {
    pub team: String,
}

#[derive(Debug, Serialize)]
struct TeamViewResponse<'a> {
    team: &'a str,
    main_squad_2025: Vec<&'a Player>,
    fill_ins_2025: Vec<&'a Player>,
    planned_2026: Vec<&'a Player>,
}

/// The squad-planning screen: last season's main squad and fill-ins next
/// to the planned squad for the coming season.
pub fn team_view_json(
    roster: &Roster,
    reference: &ClubReference,
    request_json: &str,
) -> Result<String, String> {
    let request: TeamViewRequest = parse(request_json)?;
    if !reference.is_team(&request.team) {
        return Err(err_code("unknown_team", format!("unknown team {:?}", request.team)));
    }

    let players = roster.players();
    respond(&TeamViewResponse {
        team: &request.team,
        main_squad_2025: team_main_squad(players, &request.team),
        fill_ins_2025: team_fill_ins(players, &request.team),
        planned_2026: planned_squad(players, &request.team),
    })
}

pub fn goalkeepers_json(roster: &Roster, reference: &ClubReference) -> Result<String, String> {
    respond(&goalkeepers(roster.players(), reference))
}

/// The reference lists a shell needs to render selects and the legend.
pub fn reference_json(reference: &ClubReference) -> Result<String, String> {
    respond(reference)
}
