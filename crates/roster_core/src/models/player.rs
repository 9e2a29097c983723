use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::ClubReference;
use crate::error::RosterError;

/// One player's participation record for one team in the reference season.
///
/// A player owns at most one appearance per team, and at most one of them
/// may be the main squad appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub team: String,
    pub games: u32,
    #[serde(default)]
    pub is_main: bool,
}

impl Appearance {
    pub fn new(team: impl Into<String>, games: u32, is_main: bool) -> Self {
        Self { team: team.into(), games, is_main }
    }
}

/// Contact details and raw survey answers carried through from the
/// registration sheet. The planner never interprets these; they are
/// displayed on the player detail view as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub submission_id: Option<String>,
    #[serde(default)]
    pub respondent_id: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub playing_availability: Option<String>,
    #[serde(default)]
    pub fillin_emergency: Option<String>,
    #[serde(default)]
    pub happy_followup: Option<String>,
    #[serde(default)]
    pub reason_unsure: Option<String>,
    #[serde(default)]
    pub what_describes_you: Option<String>,
    #[serde(default)]
    pub interested_in: Option<String>,
    #[serde(default)]
    pub club_level_last: Option<String>,
    #[serde(default)]
    pub main_team_last_year: Option<String>,
    #[serde(default)]
    pub did_play_last_year: Option<String>,
    #[serde(default)]
    pub club_grade_last: Option<String>,
    #[serde(default)]
    pub playing_preference: Option<String>,
    #[serde(default)]
    pub anything_else: Option<String>,
}

/// A club member in the planning roster.
///
/// `main_team` and the appearance list describe the season just played;
/// `status`, `position` and `team_2026` hold the plan for next season and
/// are only ever written through the roster's assignment operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,

    /// Team the player was primary-squad for last season. None for
    /// recruits and players without a resolved assignment.
    #[serde(default)]
    pub main_team: Option<String>,

    /// Next-season intent, one of the configured status values.
    pub status: String,

    #[serde(default)]
    pub position: Option<String>,

    /// Planned squad for next season. Independent of `status`.
    #[serde(default)]
    pub team_2026: Option<String>,

    /// True for players with no prior-season appearance history.
    #[serde(default)]
    pub is_recruit: bool,

    #[serde(default)]
    pub notes: String,

    #[serde(flatten)]
    pub survey: SurveyInfo,

    #[serde(default)]
    pub appearances: Vec<Appearance>,

    #[serde(default = "now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "now")]
    pub updated_at: DateTime<Utc>,
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

impl Player {
    /// Create a player with a main squad appearance for `main_team`.
    pub fn with_main_team(
        id: u32,
        name: impl Into<String>,
        main_team: impl Into<String>,
        games: u32,
        status: impl Into<String>,
    ) -> Self {
        let main_team = main_team.into();
        let ts = now();
        Self {
            id,
            name: name.into(),
            main_team: Some(main_team.clone()),
            status: status.into(),
            position: None,
            team_2026: None,
            is_recruit: false,
            notes: String::new(),
            survey: SurveyInfo::default(),
            appearances: vec![Appearance::new(main_team, games, true)],
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Create a recruit: no prior-season history, no appearances.
    pub fn recruit(id: u32, name: impl Into<String>, status: impl Into<String>) -> Self {
        let ts = now();
        Self {
            id,
            name: name.into(),
            main_team: None,
            status: status.into(),
            position: None,
            team_2026: None,
            is_recruit: true,
            notes: String::new(),
            survey: SurveyInfo::default(),
            appearances: Vec::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    pub fn main_appearance(&self) -> Option<&Appearance> {
        self.appearances.iter().find(|a| a.is_main)
    }

    pub fn appearance_for(&self, team: &str) -> Option<&Appearance> {
        self.appearances.iter().find(|a| a.team == team)
    }

    pub fn has_appearance_for(&self, team: &str) -> bool {
        self.appearance_for(team).is_some()
    }

    /// Games logged for `team` last season, 0 when the player never
    /// appeared for it.
    pub fn games_for(&self, team: &str) -> u32 {
        self.appearance_for(team).map(|a| a.games).unwrap_or(0)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = now();
    }

    /// Check the entity invariants against the club reference lists.
    ///
    /// Derivations tolerate players that fail this (they just fall out of
    /// the affected views); imports and creations call it to keep bad rows
    /// out of the roster in the first place.
    pub fn validate(&self, reference: &ClubReference) -> Result<(), RosterError> {
        let fail = |msg: String| Err(RosterError::Invariant(format!("player {}: {msg}", self.id)));

        if self.name.trim().is_empty() {
            return fail("name is empty".into());
        }
        if !reference.is_status(&self.status) {
            return fail(format!("status {:?} not in reference list", self.status));
        }
        if let Some(position) = &self.position {
            if !reference.is_position(position) {
                return fail(format!("position {position:?} not in reference list"));
            }
        }
        for team in [&self.main_team, &self.team_2026].into_iter().flatten() {
            if !reference.is_team(team) {
                return fail(format!("team {team:?} not in reference list"));
            }
        }

        let mut mains = self.appearances.iter().filter(|a| a.is_main);
        if let Some(main) = mains.next() {
            if mains.next().is_some() {
                return fail("more than one main appearance".into());
            }
            if self.main_team.as_deref() != Some(main.team.as_str()) {
                return fail(format!(
                    "main appearance team {:?} does not match main_team {:?}",
                    main.team, self.main_team
                ));
            }
        }
        for (i, a) in self.appearances.iter().enumerate() {
            if !reference.is_team(&a.team) {
                return fail(format!("appearance team {:?} not in reference list", a.team));
            }
            if self.appearances[..i].iter().any(|b| b.team == a.team) {
                return fail(format!("duplicate appearance for {:?}", a.team));
            }
        }

        Ok(())
    }
}
