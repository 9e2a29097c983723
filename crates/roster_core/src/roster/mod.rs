//! The mutable player collection and its assignment operations.
//!
//! `Roster` owns the players between store load and store save. All
//! writes go through the operations in `mutation`; each validates against
//! the club reference before touching any field.

mod mutation;


use crate::data::ClubReference;
use crate::error::{Result, RosterError};
use crate::models::{Player, SurveyInfo};

/// In-memory roster. Ids are assigned monotonically, autoincrement style,
/// and never reused within a file's lifetime.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self { players: Vec::new(), next_id: 1 }
    }
}

/// Input for creating a player by hand (the seed import builds players
/// wholesale instead).
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub main_team: String,
    pub games: u32,
    /// Defaults to the reference's default status when None.
    pub status: Option<String>,
    pub notes: String,
    pub survey: SurveyInfo,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, main_team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            main_team: main_team.into(),
            games: 0,
            status: None,
            notes: String::new(),
            survey: SurveyInfo::default(),
        }
    }
}

impl Roster {
    /// Rebuild a roster from stored players, continuing id assignment
    /// after the highest id present.
    pub fn from_players(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|p| p.id).max().map_or(1, |id| id + 1);
        Self { players, next_id }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub(crate) fn index_of(&self, id: u32) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .ok_or(RosterError::PlayerNotFound(id))
    }

    /// Create a player with a main squad appearance, validating the name
    /// and team first.
    pub fn create_player(&mut self, new: NewPlayer, reference: &ClubReference) -> Result<&Player> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::Invariant("player name is empty".to_string()));
        }
        if !reference.is_team(&new.main_team) {
            return Err(RosterError::UnknownTeam { player_id: 0, team: new.main_team });
        }
        let status = new.status.unwrap_or_else(|| reference.default_status.clone());
        if !reference.is_status(&status) {
            return Err(RosterError::InvalidEnum { player_id: 0, field: "status", value: status });
        }

        let id = self.next_id;
        let mut player = Player::with_main_team(id, name, new.main_team, new.games, status);
        player.notes = new.notes;
        player.survey = new.survey;

        self.next_id += 1;
        self.players.push(player);
        log::info!("Created player {id}");
        Ok(&self.players[self.players.len() - 1])
    }

    /// Used by the seed import, which assembles players (appearances and
    /// all) before handing them over.
    pub(crate) fn insert(&mut self, player: Player) {
        self.next_id = self.next_id.max(player.id + 1);
        self.players.push(player);
    }

    pub fn delete_player(&mut self, id: u32) -> Result<Player> {
        let idx = self.index_of(id)?;
        let removed = self.players.remove(idx);
        log::info!("Deleted player {id} ({})", removed.name);
        Ok(removed)
    }
}
