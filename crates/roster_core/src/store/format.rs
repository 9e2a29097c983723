use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Player;
use crate::roster::Roster;

/// On-disk roster format: a versioned JSON document holding every player.
///
/// Small enough that whole-file read/write is the transaction model; the
/// store rewrites the file atomically on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub players: Vec<Player>,
}

impl RosterFile {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            schema_version: crate::SCHEMA_VERSION,
            saved_at: Utc::now(),
            players: roster.players().to_vec(),
        }
    }

    pub fn into_roster(self) -> Roster {
        Roster::from_players(self.players)
    }
}
