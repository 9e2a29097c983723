use thiserror::Error;

use crate::store::StoreError;

/// Errors returned by the assignment operations.
///
/// Validation variants carry the player id and the offending value so a
/// caller can render a specific message. Validation happens before any
/// field is written, so a rejected mutation never leaves a player in a
/// partially updated state.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("invalid {field} for player {player_id}: {value:?} is not in the configured list")]
    InvalidEnum { player_id: u32, field: &'static str, value: String },

    #[error("unknown team {team:?} for player {player_id}")]
    UnknownTeam { player_id: u32, team: String },

    #[error("player {player_id} already has an appearance for {team}")]
    DuplicateAppearance { player_id: u32, team: String },

    #[error("cannot remove the main squad appearance for {team} from player {player_id}")]
    CannotRemoveMain { player_id: u32, team: String },

    #[error("player {0} not found")]
    PlayerNotFound(u32),

    #[error("player {player_id} has no appearance for {team}")]
    AppearanceNotFound { player_id: u32, team: String },

    #[error("invalid player data: {0}")]
    Invariant(String),

    #[error("roster store unavailable: {0}")]
    Store(#[from] StoreError),
}

impl RosterError {
    /// Stable machine-readable code for the API layer.
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::InvalidEnum { .. } => "invalid_enum",
            RosterError::UnknownTeam { .. } => "unknown_team",
            RosterError::DuplicateAppearance { .. } => "duplicate_appearance",
            RosterError::CannotRemoveMain { .. } => "cannot_remove_main",
            RosterError::PlayerNotFound(_) | RosterError::AppearanceNotFound { .. } => "not_found",
            RosterError::Invariant(_) => "invariant",
            RosterError::Store(_) => "store_unavailable",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
