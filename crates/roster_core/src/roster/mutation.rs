//! Assignment operations.
//!
//! Each operation validates fully before writing, reports failure through
//! `RosterError` rather than panicking, and is idempotent: re-applying the
//! same value succeeds without changing the player further.

use super::Roster;
use crate::data::ClubReference;
use crate::error::{Result, RosterError};
use crate::models::{Appearance, Player, PlayerPatch};

impl Roster {
    /// Replace a player's next-season status.
    pub fn set_status(
        &mut self,
        id: u32,
        status: &str,
        reference: &ClubReference,
    ) -> Result<&Player> {
        let idx = self.index_of(id)?;
        if !reference.is_status(status) {
            return Err(RosterError::InvalidEnum {
                player_id: id,
                field: "status",
                value: status.to_string(),
            });
        }

        let player = &mut self.players[idx];
        if player.status != status {
            player.status = status.to_string();
            player.touch();
        }
        Ok(&self.players[idx])
    }

    /// Replace a player's position, or clear it with None.
    pub fn set_position(
        &mut self,
        id: u32,
        position: Option<&str>,
        reference: &ClubReference,
    ) -> Result<&Player> {
        let idx = self.index_of(id)?;
        if let Some(position) = position {
            if !reference.is_position(position) {
                return Err(RosterError::InvalidEnum {
                    player_id: id,
                    field: "position",
                    value: position.to_string(),
                });
            }
        }

        let player = &mut self.players[idx];
        if player.position.as_deref() != position {
            player.position = position.map(str::to_string);
            player.touch();
        }
        Ok(&self.players[idx])
    }

    /// Assign (or clear) the planned next-season team.
    ///
    /// This is the only operation that drives planned-squad membership; it
    /// never creates or touches an appearance, and it is deliberately
    /// independent of `status`.
    pub fn set_team_2026(
        &mut self,
        id: u32,
        team: Option<&str>,
        reference: &ClubReference,
    ) -> Result<&Player> {
        let idx = self.index_of(id)?;
        if let Some(team) = team {
            if !reference.is_team(team) {
                return Err(RosterError::UnknownTeam { player_id: id, team: team.to_string() });
            }
        }

        let player = &mut self.players[idx];
        if player.team_2026.as_deref() != team {
            player.team_2026 = team.map(str::to_string);
            player.touch();
        }
        Ok(&self.players[idx])
    }

    /// Record a fill-in appearance for `team`.
    ///
    /// Rejected when the player already covers that team, including via
    /// their main squad appearance.
    pub fn add_appearance(
        &mut self,
        id: u32,
        team: &str,
        games: u32,
        reference: &ClubReference,
    ) -> Result<&[Appearance]> {
        let idx = self.index_of(id)?;
        if !reference.is_team(team) {
            return Err(RosterError::UnknownTeam { player_id: id, team: team.to_string() });
        }

        let player = &mut self.players[idx];
        if player.main_team.as_deref() == Some(team) || player.has_appearance_for(team) {
            return Err(RosterError::DuplicateAppearance {
                player_id: id,
                team: team.to_string(),
            });
        }

        player.appearances.push(Appearance::new(team, games, false));
        player.touch();
        Ok(&self.players[idx].appearances)
    }

    /// Remove a fill-in appearance. The main appearance is not removable
    /// through this path.
    pub fn remove_appearance(&mut self, id: u32, team: &str) -> Result<&[Appearance]> {
        let idx = self.index_of(id)?;
        let player = &mut self.players[idx];

        let pos = player.appearances.iter().position(|a| a.team == team).ok_or_else(|| {
            RosterError::AppearanceNotFound { player_id: id, team: team.to_string() }
        })?;
        if player.appearances[pos].is_main {
            return Err(RosterError::CannotRemoveMain { player_id: id, team: team.to_string() });
        }

        player.appearances.remove(pos);
        player.touch();
        Ok(&self.players[idx].appearances)
    }

    /// Apply a combined edit atomically: every present field is validated
    /// up front, then all of them commit. A failed patch changes nothing.
    pub fn apply_patch(
        &mut self,
        id: u32,
        patch: &PlayerPatch,
        reference: &ClubReference,
    ) -> Result<&Player> {
        let idx = self.index_of(id)?;

        if let Some(status) = &patch.status {
            if !reference.is_status(status) {
                return Err(RosterError::InvalidEnum {
                    player_id: id,
                    field: "status",
                    value: status.clone(),
                });
            }
        }
        if let Some(Some(position)) = &patch.position {
            if !reference.is_position(position) {
                return Err(RosterError::InvalidEnum {
                    player_id: id,
                    field: "position",
                    value: position.clone(),
                });
            }
        }
        if let Some(Some(team)) = &patch.team_2026 {
            if !reference.is_team(team) {
                return Err(RosterError::UnknownTeam { player_id: id, team: team.clone() });
            }
        }

        let player = &mut self.players[idx];
        let mut changed = false;
        if let Some(status) = &patch.status {
            if &player.status != status {
                player.status = status.clone();
                changed = true;
            }
        }
        if let Some(notes) = &patch.notes {
            if &player.notes != notes {
                player.notes = notes.clone();
                changed = true;
            }
        }
        if let Some(position) = &patch.position {
            if &player.position != position {
                player.position = position.clone();
                changed = true;
            }
        }
        if let Some(team) = &patch.team_2026 {
            if &player.team_2026 != team {
                player.team_2026 = team.clone();
                changed = true;
            }
        }
        if changed {
            player.touch();
        }
        Ok(&self.players[idx])
    }
}
