//! Club reference lists: teams, statuses, positions.
//!
//! The status and position wording changed between season revisions of the
//! planning sheet, so none of it is hard-coded: validation and the color
//! legend are driven by a `ClubReference` loaded from YAML and passed
//! explicitly into every derivation and mutation call.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Default reference data (compile-time embedded).
pub const DEFAULT_REFERENCE_YAML: &str = include_str!("../../../../data/club_reference.yaml");

static DEFAULT_REFERENCE: OnceLock<ClubReference> = OnceLock::new();

/// The embedded default `ClubReference`.
///
/// # Panics
///
/// Panics if the embedded YAML fails to parse, which cannot happen in a
/// normal build.
pub fn default_reference() -> &'static ClubReference {
    DEFAULT_REFERENCE.get_or_init(|| {
        serde_yaml::from_str(DEFAULT_REFERENCE_YAML)
            .expect("Failed to parse embedded club_reference.yaml")
    })
}

/// Authoritative team/status/position lists for one planning season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubReference {
    pub schema_version: u32,

    /// Known teams. `main_team`, `team_2026` and appearance teams must all
    /// come from this list.
    pub teams: Vec<String>,

    /// Team -> grade rank, higher is a higher grade. Seed-time tiebreak.
    #[serde(default)]
    pub grade_order: HashMap<String, u32>,

    /// Allowed next-season intent values, in display order.
    pub statuses: Vec<String>,

    /// Status given to players nobody has spoken to yet.
    pub default_status: String,

    /// Allowed position values, in display order.
    pub positions: Vec<String>,

    /// Which position value marks a goalkeeper.
    #[serde(default = "default_goalkeeper_position")]
    pub goalkeeper_position: String,

    /// Status -> display color, for the dashboard legend.
    #[serde(default)]
    pub status_colors: HashMap<String, String>,
}

fn default_goalkeeper_position() -> String {
    "GK".to_string()
}

impl ClubReference {
    /// Load reference data from a YAML file.
    pub fn load_from_path(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path)?;
        let reference: ClubReference = serde_yaml::from_str(&text)?;
        reference.check()?;
        log::debug!("Loaded club reference from {:?}", path);
        Ok(reference)
    }

    /// Reject reference files that would make every validation fail.
    fn check(&self) -> Result<(), StoreError> {
        if self.teams.is_empty() {
            return Err(StoreError::BadReference("team list is empty".to_string()));
        }
        if self.statuses.is_empty() {
            return Err(StoreError::BadReference("status list is empty".to_string()));
        }
        if !self.statuses.contains(&self.default_status) {
            return Err(StoreError::BadReference(format!(
                "default status {:?} is not in the status list",
                self.default_status
            )));
        }
        Ok(())
    }

    pub fn is_team(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    pub fn is_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s == status)
    }

    pub fn is_position(&self, position: &str) -> bool {
        self.positions.iter().any(|p| p == position)
    }

    /// Grade rank for the seed-time main-team tiebreak. Teams missing from
    /// the table rank below every ranked team.
    pub fn grade_rank(&self, team: &str) -> i64 {
        self.grade_order.get(team).map(|&r| r as i64).unwrap_or(-1)
    }

    pub fn status_color(&self, status: &str) -> Option<&str> {
        self.status_colors.get(status).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_reference_parses() {
        let reference = default_reference();
        assert_eq!(reference.schema_version, 1);
        assert!(reference.is_team("PL"));
        assert!(reference.is_team("Metro"));
        assert!(!reference.is_team("Thirds"));
        assert!(reference.is_status("Not heard from"));
        assert!(reference.is_position("GK"));
        assert_eq!(reference.goalkeeper_position, "GK");
        assert!(reference.statuses.contains(&reference.default_status));
    }

    #[test]
    fn grade_rank_orders_the_ladder() {
        let reference = default_reference();
        assert!(reference.grade_rank("PL") > reference.grade_rank("PLR"));
        assert!(reference.grade_rank("PE") > reference.grade_rank("Metro"));
        assert_eq!(reference.grade_rank("Unknown"), -1);
    }

    #[test]
    fn status_colors_cover_every_status() {
        let reference = default_reference();
        for status in &reference.statuses {
            assert!(reference.status_color(status).is_some(), "no color for {status:?}");
        }
    }

    #[test]
    fn bad_reference_rejected() {
        let yaml = "schema_version: 1\nteams: []\nstatuses: [A]\ndefault_status: A\npositions: []\n";
        let reference: ClubReference = serde_yaml::from_str(yaml).unwrap();
        assert!(reference.check().is_err());
    }
}
