use serde::{Deserialize, Deserializer};

/// Combined single-player edit, applied atomically: every present field is
/// validated first, then all of them commit together.
///
/// For the nullable fields an absent key means "keep" and an explicit null
/// means "clear", so the outer `Option` is presence and the inner one is
/// the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerPatch {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub team_2026: Option<Option<String>>,
}

impl PlayerPatch {
    pub fn status(status: impl Into<String>) -> Self {
        Self { status: Some(status.into()), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.notes.is_none()
            && self.position.is_none()
            && self.team_2026.is_none()
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
