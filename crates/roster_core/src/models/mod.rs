pub mod patch;
pub mod player;

pub use patch::PlayerPatch;
pub use player::{Appearance, Player, SurveyInfo};
