pub mod roster_json;

pub use roster_json::{
    add_appearance_json, create_player_json, dashboard_json, delete_player_json,
    get_player_json, goalkeepers_json, list_players_json, reference_json,
    remove_appearance_json, team_view_json, update_player_json,
};
