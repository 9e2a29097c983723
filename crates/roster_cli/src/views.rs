//! Terminal rendering for the browse commands.

use roster_core::{
    dashboard_summary, goalkeepers, planned_squad, recruits, team_fill_ins, team_main_squad,
    ClubReference, Player, Roster,
};

pub fn print_dashboard(roster: &Roster, reference: &ClubReference) {
    let summary = dashboard_summary(roster.players(), reference);

    println!(
        "{} main squad players, {} fill-in appearances\n",
        summary.total_main, summary.total_fill_ins
    );
    for team in &summary.teams {
        println!("{:<6} {:>3} main  {:>3} fill-ins", team.team, team.main_squad, team.fill_ins);
        for (status, count) in &team.status_breakdown {
            println!(
                "       {:<26} {:>3}  ({:.0}%)",
                status,
                count,
                team.status_percent(status)
            );
        }
    }
}

pub fn print_team(roster: &Roster, team: &str) {
    let players = roster.players();

    let main = team_main_squad(players, team);
    println!("{team} — 2025 Main Squad — {} players", main.len());
    print_table(&main, Some(team), false);

    let fills = team_fill_ins(players, team);
    if !fills.is_empty() {
        println!("\n{team} — 2025 Fill-ins — {} players", fills.len());
        print_table(&fills, Some(team), true);
    }

    let planned = planned_squad(players, team);
    println!("\n{team} — 2026 Squad (Planned) — {} players", planned.len());
    print_table(&planned, None, false);
}

pub fn print_players(players: &[&Player]) {
    print_table(players, None, true);
}

pub fn print_goalkeepers(roster: &Roster, reference: &ClubReference) {
    let keepers = goalkeepers(roster.players(), reference);
    println!("Goalkeepers — {} players", keepers.len());
    print_table(&keepers, None, true);
}

pub fn print_recruits(roster: &Roster) {
    let new_faces = recruits(roster.players());
    println!("Recruits — {} players", new_faces.len());
    print_table(&new_faces, None, true);
}

/// Shared table body. `games_team` picks which team's games column to
/// show (fill-in views show the visited team, not the main one).
fn print_table(players: &[&Player], games_team: Option<&str>, show_main_team: bool) {
    if players.is_empty() {
        println!("  (no players)");
        return;
    }

    for (i, p) in players.iter().enumerate() {
        let games = match games_team {
            Some(team) => p.games_for(team),
            None => p.main_appearance().map(|a| a.games).unwrap_or(0),
        };
        let main_team = if show_main_team {
            format!(" {:<6}", p.main_team.as_deref().unwrap_or("—"))
        } else {
            String::new()
        };
        let also: Vec<String> = p
            .appearances
            .iter()
            .filter(|a| !a.is_main)
            .map(|a| format!("{}({})", a.team, a.games))
            .collect();

        println!(
            "{:>3}  {:<24}{} {:<14} {:>3}  {:<26} {:<6} {}",
            i + 1,
            p.name,
            main_team,
            p.position.as_deref().unwrap_or("—"),
            games,
            p.status,
            p.team_2026.as_deref().unwrap_or("—"),
            if also.is_empty() { "—".to_string() } else { also.join(", ") },
        );
    }
}
