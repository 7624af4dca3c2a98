//! Fixed datasets served while offline mode is enabled

use crate::constants::fallback::POPULATED_LEAGUE_ID;
use crate::football::models::{Country, League, Standing, Team};

const BADGE_BASE_URL: &str = "https://apiv3.apifootball.com/badges";

pub fn countries() -> Vec<Country> {
    vec![
        Country::new("41", "England"),
        Country::new("6", "Spain"),
        Country::new("5", "Germany"),
        Country::new("3", "France"),
        Country::new("4", "Italy"),
    ]
}

/// Leagues for a country name, matched case-insensitively.
/// Only England, Spain and Germany have entries.
pub fn leagues(country_name: &str) -> Vec<League> {
    match country_name.to_lowercase().as_str() {
        "england" => vec![
            League::new("152", "Premier League", "41", "England"),
            League::new("153", "Championship", "41", "England"),
        ],
        "spain" => vec![League::new("302", "La Liga", "6", "Spain")],
        "germany" => vec![League::new("175", "Bundesliga", "5", "Germany")],
        _ => Vec::new(),
    }
}

/// Standings for a league id (exact match); only the Premier League is populated
pub fn standings(league_id: &str) -> Vec<Standing> {
    if league_id != POPULATED_LEAGUE_ID {
        return Vec::new();
    }

    vec![
        premier_league_row(
            "2629",
            "Manchester City",
            "manchester-city",
            ["1", "20", "15", "3", "2", "55", "25", "48"],
        ),
        premier_league_row(
            "2633",
            "Liverpool",
            "liverpool",
            ["2", "20", "14", "4", "2", "52", "28", "46"],
        ),
        premier_league_row(
            "2628",
            "Arsenal",
            "arsenal",
            ["3", "20", "13", "4", "3", "48", "30", "43"],
        ),
    ]
}

/// Teams for a league id (exact match); only the Premier League is populated
pub fn teams(league_id: &str) -> Vec<Team> {
    if league_id != POPULATED_LEAGUE_ID {
        return Vec::new();
    }

    [
        ("2629", "Manchester City", "manchester-city"),
        ("2633", "Liverpool", "liverpool"),
        ("2634", "Arsenal", "arsenal"),
        ("2635", "Chelsea", "chelsea"),
        ("2631", "Manchester United", "manchester-united"),
        ("2636", "Tottenham", "tottenham"),
    ]
    .into_iter()
    .map(|(key, name, slug)| Team::new(key, name, badge_url(key, slug)))
    .collect()
}

fn badge_url(team_id: &str, slug: &str) -> String {
    format!("{BADGE_BASE_URL}/{team_id}_{slug}.png")
}

/// Columns: position, played, wins, draws, losses, goals for, goals against, points
fn premier_league_row(
    team_id: &str,
    team_name: &str,
    slug: &str,
    columns: [&str; 8],
) -> Standing {
    let [position, played, wins, draws, losses, goals_for, goals_against, points] = columns;
    Standing {
        country_name: "England".to_string(),
        league_id: POPULATED_LEAGUE_ID.to_string(),
        league_name: "Premier League".to_string(),
        team_id: team_id.to_string(),
        team_name: team_name.to_string(),
        position: position.to_string(),
        played: played.to_string(),
        wins: wins.to_string(),
        draws: draws.to_string(),
        losses: losses.to_string(),
        goals_for: goals_for.to_string(),
        goals_against: goals_against.to_string(),
        points: points.to_string(),
        team_badge: badge_url(team_id, slug),
    }
}
