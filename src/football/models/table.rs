use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A team returned by a league-scoped fetch. The league association is
/// contextual only; the record itself does not carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Team {
    #[serde(rename = "team_key")]
    pub key: String,
    #[serde(rename = "team_name")]
    pub name: String,
    #[serde(rename = "team_badge", default)]
    pub badge_url: String,
}

impl Team {
    pub fn new(key: impl Into<String>, name: impl Into<String>, badge_url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            badge_url: badge_url.into(),
        }
    }
}

/// One team's row in one league table at fetch time.
///
/// All numeric columns stay as the text upstream sent; nothing here parses,
/// sums or re-ranks them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct Standing {
    #[serde(default)]
    pub country_name: String,
    pub league_id: String,
    #[serde(default)]
    pub league_name: String,
    pub team_id: String,
    pub team_name: String,
    #[serde(rename = "overall_league_position", default)]
    pub position: String,
    // Upstream spells this column "payed"
    #[serde(rename = "overall_league_payed", alias = "overall_league_played", default)]
    pub played: String,
    #[serde(rename = "overall_league_W", default)]
    pub wins: String,
    #[serde(rename = "overall_league_D", default)]
    pub draws: String,
    #[serde(rename = "overall_league_L", default)]
    pub losses: String,
    #[serde(rename = "overall_league_GF", default)]
    pub goals_for: String,
    #[serde(rename = "overall_league_GA", default)]
    pub goals_against: String,
    #[serde(rename = "overall_league_PTS", default)]
    pub points: String,
    #[serde(default)]
    pub team_badge: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_deserializes_upstream_row() {
        let json = r#"{
            "country_name": "England",
            "league_id": "152",
            "league_name": "Premier League",
            "team_id": "2626",
            "team_name": "Manchester City",
            "overall_promotion": "Promotion - Champions League (League phase)",
            "overall_league_position": "1",
            "overall_league_payed": "38",
            "overall_league_W": "28",
            "overall_league_D": "7",
            "overall_league_L": "3",
            "overall_league_GF": "96",
            "overall_league_GA": "34",
            "overall_league_PTS": "91",
            "home_league_position": "1",
            "team_badge": "https://apiv3.apifootball.com/badges/2626_manchester-city.jpg"
        }"#;

        let standing: Standing = serde_json::from_str(json).unwrap();

        assert_eq!(standing.team_name, "Manchester City");
        assert_eq!(standing.position, "1");
        assert_eq!(standing.played, "38");
        assert_eq!(standing.wins, "28");
        assert_eq!(standing.draws, "7");
        assert_eq!(standing.losses, "3");
        assert_eq!(standing.goals_for, "96");
        assert_eq!(standing.goals_against, "34");
        assert_eq!(standing.points, "91");
        assert!(standing.team_badge.ends_with("2626_manchester-city.jpg"));
    }

    #[test]
    fn test_standing_numeric_text_is_kept_verbatim() {
        let json = r#"{"league_id": "152", "team_id": "1", "team_name": "X",
                       "overall_league_position": "01", "overall_league_PTS": "-3"}"#;

        let standing: Standing = serde_json::from_str(json).unwrap();

        assert_eq!(standing.position, "01");
        assert_eq!(standing.points, "-3");
        assert_eq!(standing.played, "");
    }

    #[test]
    fn test_standing_accepts_played_alias() {
        let json = r#"{"league_id": "152", "team_id": "1", "team_name": "X",
                       "overall_league_played": "20"}"#;
        let standing: Standing = serde_json::from_str(json).unwrap();
        assert_eq!(standing.played, "20");
    }

    #[test]
    fn test_standing_serializes_upstream_keys() {
        let standing = Standing {
            team_name: "Liverpool".to_string(),
            wins: "14".to_string(),
            played: "20".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&standing).unwrap();

        assert_eq!(value["team_name"], "Liverpool");
        assert_eq!(value["overall_league_W"], "14");
        assert_eq!(value["overall_league_payed"], "20");
    }

    #[test]
    fn test_team_badge_is_optional_upstream() {
        let team: Team =
            serde_json::from_str(r#"{"team_key": "2629", "team_name": "Manchester City"}"#)
                .unwrap();
        assert_eq!(team, Team::new("2629", "Manchester City", ""));
    }
}
