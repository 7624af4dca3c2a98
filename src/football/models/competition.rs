use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A country as exposed by the upstream API.
/// The name is the lookup key callers use; the id is upstream-specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Country {
    #[serde(rename = "country_id")]
    pub id: String,
    #[serde(rename = "country_name")]
    pub name: String,
}

impl Country {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A league belonging to one country. The country reference is carried by
/// value and never checked against a known `Country`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct League {
    #[serde(rename = "league_id")]
    pub id: String,
    #[serde(rename = "league_name")]
    pub name: String,
    pub country_id: String,
    pub country_name: String,
}

impl League {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country_id: impl Into<String>,
        country_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country_id: country_id.into(),
            country_name: country_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_deserializes_upstream_shape() {
        let json = r#"[
            {"country_id": "41", "country_name": "England", "country_logo": "https://example.com/en.png"},
            {"country_id": "6", "country_name": "Spain", "country_logo": ""}
        ]"#;

        let countries: Vec<Country> = serde_json::from_str(json).unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0], Country::new("41", "England"));
        assert_eq!(countries[1].name, "Spain");
    }

    #[test]
    fn test_league_deserializes_upstream_shape() {
        let json = r#"{
            "country_id": "41",
            "country_name": "England",
            "league_id": "152",
            "league_name": "Premier League",
            "league_season": "2024/2025",
            "league_logo": ""
        }"#;

        let league: League = serde_json::from_str(json).unwrap();

        assert_eq!(league, League::new("152", "Premier League", "41", "England"));
    }

    #[test]
    fn test_league_missing_required_field_fails() {
        let json = r#"{"league_id": "152", "country_id": "41", "country_name": "England"}"#;
        assert!(serde_json::from_str::<League>(json).is_err());
    }

    #[test]
    fn test_serialization_uses_upstream_keys() {
        let value = serde_json::to_value(League::new("152", "Premier League", "41", "England"))
            .unwrap();

        assert_eq!(value["league_id"], "152");
        assert_eq!(value["league_name"], "Premier League");
        assert_eq!(value["country_id"], "41");
        assert_eq!(value["country_name"], "England");
    }
}
