//! Hypermedia response shapes and link builders

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::football::models::Standing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn self_link(href: impl Into<String>) -> Self {
        Self::new("self", href)
    }
}

/// An entity serialized with its own fields at the top level plus `links`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resource<T> {
    #[serde(flatten)]
    pub data: T,
    pub links: Vec<Link>,
}

impl<T> Resource<T> {
    pub fn new(data: T, links: Vec<Link>) -> Self {
        Self { data, links }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Collection<T> {
    pub items: Vec<Resource<T>>,
    pub links: Vec<Link>,
}

impl<T> Collection<T> {
    pub fn new(items: Vec<Resource<T>>, links: Vec<Link>) -> Self {
        Self { items, links }
    }
}

/// One team's standing, with whether it came from offline data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandingResponse {
    #[serde(flatten)]
    pub standing: Standing,
    pub from_cache: bool,
    pub links: Vec<Link>,
}

/// Relative hrefs for every route, with query values percent-encoded
pub mod hrefs {
    use urlencoding::encode;

    pub fn countries() -> String {
        "/standings/countries".to_string()
    }

    pub fn leagues(country_name: &str) -> String {
        format!("/standings/leagues?countryName={}", encode(country_name))
    }

    pub fn teams(league_id: &str) -> String {
        format!("/standings/teams?leagueId={}", encode(league_id))
    }

    pub fn league_standings(league_id: &str) -> String {
        format!("/standings/league/{}", encode(league_id))
    }

    pub fn team_standing(country_name: &str, league_name: &str, team_name: &str) -> String {
        format!(
            "/standings/team?countryName={}&leagueName={}&teamName={}",
            encode(country_name),
            encode(league_name),
            encode(team_name)
        )
    }
}
