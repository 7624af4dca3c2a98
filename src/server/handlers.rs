//! Route handlers for the `/standings` API
//!
//! Handlers validate blank parameters, call the resolver and wrap results in
//! hypermedia responses. Empty results map to 404 everywhere except the
//! country list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::IntoParams;

use super::dto::{Collection, Link, Resource, StandingResponse, hrefs};
use crate::football::StandingsResolver;
use crate::football::cache::CacheStats;
use crate::football::models::{Country, League, Standing, Team};

pub type AppState = Arc<StandingsResolver>;

type HandlerResult<T> = Result<Json<T>, (StatusCode, String)>;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaguesQuery {
    /// Country name, for example `England` or `Deutschland`
    #[serde(rename = "countryName")]
    pub country_name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamsQuery {
    /// Upstream league id
    #[serde(rename = "leagueId")]
    pub league_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamStandingQuery {
    #[serde(rename = "countryName")]
    pub country_name: Option<String>,
    /// Matched case-insensitively against the country's leagues
    #[serde(rename = "leagueName")]
    pub league_name: Option<String>,
    /// Matched case-insensitively against the league table
    #[serde(rename = "teamName")]
    pub team_name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OfflineModeQuery {
    /// `true` serves fallback data, `false` goes back to upstream
    pub enabled: bool,
}

/// List all countries
#[utoipa::path(
    get,
    path = "/standings/countries",
    tag = "standings",
    responses(
        (status = 200, description = "Countries, possibly none", body = Collection<Country>)
    )
)]
pub async fn get_countries(State(resolver): State<AppState>) -> Json<Collection<Country>> {
    let items = resolver
        .get_countries()
        .await
        .into_iter()
        .map(|country| {
            let leagues = Link::new("leagues", hrefs::leagues(&country.name));
            Resource::new(country, vec![leagues])
        })
        .collect();

    Json(Collection::new(
        items,
        vec![Link::self_link(hrefs::countries())],
    ))
}

/// List the leagues of a country
#[utoipa::path(
    get,
    path = "/standings/leagues",
    tag = "standings",
    params(LeaguesQuery),
    responses(
        (status = 200, description = "Leagues of the country", body = Collection<League>),
        (status = 400, description = "countryName is missing or blank", body = String, content_type = "text/plain"),
        (status = 404, description = "No leagues found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_leagues(
    State(resolver): State<AppState>,
    Query(query): Query<LeaguesQuery>,
) -> HandlerResult<Collection<League>> {
    let country_name = required(query.country_name, "countryName")?;

    let leagues = resolver.get_leagues(&country_name).await;
    if leagues.is_empty() {
        return Err(not_found(format!("No leagues found for country '{country_name}'")));
    }

    let items = leagues
        .into_iter()
        .map(|league| {
            let standings = Link::new("standings", hrefs::league_standings(&league.id));
            Resource::new(league, vec![standings])
        })
        .collect();

    Ok(Json(Collection::new(
        items,
        vec![
            Link::self_link(hrefs::leagues(&country_name)),
            Link::new("countries", hrefs::countries()),
        ],
    )))
}

/// List the teams of a league
#[utoipa::path(
    get,
    path = "/standings/teams",
    tag = "standings",
    params(TeamsQuery),
    responses(
        (status = 200, description = "Teams of the league", body = Collection<Team>),
        (status = 400, description = "leagueId is missing or blank", body = String, content_type = "text/plain"),
        (status = 404, description = "No teams found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_teams(
    State(resolver): State<AppState>,
    Query(query): Query<TeamsQuery>,
) -> HandlerResult<Collection<Team>> {
    let league_id = required(query.league_id, "leagueId")?;

    let teams = resolver.get_teams(&league_id).await;
    if teams.is_empty() {
        return Err(not_found(format!("No teams found for league {league_id}")));
    }

    let self_href = hrefs::teams(&league_id);
    let items = teams
        .into_iter()
        .map(|team| Resource::new(team, vec![Link::self_link(self_href.clone())]))
        .collect();

    Ok(Json(Collection::new(
        items,
        vec![
            Link::self_link(self_href),
            Link::new("standings", hrefs::league_standings(&league_id)),
        ],
    )))
}

/// Get a league table
#[utoipa::path(
    get,
    path = "/standings/league/{league_id}",
    tag = "standings",
    params(("league_id" = String, Path, description = "Upstream league id")),
    responses(
        (status = 200, description = "Table rows in upstream order", body = Collection<Standing>),
        (status = 404, description = "No standings found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_league_standings(
    State(resolver): State<AppState>,
    Path(league_id): Path<String>,
) -> HandlerResult<Collection<Standing>> {
    let standings = resolver.get_standings(&league_id).await;
    if standings.is_empty() {
        return Err(not_found(format!("No standings found for league {league_id}")));
    }

    let items = standings
        .into_iter()
        .map(|standing| {
            let href = hrefs::team_standing(
                &standing.country_name,
                &standing.league_name,
                &standing.team_name,
            );
            Resource::new(standing, vec![Link::self_link(href)])
        })
        .collect();

    Ok(Json(Collection::new(
        items,
        vec![Link::self_link(hrefs::league_standings(&league_id))],
    )))
}

/// Get one team's standing by country, league and team name
#[utoipa::path(
    get,
    path = "/standings/team",
    tag = "standings",
    params(TeamStandingQuery),
    responses(
        (status = 200, description = "The team's table row", body = StandingResponse),
        (status = 400, description = "A parameter is missing or blank", body = String, content_type = "text/plain"),
        (status = 404, description = "League or team not found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_team_standing(
    State(resolver): State<AppState>,
    Query(query): Query<TeamStandingQuery>,
) -> HandlerResult<StandingResponse> {
    let country_name = required(query.country_name, "countryName")?;
    let league_name = required(query.league_name, "leagueName")?;
    let team_name = required(query.team_name, "teamName")?;

    let Some(standing) = resolver
        .get_team_standing(&country_name, &league_name, &team_name)
        .await
    else {
        return Err(not_found(format!(
            "No standing for team '{team_name}' in '{league_name}' ({country_name})"
        )));
    };

    let links = vec![
        Link::self_link(hrefs::team_standing(&country_name, &league_name, &team_name)),
        Link::new("league-standings", hrefs::league_standings(&standing.league_id)),
        Link::new("leagues", hrefs::leagues(&country_name)),
        Link::new("countries", hrefs::countries()),
    ];

    Ok(Json(StandingResponse {
        standing,
        from_cache: resolver.is_offline_mode(),
        links,
    }))
}

/// Switch offline mode on or off
#[utoipa::path(
    post,
    path = "/standings/offline-mode",
    tag = "offline mode",
    params(OfflineModeQuery),
    responses(
        (status = 200, description = "Confirmation message", body = String, content_type = "text/plain"),
        (status = 400, description = "enabled is missing or not a boolean")
    )
)]
pub async fn set_offline_mode(
    State(resolver): State<AppState>,
    Query(query): Query<OfflineModeQuery>,
) -> &'static str {
    resolver.set_offline_mode(query.enabled);
    if query.enabled {
        "Offline mode enabled"
    } else {
        "Offline mode disabled"
    }
}

/// Report whether offline mode is on
#[utoipa::path(
    get,
    path = "/standings/offline-mode",
    tag = "offline mode",
    responses((status = 200, description = "Current offline flag", body = bool))
)]
pub async fn get_offline_mode(State(resolver): State<AppState>) -> Json<bool> {
    Json(resolver.is_offline_mode())
}

/// Report per-resource cache size, capacity and TTL
#[utoipa::path(
    get,
    path = "/standings/cache-stats",
    tag = "cache",
    responses((status = 200, description = "Cache statistics", body = CacheStats))
)]
pub async fn get_cache_stats(State(resolver): State<AppState>) -> Json<CacheStats> {
    Json(resolver.cache_stats().await)
}

/// Rejects missing or whitespace-only parameters; the value itself is passed on untouched
fn required(value: Option<String>, name: &str) -> Result<String, (StatusCode, String)> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            debug!("Rejecting request with blank parameter {name}");
            Err((
                StatusCode::BAD_REQUEST,
                format!("Query parameter '{name}' must not be blank"),
            ))
        }
    }
}

fn not_found(message: String) -> (StatusCode, String) {
    debug!("{message}");
    (StatusCode::NOT_FOUND, message)
}
