//! OpenAPI document for the `/standings` routes

use utoipa::OpenApi;

use super::dto::{Link, StandingResponse};
use super::handlers;
use crate::football::cache::{CacheInfo, CacheStats};
use crate::football::models::{Country, League, Standing, Team};

/// Where the generated document is served
pub const OPENAPI_PATH: &str = "/standings/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Football standings",
        description = "Countries, leagues, teams and league tables from an upstream football API, cached and switchable to offline data"
    ),
    paths(
        handlers::get_countries,
        handlers::get_leagues,
        handlers::get_teams,
        handlers::get_league_standings,
        handlers::get_team_standing,
        handlers::set_offline_mode,
        handlers::get_offline_mode,
        handlers::get_cache_stats,
    ),
    components(schemas(
        Country,
        League,
        Team,
        Standing,
        Link,
        StandingResponse,
        CacheInfo,
        CacheStats
    )),
    tags(
        (name = "standings", description = "Football data lookups"),
        (name = "offline mode", description = "Runtime switch between upstream and fallback data"),
        (name = "cache", description = "Resolver cache statistics")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_operation() {
        let doc = ApiDoc::openapi();

        let operations: usize = doc
            .paths
            .paths
            .values()
            .map(|item| item.get.iter().count() + item.post.iter().count())
            .sum();

        assert_eq!(operations, 8);
        assert!(doc.paths.paths.contains_key("/standings/league/{league_id}"));
    }

    #[test]
    fn test_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components should be present");

        for name in ["Country", "League", "Team", "Standing", "CacheStats", "StandingResponse"] {
            assert!(components.schemas.contains_key(name), "missing schema {name}");
        }
    }
}
