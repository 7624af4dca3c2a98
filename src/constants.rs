//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and default settings so the
//! configuration layer, the upstream gateway and the resolver agree on them.

/// Default base URL of the upstream football statistics API
pub const DEFAULT_API_BASE_URL: &str = "https://apiv3.apifootball.com";

/// Default timeout for a single upstream HTTP request in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections kept per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Default socket address the HTTP server binds to
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "football_standings";

/// Default log file name
pub const LOG_FILE_NAME: &str = "football_standings.log";

/// Resolver cache settings
pub mod cache {
    /// Time-to-live for every cached resource list (1 hour)
    pub const DEFAULT_TTL_SECONDS: u64 = 3600;

    /// Maximum number of keys held per resource cache
    pub const DEFAULT_MAX_ENTRIES: usize = 1000;

    /// Countries take no parameter, so they share one fixed key
    pub const COUNTRIES_KEY: &str = "all";
}

/// Upstream API query vocabulary
pub mod upstream {
    pub const ACTION_PARAM: &str = "action";
    pub const API_KEY_PARAM: &str = "APIkey";
    pub const COUNTRY_ID_PARAM: &str = "country_id";
    pub const LEAGUE_ID_PARAM: &str = "league_id";

    pub const GET_COUNTRIES: &str = "get_countries";
    pub const GET_LEAGUES: &str = "get_leagues";
    pub const GET_STANDINGS: &str = "get_standings";
    pub const GET_TEAMS: &str = "get_teams";

    /// Country id used when a country name is not in the lookup table (England)
    pub const DEFAULT_COUNTRY_ID: &str = "41";
}

/// Offline fallback dataset anchors
pub mod fallback {
    /// The only league with fallback standings and teams (Premier League)
    pub const POPULATED_LEAGUE_ID: &str = "152";
}
