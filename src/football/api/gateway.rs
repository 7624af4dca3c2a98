//! The upstream boundary: one GET per logical fetch, failures collapsed to "no data"

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use super::country_ids::country_id_for_name;
use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_countries_url, build_leagues_url, build_standings_url, build_teams_url};
use crate::config::{Config, with_default_scheme};
use crate::error::AppError;
use crate::football::models::{Country, League, Standing, Team};

/// Source of live football data.
///
/// Implementations never fail: any upstream problem yields an empty list, and
/// they never substitute fallback data of their own.
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    async fn fetch_countries(&self) -> Vec<Country>;

    /// `country_name` is a human name; implementations map it to their own id
    async fn fetch_leagues(&self, country_name: &str) -> Vec<League>;

    async fn fetch_standings(&self, league_id: &str) -> Vec<Standing>;

    async fn fetch_teams(&self, league_id: &str) -> Vec<Team>;
}

/// `UpstreamGateway` backed by the apifootball-style HTTP API
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpGateway {
    /// Creates a gateway with its own pooled client and per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(timeout)?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Creates a gateway from the loaded configuration.
    /// A base URL without a scheme is treated as `https://`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            with_default_scheme(&config.api_base_url),
            config.api_key.clone(),
            Duration::from_secs(config.http_timeout_seconds),
        )
    }

    /// Creates a gateway around an existing client
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches a JSON array, absorbing every failure into an empty list
    async fn fetch_list<T: DeserializeOwned>(&self, resource: &str, url: &str) -> Vec<T> {
        match fetch::<Vec<T>>(&self.client, url).await {
            Ok(items) => {
                debug!("Fetched {} {resource} from upstream", items.len());
                items
            }
            Err(e) if e.is_upstream_failure() => {
                warn!("Failed to fetch {resource} from upstream, returning empty result: {e}");
                Vec::new()
            }
            Err(e) => {
                error!("Unexpected error fetching {resource}, returning empty result: {e}");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl UpstreamGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn fetch_countries(&self) -> Vec<Country> {
        let url = build_countries_url(&self.base_url, &self.api_key);
        self.fetch_list("countries", &url).await
    }

    #[instrument(skip(self))]
    async fn fetch_leagues(&self, country_name: &str) -> Vec<League> {
        let country_id = country_id_for_name(country_name);
        debug!("Resolved country '{country_name}' to upstream id {country_id}");
        let url = build_leagues_url(&self.base_url, &self.api_key, country_id);
        self.fetch_list("leagues", &url).await
    }

    #[instrument(skip(self))]
    async fn fetch_standings(&self, league_id: &str) -> Vec<Standing> {
        let url = build_standings_url(&self.base_url, &self.api_key, league_id);
        self.fetch_list("standings", &url).await
    }

    #[instrument(skip(self))]
    async fn fetch_teams(&self, league_id: &str) -> Vec<Team> {
        let url = build_teams_url(&self.base_url, &self.api_key, league_id);
        self.fetch_list("teams", &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::football::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-key";

    fn gateway_for(server: &MockServer) -> HttpGateway {
        HttpGateway::with_client(
            create_test_http_client(Duration::from_secs(5)),
            server.uri(),
            API_KEY,
        )
    }

    #[test]
    fn test_from_config_adds_missing_scheme() {
        let config = Config {
            api_base_url: "127.0.0.1:8080".to_string(),
            ..Default::default()
        };

        let gateway = HttpGateway::from_config(&config).unwrap();

        assert_eq!(gateway.base_url, "https://127.0.0.1:8080");
        assert!(
            build_countries_url(&gateway.base_url, API_KEY)
                .parse::<reqwest::Url>()
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_from_config_keeps_http_scheme_of_local_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "get_countries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"country_id": "41", "country_name": "England"}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        let config = Config {
            api_base_url: server.uri(),
            api_key: API_KEY.to_string(),
            ..Default::default()
        };

        let countries = HttpGateway::from_config(&config)
            .unwrap()
            .fetch_countries()
            .await;

        assert_eq!(countries.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_countries_sends_action_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("action", "get_countries"))
            .and(query_param("APIkey", API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"country_id": "41", "country_name": "England"},
                {"country_id": "6", "country_name": "Spain"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let countries = gateway_for(&server).fetch_countries().await;

        assert_eq!(
            countries,
            vec![Country::new("41", "England"), Country::new("6", "Spain")]
        );
    }

    #[tokio::test]
    async fn test_fetch_leagues_maps_country_name_to_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "get_leagues"))
            .and(query_param("country_id", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"league_id": "175", "league_name": "Bundesliga", "country_id": "5", "country_name": "Germany"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let leagues = gateway_for(&server).fetch_leagues("Deutschland").await;

        assert_eq!(leagues.len(), 1);
        assert_eq!(leagues[0].name, "Bundesliga");
    }

    #[tokio::test]
    async fn test_fetch_leagues_unknown_country_uses_default_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "get_leagues"))
            .and(query_param("country_id", "41"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert!(gateway_for(&server).fetch_leagues("Atlantis").await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_standings_and_teams_by_league_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "get_standings"))
            .and(query_param("league_id", "152"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "country_name": "England",
                "league_id": "152",
                "league_name": "Premier League",
                "team_id": "2629",
                "team_name": "Manchester City",
                "overall_league_position": "1",
                "overall_league_payed": "20",
                "overall_league_W": "15",
                "overall_league_D": "3",
                "overall_league_L": "2",
                "overall_league_GF": "55",
                "overall_league_GA": "25",
                "overall_league_PTS": "48",
                "team_badge": ""
            }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("action", "get_teams"))
            .and(query_param("league_id", "152"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"team_key": "2629", "team_name": "Manchester City", "team_badge": "b.png"}
            ])))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let standings = gateway.fetch_standings("152").await;
        let teams = gateway.fetch_teams("152").await;

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].points, "48");
        assert_eq!(teams, vec![Team::new("2629", "Manchester City", "b.png")]);
    }

    #[tokio::test]
    async fn test_server_error_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        assert!(gateway_for(&server).fetch_countries().await.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        assert!(gateway_for(&server).fetch_teams("152").await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        assert!(gateway_for(&server).fetch_standings("152").await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"unexpected": "shape"}])),
            )
            .mount(&server)
            .await;

        assert!(gateway_for(&server).fetch_leagues("England").await.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_object_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"error": 404, "message": "No standings found!"})),
            )
            .mount(&server)
            .await;

        assert!(gateway_for(&server).fetch_standings("999").await.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"country_id": "41", "country_name": "England"}]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let gateway = HttpGateway::with_client(
            create_test_http_client(Duration::from_millis(200)),
            server.uri(),
            API_KEY,
        );

        assert!(gateway.fetch_countries().await.is_empty());
    }

    #[tokio::test]
    async fn test_connection_refused_returns_empty() {
        // Bind then drop a server to get an address nothing listens on
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let gateway = HttpGateway::with_client(
            create_test_http_client(Duration::from_secs(2)),
            uri,
            API_KEY,
        );

        assert!(gateway.fetch_countries().await.is_empty());
    }
}
