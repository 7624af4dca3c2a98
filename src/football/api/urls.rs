//! URL building utilities for upstream API queries
//!
//! Every upstream call is a GET on the base URL's root with an `action`
//! parameter, a resource id parameter where needed, and the API key.

use crate::constants::upstream::{
    ACTION_PARAM, API_KEY_PARAM, COUNTRY_ID_PARAM, GET_COUNTRIES, GET_LEAGUES, GET_STANDINGS,
    GET_TEAMS, LEAGUE_ID_PARAM,
};

const REDACTED: &str = "***";

/// Builds an upstream query URL for `action` with extra query parameters.
/// Parameter values are percent-encoded; the API key always comes last.
///
/// # Example
/// ```
/// use football_standings::football::api::build_action_url;
///
/// let url = build_action_url("https://api.example.com/", "secret", "get_teams", &[("league_id", "152")]);
/// assert_eq!(url, "https://api.example.com/?action=get_teams&league_id=152&APIkey=secret");
/// ```
pub fn build_action_url(
    base_url: &str,
    api_key: &str,
    action: &str,
    params: &[(&str, &str)],
) -> String {
    let mut url = format!(
        "{}/?{ACTION_PARAM}={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(action)
    );
    for (name, value) in params {
        url.push('&');
        url.push_str(name);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url.push_str(&format!("&{API_KEY_PARAM}={}", urlencoding::encode(api_key)));
    url
}

/// Builds the URL listing every country
pub fn build_countries_url(base_url: &str, api_key: &str) -> String {
    build_action_url(base_url, api_key, GET_COUNTRIES, &[])
}

/// Builds the URL listing leagues of an upstream country id
pub fn build_leagues_url(base_url: &str, api_key: &str, country_id: &str) -> String {
    build_action_url(base_url, api_key, GET_LEAGUES, &[(COUNTRY_ID_PARAM, country_id)])
}

/// Builds the URL for one league's standings table
///
/// # Example
/// ```
/// use football_standings::football::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", "k", "152");
/// assert_eq!(url, "https://api.example.com/?action=get_standings&league_id=152&APIkey=k");
/// ```
pub fn build_standings_url(base_url: &str, api_key: &str, league_id: &str) -> String {
    build_action_url(base_url, api_key, GET_STANDINGS, &[(LEAGUE_ID_PARAM, league_id)])
}

/// Builds the URL listing one league's teams
pub fn build_teams_url(base_url: &str, api_key: &str, league_id: &str) -> String {
    build_action_url(base_url, api_key, GET_TEAMS, &[(LEAGUE_ID_PARAM, league_id)])
}

/// Replaces the API key value in a query URL so the URL can be logged
pub fn redact_api_key(url: &str) -> String {
    let marker = format!("{API_KEY_PARAM}=");
    let Some(start) = url.find(&marker).map(|i| i + marker.len()) else {
        return url.to_string();
    };
    let end = url[start..]
        .find('&')
        .map(|offset| start + offset)
        .unwrap_or(url.len());

    format!("{}{REDACTED}{}", &url[..start], &url[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_countries_url() {
        assert_eq!(
            build_countries_url("https://apiv3.apifootball.com", "abc"),
            "https://apiv3.apifootball.com/?action=get_countries&APIkey=abc"
        );
    }

    #[test]
    fn test_build_leagues_url() {
        assert_eq!(
            build_leagues_url("https://apiv3.apifootball.com", "abc", "41"),
            "https://apiv3.apifootball.com/?action=get_leagues&country_id=41&APIkey=abc"
        );
    }

    #[test]
    fn test_build_teams_url_trims_trailing_slash() {
        assert_eq!(
            build_teams_url("http://localhost:9000/", "abc", "152"),
            "http://localhost:9000/?action=get_teams&league_id=152&APIkey=abc"
        );
    }

    #[test]
    fn test_params_are_percent_encoded() {
        let url = build_standings_url("http://localhost", "a b", "15&2");
        assert_eq!(
            url,
            "http://localhost/?action=get_standings&league_id=15%262&APIkey=a%20b"
        );
    }

    #[test]
    fn test_redact_api_key_at_end() {
        let url = build_teams_url("http://localhost", "secret", "152");
        assert_eq!(
            redact_api_key(&url),
            "http://localhost/?action=get_teams&league_id=152&APIkey=***"
        );
    }

    #[test]
    fn test_redact_api_key_in_middle() {
        assert_eq!(
            redact_api_key("http://h/?APIkey=secret&action=get_countries"),
            "http://h/?APIkey=***&action=get_countries"
        );
    }

    #[test]
    fn test_redact_without_key_is_unchanged() {
        assert_eq!(redact_api_key("http://h/?action=x"), "http://h/?action=x");
    }
}
