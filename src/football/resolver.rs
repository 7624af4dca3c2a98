//! Data resolution and offline-mode switching
//!
//! `StandingsResolver` is the single entry point the HTTP layer calls. For
//! every read it decides between the fixed fallback tables (offline) and the
//! cache-then-upstream path (online).
//!
//! Concurrent misses on the same key are not coalesced: two callers may both
//! miss and both call upstream. Re-fetching is idempotent, so the last write
//! simply wins.

use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::constants::cache::{COUNTRIES_KEY, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECONDS};
use crate::football::api::UpstreamGateway;
use crate::football::cache::{CacheStats, ResourceCache};
use crate::football::fallback;
use crate::football::models::{Country, League, Standing, Team};

/// Construction-time settings for a resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    pub cache_ttl: Duration,
    pub cache_max_entries: NonZeroUsize,
    /// Offline flag value at startup
    pub offline_mode: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_TTL_SECONDS),
            cache_max_entries: NonZeroUsize::new(DEFAULT_MAX_ENTRIES)
                .unwrap_or(NonZeroUsize::MIN),
            offline_mode: false,
        }
    }
}

impl ResolverSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cache_ttl: Duration::from_secs(config.cache_ttl_seconds),
            cache_max_entries: NonZeroUsize::new(config.cache_max_entries)
                .unwrap_or(NonZeroUsize::MIN),
            offline_mode: config.offline_mode,
        }
    }
}

pub struct StandingsResolver {
    gateway: Arc<dyn UpstreamGateway>,
    offline_mode: AtomicBool,
    countries: ResourceCache<Country>,
    leagues: ResourceCache<League>,
    standings: ResourceCache<Standing>,
    teams: ResourceCache<Team>,
}

impl StandingsResolver {
    pub fn new(gateway: Arc<dyn UpstreamGateway>, settings: ResolverSettings) -> Self {
        let ResolverSettings {
            cache_ttl,
            cache_max_entries,
            offline_mode,
        } = settings;

        Self {
            gateway,
            offline_mode: AtomicBool::new(offline_mode),
            countries: ResourceCache::new("countries", cache_max_entries, cache_ttl),
            leagues: ResourceCache::new("leagues", cache_max_entries, cache_ttl),
            standings: ResourceCache::new("standings", cache_max_entries, cache_ttl),
            teams: ResourceCache::new("teams", cache_max_entries, cache_ttl),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_countries(&self) -> Vec<Country> {
        if self.is_offline_mode() {
            debug!("Offline mode: serving fallback countries");
            return fallback::countries();
        }
        cached_or_fetch(&self.countries, COUNTRIES_KEY, || {
            self.gateway.fetch_countries()
        })
        .await
    }

    /// The country name is used verbatim as the cache key, so "England" and
    /// "england" occupy separate entries.
    #[instrument(skip(self))]
    pub async fn get_leagues(&self, country_name: &str) -> Vec<League> {
        if self.is_offline_mode() {
            debug!("Offline mode: serving fallback leagues");
            return fallback::leagues(country_name);
        }
        cached_or_fetch(&self.leagues, country_name, || {
            self.gateway.fetch_leagues(country_name)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_standings(&self, league_id: &str) -> Vec<Standing> {
        if self.is_offline_mode() {
            debug!("Offline mode: serving fallback standings");
            return fallback::standings(league_id);
        }
        cached_or_fetch(&self.standings, league_id, || {
            self.gateway.fetch_standings(league_id)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_teams(&self, league_id: &str) -> Vec<Team> {
        if self.is_offline_mode() {
            debug!("Offline mode: serving fallback teams");
            return fallback::teams(league_id);
        }
        cached_or_fetch(&self.teams, league_id, || self.gateway.fetch_teams(league_id)).await
    }

    /// Resolves one team's standing from names alone.
    ///
    /// Looks up the country's leagues, takes the first league whose name
    /// matches case-insensitively, then takes the first row of that league's
    /// table whose team name matches case-insensitively. List order is the
    /// tie-break when names repeat. Standings are never requested when no
    /// league matches.
    #[instrument(skip(self))]
    pub async fn get_team_standing(
        &self,
        country_name: &str,
        league_name: &str,
        team_name: &str,
    ) -> Option<Standing> {
        let leagues = self.get_leagues(country_name).await;

        let Some(league) = leagues
            .into_iter()
            .find(|league| names_match(&league.name, league_name))
        else {
            debug!("No league named '{league_name}' for country '{country_name}'");
            return None;
        };

        let standing = self
            .get_standings(&league.id)
            .await
            .into_iter()
            .find(|standing| names_match(&standing.team_name, team_name));

        if standing.is_none() {
            debug!("No standing for team '{team_name}' in league {}", league.id);
        }
        standing
    }

    /// Switches every subsequent read between fallback and live data.
    /// Cached entries are left alone and keep their own TTL.
    pub fn set_offline_mode(&self, enabled: bool) {
        let previous = self.offline_mode.swap(enabled, Ordering::SeqCst);
        if previous != enabled {
            info!("Offline mode changed: {previous} -> {enabled}");
        }
    }

    pub fn is_offline_mode(&self) -> bool {
        self.offline_mode.load(Ordering::SeqCst)
    }

    pub async fn cache_stats(&self) -> CacheStats {
        let (countries, leagues, standings, teams) = tokio::join!(
            self.countries.info(),
            self.leagues.info(),
            self.standings.info(),
            self.teams.info(),
        );
        CacheStats {
            countries,
            leagues,
            standings,
            teams,
        }
    }

    pub async fn clear_caches(&self) {
        tokio::join!(
            self.countries.clear(),
            self.leagues.clear(),
            self.standings.clear(),
            self.teams.clear(),
        );
        info!("Cleared all resolver caches");
    }
}

/// Returns the cached list for `key`, or fetches it. Only non-empty results
/// are written back, so an empty upstream answer is retried on the next call.
async fn cached_or_fetch<T, F, Fut>(cache: &ResourceCache<T>, key: &str, fetch: F) -> Vec<T>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Vec<T>>,
{
    if let Some(cached) = cache.get(key).await {
        return cached;
    }

    let fresh = fetch().await;
    if fresh.is_empty() {
        debug!("Not caching empty result: cache={}, key={key}", cache.name());
    } else {
        cache.put(key, fresh.clone()).await;
    }
    fresh
}

fn names_match(stored: &str, requested: &str) -> bool {
    stored.to_lowercase() == requested.to_lowercase()
}
