//! Cache data structures with TTL support

use serde::Serialize;
use utoipa::ToSchema;
use std::time::{Duration, Instant};

/// A cached value stamped with its write time and fixed TTL
#[derive(Debug, Clone)]
pub struct CachedEntry<T> {
    pub data: T,
    pub cached_at: Instant,
    pub ttl: Duration,
}

impl<T> CachedEntry<T> {
    /// Creates a new cache entry stamped with the current instant
    pub fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl,
        }
    }

    /// Checks if the cached data is expired
    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > self.ttl
    }

    /// Gets the remaining time until expiration
    pub fn time_until_expiry(&self) -> Duration {
        self.ttl.saturating_sub(self.cached_at.elapsed())
    }
}

/// Size and capacity of one resource cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CacheInfo {
    #[schema(value_type = String)]
    pub name: &'static str,
    pub size: usize,
    pub capacity: usize,
    pub ttl_seconds: u64,
}

/// Combined statistics for the resolver's caches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CacheStats {
    pub countries: CacheInfo,
    pub leagues: CacheInfo,
    pub standings: CacheInfo,
    pub teams: CacheInfo,
}

impl CacheStats {
    /// Total number of live keys across all caches
    pub fn total_entries(&self) -> usize {
        self.countries.size + self.leagues.size + self.standings.size + self.teams.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entry_is_not_expired() {
        let entry = CachedEntry::new(vec![1, 2, 3], Duration::from_secs(60));
        assert!(!entry.is_expired());
        assert!(entry.time_until_expiry() > Duration::from_secs(59));
    }

    #[test]
    fn test_zero_ttl_entry_expires_immediately() {
        let entry = CachedEntry::new("data", Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert!(entry.is_expired());
        assert_eq!(entry.time_until_expiry(), Duration::ZERO);
    }
}
