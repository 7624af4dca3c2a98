//! Football standings aggregation service library
//!
//! This library fetches countries, leagues, teams and league tables from an
//! upstream football statistics API, caches them with a TTL and LRU bound,
//! and can switch to a built-in fallback data set at runtime.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use football_standings::error::AppError;
//! use football_standings::football::{HttpGateway, ResolverSettings, StandingsResolver};
//! use football_standings::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let gateway = HttpGateway::from_config(&config)?;
//!     let resolver = StandingsResolver::new(
//!         Arc::new(gateway),
//!         ResolverSettings::from_config(&config),
//!     );
//!
//!     if let Some(standing) = resolver
//!         .get_team_standing("England", "Premier League", "Arsenal")
//!         .await
//!     {
//!         println!("{} are in position {}", standing.team_name, standing.position);
//!     }
//!
//!     resolver.set_offline_mode(true);
//!     assert!(!resolver.get_countries().await.is_empty());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod football;
pub mod logging;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use football::{
    CacheInfo, CacheStats, Country, HttpGateway, League, ResolverSettings, Standing,
    StandingsResolver, Team, UpstreamGateway,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
