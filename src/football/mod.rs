//! Football data: upstream access, caching, fallback tables and resolution

pub mod api;
pub mod cache;
pub mod fallback;
pub mod models;
pub mod resolver;

pub use api::{HttpGateway, UpstreamGateway};
pub use cache::{CacheInfo, CacheStats};
pub use models::{Country, League, Standing, Team};
pub use resolver::{ResolverSettings, StandingsResolver};
