pub mod country_ids;
pub mod gateway;
pub mod http_client;
pub mod urls;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export the upstream boundary
pub use country_ids::country_id_for_name;
pub use gateway::{HttpGateway, UpstreamGateway};
