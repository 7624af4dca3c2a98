pub mod types;
mod resource_cache;

// Re-export cache types
pub use types::*;
// Re-export the resource cache
pub use resource_cache::ResourceCache;
