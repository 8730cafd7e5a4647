// Cache module for local filesystem caching.
// Stores API responses keyed by request URL with a fixed freshness window.

pub mod paths;
pub mod store;

pub use store::{CacheEntry, CacheLookup, CacheStore, FRESHNESS_WINDOW};
