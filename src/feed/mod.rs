// Feed module.
// Client and payload types for the USGS earthquake GeoJSON feed.

pub mod client;
pub mod types;

pub use client::{DEFAULT_FEED_URL, FeedClient};
pub use types::{Event, EventProperties, FeedMetadata, Snapshot};
