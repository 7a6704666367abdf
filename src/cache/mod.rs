// Cache module.
// Snapshot persistence, change detection, and refresh orchestration.

pub mod controller;
pub mod diff;
pub mod paths;
pub mod store;

pub use controller::{CacheController, FeedSource, RefreshOutcome};
pub use store::Store;
