// Cache refresh orchestration.
// Decides when to trust the local snapshot versus re-fetch, and keeps the
// cache file consistent across refreshes.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Result, TemblorError};
use crate::feed::{FeedClient, Snapshot};

use super::diff::events_changed;
use super::paths::detail_file_name;
use super::store::{self, Store};

/// Result of a cache operation, carrying the snapshot now in effect.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The cache did not exist and was created from a fresh fetch.
    Populated(Snapshot),
    /// The remote events differ from the cache; the cache was overwritten.
    Changed(Snapshot),
    /// The remote events match the cache; the file was left untouched.
    Unchanged(Snapshot),
}

impl RefreshOutcome {
    /// The snapshot the cache now holds.
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            RefreshOutcome::Populated(snapshot)
            | RefreshOutcome::Changed(snapshot)
            | RefreshOutcome::Unchanged(snapshot) => snapshot,
        }
    }

    pub fn into_snapshot(self) -> Snapshot {
        match self {
            RefreshOutcome::Populated(snapshot)
            | RefreshOutcome::Changed(snapshot)
            | RefreshOutcome::Unchanged(snapshot) => snapshot,
        }
    }
}

/// Source of feed data. Implemented by [`FeedClient`]; tests substitute a
/// stub that serves canned snapshots.
pub trait FeedSource {
    async fn fetch_feed(&self) -> Result<Snapshot>;
    async fn fetch_detail(&self, url: &str) -> Result<String>;
}

impl FeedSource for FeedClient {
    async fn fetch_feed(&self) -> Result<Snapshot> {
        FeedClient::fetch_feed(self).await
    }

    async fn fetch_detail(&self, url: &str) -> Result<String> {
        FeedClient::fetch_detail(self, url).await
    }
}

/// Orchestrates the store, the feed source, and change detection.
pub struct CacheController<S> {
    store: Store,
    source: S,
    detail_dir: PathBuf,
}

impl<S: FeedSource> CacheController<S> {
    pub fn new(store: Store, source: S, detail_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            source,
            detail_dir: detail_dir.into(),
        }
    }

    /// The cached snapshot if one exists, otherwise fetch and populate.
    ///
    /// A present cache is returned as-is; staleness is only resolved by an
    /// explicit [`force_refresh`](Self::force_refresh). A failed fetch
    /// leaves no cache file behind.
    pub async fn get_or_populate(&self) -> Result<RefreshOutcome> {
        if let Some(snapshot) = self.store.read()? {
            debug!("using cached snapshot");
            return Ok(RefreshOutcome::Unchanged(snapshot));
        }

        let snapshot = self.source.fetch_feed().await?;
        self.store.write(&snapshot)?;
        info!(events = snapshot.features.len(), "cache populated");
        Ok(RefreshOutcome::Populated(snapshot))
    }

    /// Re-fetch unconditionally and overwrite the cache when the events
    /// changed.
    ///
    /// The fetch happens before the cache is touched, so a transport or
    /// parse failure leaves the file exactly as it was. When the events
    /// match, the file is not rewritten and stays byte-identical.
    pub async fn force_refresh(&self) -> Result<RefreshOutcome> {
        let fresh = self.source.fetch_feed().await?;

        let Some(prior) = self.store.read()? else {
            self.store.write(&fresh)?;
            info!(events = fresh.features.len(), "cache populated");
            return Ok(RefreshOutcome::Populated(fresh));
        };

        if events_changed(&prior, &fresh) {
            self.store.write(&fresh)?;
            info!(events = fresh.features.len(), "cache updated");
            Ok(RefreshOutcome::Changed(fresh))
        } else {
            debug!("remote events match cache");
            Ok(RefreshOutcome::Unchanged(fresh))
        }
    }

    /// Fetch the detail document for one event and write it to
    /// `<event_id>.json` under the detail directory.
    ///
    /// The snapshot cache is never modified by this operation. Returns the
    /// path of the written file.
    pub async fn save_detail(&self, event_id: &str) -> Result<PathBuf> {
        let snapshot = self.get_or_populate().await?.into_snapshot();

        let event = snapshot
            .features
            .iter()
            .find(|event| event.id == event_id)
            .ok_or_else(|| TemblorError::EventNotFound(event_id.to_string()))?;

        let document = self.source.fetch_detail(&event.properties.detail).await?;

        let path = self.detail_dir.join(detail_file_name(event_id));
        store::write_text(&path, &document)?;
        info!(path = %path.display(), "detail saved");
        Ok(path)
    }
}
