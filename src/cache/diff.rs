// Feed change detection.
// Compares the event lists of two snapshots, ignoring feed metadata.

use crate::feed::Snapshot;

/// Whether the events differ between two snapshots.
///
/// Only `features` participates in the comparison: the feed regenerates its
/// metadata (the `generated` stamp in particular) on every build, so
/// comparing the whole payload would report a change for identical event
/// data. The comparison is order-sensitive; a reordering of otherwise
/// identical events counts as changed.
pub fn events_changed(old: &Snapshot, new: &Snapshot) -> bool {
    old.features != new.features
}
