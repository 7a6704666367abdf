// USGS feed payload types.
// Defines structs for deserializing the GeoJSON summary feed while preserving
// payload keys the tool does not model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Full feed payload: volatile metadata plus the event list in feed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeedMetadata>,
    pub features: Vec<Event>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Snapshot {
    /// Feed generation time, when the feed reported one.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.metadata
            .as_ref()?
            .generated
            .and_then(DateTime::from_timestamp_millis)
    }
}

/// Feed-level metadata. The `generated` stamp ticks forward on every feed
/// build, so nothing in here participates in change comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedMetadata {
    #[serde(default)]
    pub generated: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One earthquake record. Immutable once parsed; equality is deep and covers
/// the preserved unknown keys, so change detection sees every field the
/// remote sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub properties: EventProperties,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Event origin time as a UTC datetime.
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.properties.time)
    }
}

/// The event fields the tool reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventProperties {
    /// Origin time, epoch milliseconds.
    pub time: i64,
    /// Magnitude; absent for some automatic solutions.
    pub mag: Option<f64>,
    /// Free-text location label.
    pub place: String,
    pub title: String,
    /// URL of the full detail document for this event.
    pub detail: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "type": "FeatureCollection",
            "metadata": {
                "generated": 1700000000000_i64,
                "title": "USGS All Earthquakes, Past Month",
                "count": 1,
                "api": "1.10.3"
            },
            "features": [
                {
                    "type": "Feature",
                    "id": "nc73000000",
                    "properties": {
                        "time": 1699999000000_i64,
                        "mag": 2.4,
                        "place": "5km NW of Parkfield, CA",
                        "title": "M 2.4 - 5km NW of Parkfield, CA",
                        "detail": "https://example.org/detail/nc73000000.geojson",
                        "status": "reviewed",
                        "tsunami": 0
                    },
                    "geometry": {
                        "type": "Point",
                        "coordinates": [-120.5, 36.0, 7.2]
                    }
                }
            ],
            "bbox": [-120.5, 36.0, 7.2, -120.5, 36.0, 7.2]
        })
    }

    #[test]
    fn test_parse_feed_payload() {
        let snapshot: Snapshot = serde_json::from_value(sample_payload()).unwrap();

        assert_eq!(snapshot.features.len(), 1);
        let event = &snapshot.features[0];
        assert_eq!(event.id, "nc73000000");
        assert_eq!(event.properties.time, 1699999000000);
        assert_eq!(event.properties.mag, Some(2.4));
        assert_eq!(event.properties.place, "5km NW of Parkfield, CA");

        let generated = snapshot.generated_at().unwrap();
        assert_eq!(generated.timestamp_millis(), 1700000000000);
    }

    #[test]
    fn test_round_trip_preserves_unknown_keys() {
        let payload = sample_payload();
        let snapshot: Snapshot = serde_json::from_value(payload.clone()).unwrap();
        let round_tripped = serde_json::to_value(&snapshot).unwrap();

        // Keys the structs do not model survive a parse/serialize cycle.
        assert_eq!(round_tripped["bbox"], payload["bbox"]);
        assert_eq!(round_tripped["type"], payload["type"]);
        assert_eq!(
            round_tripped["features"][0]["geometry"],
            payload["features"][0]["geometry"]
        );
        assert_eq!(
            round_tripped["features"][0]["properties"]["status"],
            payload["features"][0]["properties"]["status"]
        );
    }

    #[test]
    fn test_event_equality_covers_unknown_keys() {
        let snapshot: Snapshot = serde_json::from_value(sample_payload()).unwrap();
        let mut modified = snapshot.features[0].clone();
        modified
            .properties
            .extra
            .insert("status".into(), json!("automatic"));

        assert_ne!(snapshot.features[0], modified);
    }

    #[test]
    fn test_null_magnitude() {
        let payload = json!({
            "features": [{
                "id": "ak0000000001",
                "properties": {
                    "time": 1699999000000_i64,
                    "mag": null,
                    "place": "50 km S of Whites City, New Mexico",
                    "title": "M ? - 50 km S of Whites City, New Mexico",
                    "detail": "https://example.org/detail/ak0000000001.geojson"
                }
            }]
        });
        let snapshot: Snapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(snapshot.features[0].properties.mag, None);
    }
}
