// Snapshot query engine.
// Compiles the optional predicates and filters the event list in one pass.

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::feed::{Event, Snapshot};

/// Optional predicates over events. All present predicates are ANDed;
/// absent predicates impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    /// Inclusive lower bound on event time, epoch milliseconds.
    pub start: Option<i64>,
    /// Inclusive upper bound on event time, epoch milliseconds.
    pub end: Option<i64>,
    /// Inclusive lower bound on magnitude.
    pub min_magnitude: Option<f64>,
    /// Inclusive upper bound on magnitude.
    pub max_magnitude: Option<f64>,
    /// Regex matched case-insensitively against the event place.
    pub location: Option<String>,
}

impl QueryFilter {
    /// Validate the filter and compile the location pattern.
    ///
    /// An invalid pattern fails here, before any events are scanned.
    pub fn compile(&self) -> Result<CompiledFilter> {
        let location = match &self.location {
            Some(pattern) => Some(
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()?,
            ),
            None => None,
        };

        Ok(CompiledFilter {
            start: self.start,
            end: self.end,
            min_magnitude: self.min_magnitude,
            max_magnitude: self.max_magnitude,
            location,
        })
    }
}

/// A validated filter ready to run against a snapshot.
#[derive(Debug)]
pub struct CompiledFilter {
    start: Option<i64>,
    end: Option<i64>,
    min_magnitude: Option<f64>,
    max_magnitude: Option<f64>,
    location: Option<Regex>,
}

impl CompiledFilter {
    /// Filter the snapshot's events, preserving feed order.
    ///
    /// An empty result is a valid outcome, not an error.
    pub fn filter<'a>(&self, snapshot: &'a Snapshot) -> Vec<&'a Event> {
        snapshot
            .features
            .iter()
            .filter(|event| self.matches(event))
            .collect()
    }

    /// Whether one event satisfies every present predicate.
    ///
    /// Bounds are inclusive. An event without a magnitude is excluded by
    /// either magnitude bound.
    pub fn matches(&self, event: &Event) -> bool {
        let props = &event.properties;

        if self.start.is_some_and(|start| props.time < start) {
            return false;
        }
        if self.end.is_some_and(|end| props.time > end) {
            return false;
        }
        if let Some(min) = self.min_magnitude {
            match props.mag {
                Some(mag) if mag >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = self.max_magnitude {
            match props.mag {
                Some(mag) if mag <= max => {}
                _ => return false,
            }
        }
        if let Some(pattern) = &self.location {
            if !pattern.is_match(&props.place) {
                return false;
            }
        }

        true
    }
}
