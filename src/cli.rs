// Command-line interface definitions.
// One flat argument set; refresh takes priority over save, which takes
// priority over querying.

use std::path::PathBuf;

use clap::Parser;

use crate::feed::DEFAULT_FEED_URL;
use crate::query::QueryFilter;

#[derive(Debug, Parser)]
#[command(
    name = "temblor",
    about = "Query USGS earthquake feed data through a local snapshot cache",
    version
)]
pub struct Args {
    /// Re-fetch the feed and report whether the data changed
    #[arg(long, short = 'R')]
    pub refresh: bool,

    /// Fetch and save the detail document for an event ID
    #[arg(long, value_name = "EVENT_ID")]
    pub save: Option<String>,

    /// Inclusive start of the time range, epoch milliseconds
    #[arg(long)]
    pub start: Option<i64>,

    /// Inclusive end of the time range, epoch milliseconds
    #[arg(long)]
    pub end: Option<i64>,

    /// Minimum magnitude
    #[arg(long)]
    pub minmag: Option<f64>,

    /// Maximum magnitude
    #[arg(long)]
    pub maxmag: Option<f64>,

    /// Location pattern, matched case-insensitively against the place
    #[arg(long, short = 'L')]
    pub location: Option<String>,

    /// Feed URL to fetch
    #[arg(long, value_name = "URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Snapshot cache file (defaults to the platform cache directory)
    #[arg(long, value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// Directory for saved detail documents
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub detail_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The query predicates carried by the time, magnitude, and location
    /// flags.
    pub fn query_filter(&self) -> QueryFilter {
        QueryFilter {
            start: self.start,
            end: self.end,
            min_magnitude: self.minmag,
            max_magnitude: self.maxmag,
            location: self.location.clone(),
        }
    }
}
