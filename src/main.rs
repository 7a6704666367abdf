// Entry point and command dispatch.
// Wires configuration into the cache controller and prints results.

mod cache;
mod cli;
mod error;
mod feed;
mod query;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cache::{CacheController, RefreshOutcome, Store, paths};
use cli::Args;
use error::{Result, TemblorError};
use feed::{Event, FeedClient, Snapshot};
use query::QueryFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("temblor: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let cache_path = resolve_cache_path(&args)?;
    let store = Store::new(cache_path);
    let client = FeedClient::new(&args.feed_url)?;
    let controller = CacheController::new(store, client, &args.detail_dir);

    if args.refresh {
        refresh(&controller).await
    } else if let Some(event_id) = &args.save {
        save(&controller, event_id).await
    } else {
        query(&controller, args.query_filter()).await
    }
}

fn resolve_cache_path(args: &Args) -> Result<PathBuf> {
    match &args.cache_file {
        Some(path) => Ok(path.clone()),
        None => paths::snapshot_path().ok_or_else(|| {
            TemblorError::Other(
                "could not resolve a cache directory; pass --cache-file".to_string(),
            )
        }),
    }
}

async fn refresh(controller: &CacheController<FeedClient>) -> Result<()> {
    match controller.force_refresh().await? {
        RefreshOutcome::Populated(snapshot) => {
            println!("Cache populated with {} events", snapshot.features.len());
        }
        RefreshOutcome::Changed(_) => println!("Data was changed"),
        RefreshOutcome::Unchanged(_) => println!("Data was not changed"),
    }
    Ok(())
}

async fn save(controller: &CacheController<FeedClient>, event_id: &str) -> Result<()> {
    let path = controller.save_detail(event_id).await?;
    println!("Saved detail to {}", path.display());
    Ok(())
}

async fn query(controller: &CacheController<FeedClient>, filter: QueryFilter) -> Result<()> {
    // Compile before any fetch so a bad pattern fails without touching the
    // network or the cache.
    let compiled = filter.compile()?;

    let snapshot = controller.get_or_populate().await?.into_snapshot();
    let events = compiled.filter(&snapshot);

    if events.is_empty() {
        println!("No events found matching the query");
        return Ok(());
    }

    print_events(&events);
    print_summary(&snapshot, events.len());
    Ok(())
}

fn print_events(events: &[&Event]) {
    println!("{:<14} {:<20} {:>5}  Location", "ID", "Time (UTC)", "Mag");
    for event in events {
        let time = event
            .time_utc()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| event.properties.time.to_string());
        let mag = event
            .properties
            .mag
            .map(|m| format!("{m:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:<20} {:>5}  {}",
            event.id, time, mag, event.properties.place
        );
    }
}

fn print_summary(snapshot: &Snapshot, matched: usize) {
    match snapshot.generated_at() {
        Some(generated) => println!(
            "\n{matched} of {} events (feed generated {})",
            snapshot.features.len(),
            generated.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => println!("\n{matched} of {} events", snapshot.features.len()),
    }
}
