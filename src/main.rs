//! Listcache - horse directory list warm-up.
//!
//! Connects to MongoDB, fills the directory lists through one shared
//! `ListCache` and prints them.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use listcache::cache::{CacheOutcome, ListCache, Query};
use listcache::config::Config;
use listcache::database::{Breed, BreedOption, Database, Horse, HorseSummary, MongoSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("listcache=info,mongodb=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting listcache...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.mongodb_uri, &config.mongodb_database).await?;

    let cache = Arc::new(ListCache::new(MongoSource::new(db)));

    if config.warm_on_start {
        warm(&cache, &config).await?;
        info!("Cache warmed: {:?}", cache);
    } else {
        info!("WARM_ON_START disabled, nothing to do");
    }

    cache.clear();
    Ok(())
}

/// Fill the directory lists and print them.
async fn warm(cache: &ListCache<MongoSource>, config: &Config) -> anyhow::Result<()> {
    let breeds = cache.get_list_of::<Breed, BreedOption>(Query::all()).await?;
    report("breed options", breeds.as_ref().map(|b| b.len()));
    if let Some(options) = breeds.value() {
        println!("{}", serde_json::to_string_pretty(options.as_slice())?);
    }

    let active_horses = Query::<Horse>::all().filter(|h| !h.retired).keyed("active");
    let active = cache
        .get_projected::<Horse, HorseSummary>(active_horses)
        .await?;
    report("active horses", active.as_ref().map(Vec::len));
    println!("{}", serde_json::to_string_pretty(&active.unwrap_or_default())?);

    if let Some(breed) = config.breed_filter.clone() {
        let discriminator = format!("breed_{}", breed.to_lowercase());
        let horses = cache
            .get_entities(
                Query::<Horse>::all()
                    .filter(move |h| h.breed.eq_ignore_ascii_case(&breed))
                    .keyed(discriminator),
            )
            .await?;
        report("horses of configured breed", horses.as_ref().map(|h| h.len()));
    }

    Ok(())
}

fn report(what: &str, count: CacheOutcome<usize>) {
    match count {
        CacheOutcome::Hit(n) => info!("{}: {} (cached)", what, n),
        CacheOutcome::Filled(n) => info!("{}: {} (loaded)", what, n),
        CacheOutcome::FetchFailed => warn!("{}: could not be loaded", what),
    }
}
