//! MongoDB connection and data source.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Collection};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{DataAccessError, DataSource};
use crate::cache::{Cacheable, Filter};

/// A cacheable type stored in its own MongoDB collection.
pub trait MongoEntity: Cacheable + DeserializeOwned {
    const COLLECTION: &'static str;
}

/// Database handle for MongoDB.
#[derive(Debug, Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Connect and ping the server.
    ///
    /// # Errors
    /// Returns error if the URI is invalid or the server does not answer.
    pub async fn connect(uri: &str, db_name: &str) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        let client = Client::with_options(options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Connected to MongoDB database {}", db_name);

        Ok(Self {
            db: client.database(db_name),
        })
    }

    /// Typed handle to the collection holding `T`.
    pub fn collection<T: MongoEntity>(&self) -> Collection<T> {
        self.db.collection(T::COLLECTION)
    }
}

/// Loads whole collections and filters them in process.
///
/// Filters are Rust closures, so they cannot be pushed down to the server.
#[derive(Debug, Clone)]
pub struct MongoSource {
    db: Database,
}

impl MongoSource {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl<T: MongoEntity> DataSource<T> for MongoSource {
    async fn fetch_all(&self, filter: &Filter<T>) -> Result<Vec<T>, DataAccessError> {
        let cursor = self.db.collection::<T>().find(doc! {}).await?;
        let items: Vec<T> = cursor.try_collect().await?;
        let total = items.len();

        let matched: Vec<T> = items.into_iter().filter(|item| filter(item)).collect();
        debug!(
            collection = T::COLLECTION,
            total,
            matched = matched.len(),
            "Fetched list from MongoDB"
        );
        Ok(matched)
    }
}
