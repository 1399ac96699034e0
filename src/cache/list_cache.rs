//! Lazily filled cache of typed lists.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use super::entity::{Cacheable, Projection, project_all};
use super::{CacheError, CacheKey, CacheOutcome, Filter, Query};
use crate::database::DataSource;

/// A list shared with the cache.
pub type CachedList<T> = Arc<Vec<T>>;

/// Type-erased list stored under one key.
struct StoredList {
    items: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StoredList {
    fn new<T: Cacheable>(items: CachedList<T>) -> Self {
        Self {
            items,
            type_name: type_name::<T>(),
        }
    }

    fn downcast<T: Cacheable>(&self, key: &CacheKey) -> Result<CachedList<T>, CacheError> {
        Arc::clone(&self.items)
            .downcast::<Vec<T>>()
            .map_err(|_| CacheError::TypeMismatch {
                key: key.to_string(),
                stored: self.type_name,
                requested: type_name::<T>(),
            })
    }
}

#[derive(Default)]
struct Store {
    lists: HashMap<CacheKey, StoredList>,
    /// Bumped by every clear.
    generation: u64,
}

/// Cache of lists loaded from a [`DataSource`].
///
/// The first request for a key fetches the list and stores it. Later requests
/// for the same key are served from memory until [`clear`](Self::clear).
///
/// Concurrent misses on the same key may each fetch; the last one to store
/// wins. Fills and clears are serialized by one lock. A fill that started
/// before a clear is returned to its caller but not stored.
///
/// ## Example
///
/// ```ignore
/// let cache = ListCache::new(MongoSource::new(db));
///
/// // Fetched once, then served from memory.
/// let horses = cache.get_entities(Query::<Horse>::all()).await?;
///
/// // Fresh summaries built from the cached horses.
/// let rows = cache.get_projected::<Horse, HorseSummary>(Query::all()).await?;
/// ```
pub struct ListCache<S> {
    source: S,
    store: RwLock<Store>,
}

impl<S> ListCache<S> {
    pub fn new(source: S) -> Self {
        info!("List cache initialized");
        Self {
            source,
            store: RwLock::new(Store::default()),
        }
    }

    /// The data source lists are filled from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Check if a list is stored under `key`.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.store.read().lists.contains_key(key)
    }

    /// Number of stored lists.
    pub fn entry_count(&self) -> usize {
        self.store.read().lists.len()
    }

    /// Drop every stored list.
    pub fn clear(&self) {
        let mut store = self.store.write();
        let dropped = store.lists.len();
        store.lists.clear();
        store.generation += 1;
        info!(dropped, "List cache cleared");
    }

    fn lookup<T: Cacheable>(&self, key: &CacheKey) -> Result<Option<CachedList<T>>, CacheError> {
        let store = self.store.read();
        store
            .lists
            .get(key)
            .map(|stored| stored.downcast::<T>(key))
            .transpose()
    }

    fn generation(&self) -> u64 {
        self.store.read().generation
    }

    fn store_list<T: Cacheable>(
        &self,
        key: CacheKey,
        items: Vec<T>,
        generation: u64,
    ) -> CacheOutcome<CachedList<T>> {
        let items = Arc::new(items);
        let mut store = self.store.write();

        if store.generation != generation {
            warn!(%key, "Cache was cleared during fill, list not stored");
            return CacheOutcome::Filled(items);
        }

        debug!(%key, count = items.len(), "Stored list");
        store.lists.insert(key, StoredList::new(Arc::clone(&items)));
        CacheOutcome::Filled(items)
    }

    /// Serve `key` from memory, or fetch `T`, convert and store it as `V`.
    async fn get_or_fill<T, V, F>(
        &self,
        key: CacheKey,
        filter: Filter<T>,
        convert: F,
    ) -> Result<CacheOutcome<CachedList<V>>, CacheError>
    where
        S: DataSource<T>,
        V: Cacheable,
        F: FnOnce(Vec<T>) -> Vec<V>,
    {
        if let Some(list) = self.lookup::<V>(&key)? {
            debug!(%key, "List cache hit");
            return Ok(CacheOutcome::Hit(list));
        }

        let generation = self.generation();
        match self.source.fetch_all(&filter).await {
            Ok(items) => Ok(self.store_list(key, convert(items), generation)),
            Err(e) => {
                error!(%key, error = %e, "Failed to fill cached list");
                Ok(CacheOutcome::FetchFailed)
            }
        }
    }

    /// Get the list of `T` described by `query`, filling it on first use.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidUsage`] if the query is filtered but not
    /// keyed, before touching the cache or the data source.
    pub async fn get_entities<T>(
        &self,
        query: Query<T>,
    ) -> Result<CacheOutcome<CachedList<T>>, CacheError>
    where
        T: Cacheable,
        S: DataSource<T>,
    {
        let (key, filter) = query.resolve(T::TYPE_NAME)?;
        self.get_or_fill(key, filter, |items| items).await
    }

    /// Build a new list of `D` from the cached list of `T`.
    ///
    /// The source list is looked up (or filled) like
    /// [`get_entities`](Self::get_entities). The projected list is never
    /// stored, so every call allocates a new one.
    pub async fn get_projected<T, D>(
        &self,
        query: Query<T>,
    ) -> Result<CacheOutcome<Vec<D>>, CacheError>
    where
        T: Cacheable,
        D: Projection<T>,
        S: DataSource<T>,
    {
        let source = self.get_entities(query).await?;
        Ok(source.map(|items| project_all(&items)))
    }

    /// Get the list of `D` projected from `T`, caching the projection itself.
    ///
    /// Keyed by `D`'s name and the query's discriminator. On a miss the `T`
    /// items are fetched, projected and stored as `D`; no `T` list is cached.
    pub async fn get_list_of<T, D>(
        &self,
        query: Query<T>,
    ) -> Result<CacheOutcome<CachedList<D>>, CacheError>
    where
        T: Cacheable,
        D: Cacheable + Projection<T>,
        S: DataSource<T>,
    {
        let (key, filter) = query.resolve(D::TYPE_NAME)?;
        self.get_or_fill(key, filter, |items: Vec<T>| project_all(&items))
            .await
    }
}

impl<S> std::fmt::Debug for ListCache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let store = self.store.read();
        let mut keys: Vec<&str> = store.lists.keys().map(CacheKey::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ListCache")
            .field("entry_count", &store.lists.len())
            .field("keys", &keys)
            .finish()
    }
}
