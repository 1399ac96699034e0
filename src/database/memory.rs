//! In-memory data source.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::{DataAccessError, DataSource};
use crate::cache::{Cacheable, Filter};

/// Data source backed by seed lists held in memory.
///
/// Seeds and fetch counts are kept per Rust type, so two types sharing a
/// `TYPE_NAME` stay apart.
#[derive(Default)]
pub struct MemorySource {
    seeds: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    fetches: Mutex<HashMap<TypeId, usize>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the items returned for `T`, replacing earlier ones.
    #[must_use]
    pub fn with<T: Cacheable + Clone>(mut self, items: Vec<T>) -> Self {
        self.seeds.insert(TypeId::of::<T>(), Arc::new(items));
        self
    }

    /// Number of `fetch_all` calls made for `T`.
    pub fn fetch_count<T: Cacheable>(&self) -> usize {
        self.fetches.lock().get(&TypeId::of::<T>()).copied().unwrap_or(0)
    }
}

impl<T: Cacheable + Clone> DataSource<T> for MemorySource {
    async fn fetch_all(&self, filter: &Filter<T>) -> Result<Vec<T>, DataAccessError> {
        *self.fetches.lock().entry(TypeId::of::<T>()).or_default() += 1;

        let seed = self
            .seeds
            .get(&TypeId::of::<T>())
            .and_then(|items| items.downcast_ref::<Vec<T>>())
            .ok_or(DataAccessError::NotRegistered {
                type_name: T::TYPE_NAME,
            })?;

        let items: Vec<T> = seed.iter().filter(|&item| filter(item)).cloned().collect();
        debug!(type_name = T::TYPE_NAME, count = items.len(), "Fetched seed list");
        Ok(items)
    }
}

impl std::fmt::Debug for MemorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySource")
            .field("seeded_types", &self.seeds.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Num(u32);

    impl Cacheable for Num {
        const TYPE_NAME: &'static str = "Num";
    }

    #[tokio::test]
    async fn test_fetch_applies_filter_and_counts() {
        let source = MemorySource::new().with((1..=6).map(Num).collect());
        let even: Filter<Num> = Arc::new(|n: &Num| n.0 % 2 == 0);

        let items = source.fetch_all(&even).await.unwrap();

        assert_eq!(items, vec![Num(2), Num(4), Num(6)]);
        assert_eq!(source.fetch_count::<Num>(), 1);
    }

    /// Shares `Num`'s name but is a different type.
    #[derive(Debug, Clone, PartialEq)]
    struct OtherNum(u32);

    impl Cacheable for OtherNum {
        const TYPE_NAME: &'static str = "Num";
    }

    #[tokio::test]
    async fn test_types_sharing_a_name_keep_their_own_seeds() {
        let source = MemorySource::new()
            .with(vec![Num(1), Num(2)])
            .with(vec![OtherNum(9)]);
        let all_nums: Filter<Num> = Arc::new(|_: &Num| true);
        let all_others: Filter<OtherNum> = Arc::new(|_: &OtherNum| true);

        assert_eq!(source.fetch_all(&all_nums).await.unwrap(), vec![Num(1), Num(2)]);
        assert_eq!(source.fetch_all(&all_others).await.unwrap(), vec![OtherNum(9)]);
        assert_eq!(source.fetch_count::<Num>(), 1);
        assert_eq!(source.fetch_count::<OtherNum>(), 1);
    }

    #[tokio::test]
    async fn test_unknown_type_is_an_error() {
        let source = MemorySource::new();
        let all: Filter<Num> = Arc::new(|_: &Num| true);

        let err = source.fetch_all(&all).await.unwrap_err();

        assert!(matches!(err, DataAccessError::NotRegistered { type_name: "Num" }));
        assert_eq!(source.fetch_count::<Num>(), 1);
    }
}
