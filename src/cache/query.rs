//! Query builder for list lookups.

use std::fmt;
use std::sync::Arc;

use super::key::{self, CacheKey, Filter};
use super::CacheError;

/// Describes which list of `T` a caller wants.
///
/// ```ignore
/// // Every horse, cached under "Horse".
/// let all = Query::<Horse>::all();
///
/// // Only arabians, cached under "Horse_arab".
/// let arabs = Query::<Horse>::all()
///     .filter(|h| h.breed == "Arabian")
///     .keyed("arab");
/// ```
pub struct Query<T> {
    filter: Option<Filter<T>>,
    discriminator: Option<String>,
}

impl<T> Query<T> {
    /// Unfiltered query without discriminator.
    pub fn all() -> Self {
        Self {
            filter: None,
            discriminator: None,
        }
    }

    /// Only keep items matching `predicate` when the list is filled.
    ///
    /// A filtered query must also be [`keyed`](Self::keyed).
    #[must_use]
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(predicate));
        self
    }

    /// Cache this list under its own discriminator.
    #[must_use]
    pub fn keyed(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = Some(discriminator.into());
        self
    }

    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }
}

impl<T: 'static> Query<T> {
    /// Key under which this query is stored for `type_name`.
    pub fn key(&self, type_name: &str) -> CacheKey {
        key::derive_key(type_name, self.discriminator())
    }

    /// Derive the key, check the filter pairing and settle the filter.
    pub(crate) fn resolve(
        self,
        type_name: &'static str,
    ) -> Result<(CacheKey, Filter<T>), CacheError> {
        let key = self.key(type_name);
        let discriminator = self.discriminator();
        key::validate_filter_pairing(type_name, self.filter.as_ref(), discriminator)?;
        Ok((key, key::default_if_absent(self.filter)))
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            discriminator: self.discriminator.clone(),
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filtered", &self.filter.is_some())
            .field("discriminator", &self.discriminator)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unfiltered() {
        let (key, filter) = Query::<u32>::all().resolve("Num").unwrap();
        assert_eq!(key.as_str(), "Num");
        assert!(filter(&7));
    }

    #[test]
    fn test_resolve_filtered_and_keyed() {
        let (key, filter) = Query::<u32>::all()
            .filter(|n| *n > 10)
            .keyed("big")
            .resolve("Num")
            .unwrap();
        assert_eq!(key.as_str(), "Num_big");
        assert!(filter(&11));
        assert!(!filter(&3));
    }

    #[test]
    fn test_resolve_rejects_unkeyed_filter() {
        let result = Query::<u32>::all()
            .filter(|n| *n > 10)
            .keyed("")
            .resolve("Num");
        assert_eq!(result.err(), Some(CacheError::InvalidUsage { type_name: "Num" }));
    }

    #[test]
    fn test_keyed_without_filter_is_valid() {
        let (key, _) = Query::<u32>::all().keyed("copy").resolve("Num").unwrap();
        assert_eq!(key.as_str(), "Num_copy");
    }
}
