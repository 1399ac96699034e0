//! Result of a list lookup.

/// How a lookup was answered.
///
/// A failed fetch is not an error for the caller: the failure is logged and
/// the key stays empty, so the next lookup tries the data source again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOutcome<V> {
    /// Served from the cache.
    Hit(V),
    /// Fetched from the data source by this call.
    Filled(V),
    /// The data source failed and nothing is cached for the key.
    FetchFailed,
}

impl<V> CacheOutcome<V> {
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Hit(v) | Self::Filled(v) => Some(v),
            Self::FetchFailed => None,
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Hit(v) | Self::Filled(v) => Some(v),
            Self::FetchFailed => None,
        }
    }

    pub fn as_ref(&self) -> CacheOutcome<&V> {
        match self {
            Self::Hit(v) => CacheOutcome::Hit(v),
            Self::Filled(v) => CacheOutcome::Filled(v),
            Self::FetchFailed => CacheOutcome::FetchFailed,
        }
    }

    /// Transform the value, keeping how it was obtained.
    pub fn map<U, F>(self, f: F) -> CacheOutcome<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Hit(v) => CacheOutcome::Hit(f(v)),
            Self::Filled(v) => CacheOutcome::Filled(f(v)),
            Self::FetchFailed => CacheOutcome::FetchFailed,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }

    pub fn is_fetch_failed(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }
}

impl<V: Default> CacheOutcome<V> {
    /// The value, or an empty one when the fetch failed.
    pub fn unwrap_or_default(self) -> V {
        self.into_value().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_variant() {
        assert_eq!(CacheOutcome::Hit(2).map(|n| n * 10), CacheOutcome::Hit(20));
        assert_eq!(CacheOutcome::Filled(2).map(|n| n + 1), CacheOutcome::Filled(3));
        assert!(CacheOutcome::<i32>::FetchFailed.map(|n| n + 1).is_fetch_failed());
    }

    #[test]
    fn test_failed_fetch_defaults_to_empty() {
        let failed: CacheOutcome<Vec<u8>> = CacheOutcome::FetchFailed;
        assert_eq!(failed.value(), None);
        assert!(failed.unwrap_or_default().is_empty());
    }
}
