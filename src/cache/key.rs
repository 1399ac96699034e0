//! Cache key derivation and filter validation.
//!
//! Everything here is pure and can be called from any thread.
//!
//! A key is the type identity, followed by `_<discriminator>` when a
//! non-empty discriminator is given:
//!
//! ```text
//! Horse            -> "Horse"
//! Horse + "arab"   -> "Horse_arab"
//! ```

use std::fmt;
use std::sync::Arc;

use super::CacheError;

/// Predicate applied to the source items when a list is filled.
pub type Filter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Key of one cached list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// Build the key for `type_name`, qualified by `discriminator` if any.
pub fn derive_key(type_name: &str, discriminator: Option<&str>) -> CacheKey {
    CacheKey(format!("{type_name}{}", discriminator_suffix(discriminator)))
}

/// `""` for an empty or missing discriminator, `"_<discriminator>"` otherwise.
pub fn discriminator_suffix(discriminator: Option<&str>) -> String {
    match discriminator {
        Some(d) if !d.is_empty() => format!("_{d}"),
        _ => String::new(),
    }
}

/// Reject a filter that comes without a discriminator.
///
/// # Errors
/// Returns [`CacheError::InvalidUsage`] when `filter` is set and
/// `discriminator` is empty or missing.
pub fn validate_filter_pairing<T>(
    type_name: &'static str,
    filter: Option<&Filter<T>>,
    discriminator: Option<&str>,
) -> Result<(), CacheError> {
    let has_discriminator = discriminator.is_some_and(|d| !d.is_empty());
    if filter.is_some() && !has_discriminator {
        return Err(CacheError::InvalidUsage { type_name });
    }
    Ok(())
}

/// The given filter, or one that accepts every item.
pub fn default_if_absent<T: 'static>(filter: Option<Filter<T>>) -> Filter<T> {
    filter.unwrap_or_else(|| {
        let accept_all: Filter<T> = Arc::new(|_: &T| true);
        accept_all
    })
}
