//! Cache errors.

use thiserror::Error;

/// Errors returned by [`ListCache`](super::ListCache) to the caller.
///
/// Data source failures are not part of this type: they are logged and
/// reported as [`CacheOutcome::FetchFailed`](super::CacheOutcome::FetchFailed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// A filter was supplied without a discriminator.
    ///
    /// Every filtered list of a type must live under its own key, otherwise a
    /// later unfiltered request for the same type would be served the
    /// filtered data.
    #[error(
        "a filter was given for `{type_name}` without a discriminator; \
         filtered lists must be cached under their own key"
    )]
    InvalidUsage { type_name: &'static str },

    /// The key holds a list of a different element type.
    ///
    /// Happens when two types declare the same `TYPE_NAME`.
    #[error("cache key `{key}` holds `{stored}`, not `{requested}`")]
    TypeMismatch {
        key: String,
        stored: &'static str,
        requested: &'static str,
    },
}
