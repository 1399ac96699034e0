//! Traits describing what can be cached and how lists are projected.

/// A type whose lists can be stored in a [`ListCache`](super::ListCache).
///
/// `TYPE_NAME` is the stable identity used to build cache keys. It must be
/// unique among the types sharing one cache instance.
pub trait Cacheable: Send + Sync + 'static {
    const TYPE_NAME: &'static str;
}

/// Builds a new value of `Self` from a source value of type `S`.
///
/// Implemented once per (source, target) pair, e.g. entity to DTO.
pub trait Projection<S>: Sized {
    fn project(source: &S) -> Self;
}

/// Projects every element of `source` into a freshly allocated list.
pub(crate) fn project_all<S, D>(source: &[S]) -> Vec<D>
where
    D: Projection<S>,
{
    source.iter().map(D::project).collect()
}
