use thiserror::Error;

/// The two failure kinds a search endpoint can surface. Whatever the backend
/// reports is collapsed into `Backend`; its cause is logged server-side and
/// never echoed to the caller.
#[derive(Debug, Error)]
pub enum SearchApiError {
    #[error("Invalid repoScope param")]
    InvalidRepoScope,
    #[error("Search Exception")]
    Backend(#[source] anyhow::Error),
}
