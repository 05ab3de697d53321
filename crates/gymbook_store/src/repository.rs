//! Repository factory trait
//!
//! Feature crates depend on the repository traits in [`crate::repositories`];
//! the backend decides which implementation to build through a factory.

/// A trait for repository factories
///
/// Generic over the repository type and the handle it is built from.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance backed by `client`
    fn create_repository(&self, client: C) -> R;
}
