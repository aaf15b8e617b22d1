//! Repository contract and built-in implementations for OAuth server definitions.

pub mod file;
pub mod memory;

pub use file::{FileSystemRepository, LoadOptions, ParseFailurePolicy};
pub use memory::MemoryRepository;

// self
use crate::{_prelude::*, server::OAuthServer};

/// Boxed future returned by [`OAuthServerRepository`] operations.
pub type RepositoryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Storage contract for OAuth server definitions, keyed by server name.
pub trait OAuthServerRepository
where
	Self: Send + Sync,
{
	/// Returns every stored definition, in no particular order.
	fn find_all(&self) -> RepositoryFuture<'_, Vec<Arc<OAuthServer>>>;

	/// Returns the definition with the provided name.
	///
	/// Fails with [`Error::OAuthServerNotFound`] when no such definition exists.
	fn find_by_name<'a>(&'a self, name: &'a str) -> RepositoryFuture<'a, Arc<OAuthServer>>;

	/// Returns the first definition whose token endpoint proxies to `url`.
	///
	/// Configured upstream URLs are parsed and compared in normalized form. When several
	/// definitions share an upstream URL, which one is returned is unspecified.
	fn find_by_token_url<'a>(&'a self, url: &'a Url) -> RepositoryFuture<'a, Arc<OAuthServer>>;

	/// Stores a definition, replacing any existing one with the same name.
	fn add(&self, server: OAuthServer) -> RepositoryFuture<'_, ()>;

	/// Deletes the definition with the provided name; absent names are a no-op.
	fn remove<'a>(&'a self, name: &'a str) -> RepositoryFuture<'a, ()>;
}
