//! Thread-safe in-memory [`OAuthServerRepository`] implementation.

// self
use crate::{
	_prelude::*,
	error::Lookup,
	obs::{self, LookupOutcome, RepositoryOp},
	repository::{OAuthServerRepository, RepositoryFuture},
	server::{OAuthServer, ServerName},
};

pub(crate) type ServerMap = HashMap<ServerName, Arc<OAuthServer>>;

/// Keyed map of definitions behind a reader/writer lock.
///
/// Clones share the same underlying map. Lookups take the read lock, mutations
/// the write lock, so readers never observe a map mid-mutation.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository(Arc<RwLock<ServerMap>>);
impl MemoryRepository {
	/// Seeds a repository from the provided definitions; later duplicates win.
	pub fn from_servers<I>(servers: I) -> Self
	where
		I: IntoIterator<Item = OAuthServer>,
	{
		Self(Arc::new(RwLock::new(collect_servers(servers))))
	}

	/// Number of stored definitions.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns true when no definitions are stored.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	/// Returns true when a definition with the provided name is stored.
	pub fn contains(&self, name: &str) -> bool {
		self.0.read().contains_key(name)
	}

	/// Swaps the whole map in one write, used by directory reloads.
	pub(crate) fn replace_all(&self, servers: ServerMap) {
		*self.0.write() = servers;
	}

	pub(crate) fn insert_now(&self, server: OAuthServer) {
		self.0.write().insert(server.name.clone(), Arc::new(server));
	}

	fn remove_now(&self, name: &str) {
		self.0.write().remove(name);
	}

	fn find_all_now(&self) -> Vec<Arc<OAuthServer>> {
		self.0.read().values().cloned().collect()
	}

	fn find_by_name_now(&self, name: &str) -> Result<Arc<OAuthServer>> {
		let found = self.0.read().get(name).cloned();

		record(RepositoryOp::FindByName, found.is_some());

		found.ok_or_else(|| Error::OAuthServerNotFound { lookup: Lookup::Name(name.to_owned()) })
	}

	fn find_by_token_url_now(&self, url: &Url) -> Result<Arc<OAuthServer>> {
		let found = self.0.read().values().find(|server| server.proxies_token_to(url)).cloned();

		record(RepositoryOp::FindByTokenUrl, found.is_some());

		found.ok_or_else(|| Error::OAuthServerNotFound {
			lookup: Lookup::TokenUrl(url.as_str().to_owned()),
		})
	}
}
impl OAuthServerRepository for MemoryRepository {
	fn find_all(&self) -> RepositoryFuture<'_, Vec<Arc<OAuthServer>>> {
		Box::pin(async move { Ok(self.find_all_now()) })
	}

	fn find_by_name<'a>(&'a self, name: &'a str) -> RepositoryFuture<'a, Arc<OAuthServer>> {
		Box::pin(async move { self.find_by_name_now(name) })
	}

	fn find_by_token_url<'a>(&'a self, url: &'a Url) -> RepositoryFuture<'a, Arc<OAuthServer>> {
		Box::pin(async move { self.find_by_token_url_now(url) })
	}

	fn add(&self, server: OAuthServer) -> RepositoryFuture<'_, ()> {
		Box::pin(async move {
			self.insert_now(server);

			Ok(())
		})
	}

	fn remove<'a>(&'a self, name: &'a str) -> RepositoryFuture<'a, ()> {
		Box::pin(async move {
			self.remove_now(name);

			Ok(())
		})
	}
}

pub(crate) fn collect_servers<I>(servers: I) -> ServerMap
where
	I: IntoIterator<Item = OAuthServer>,
{
	servers.into_iter().map(|server| (server.name.clone(), Arc::new(server))).collect()
}

fn record(op: RepositoryOp, hit: bool) {
	obs::record_lookup(op, if hit { LookupOutcome::Hit } else { LookupOutcome::Miss });
}
