//! Directory-backed [`OAuthServerRepository`] that loads one definition per JSON file.

// std
use std::{
	fs,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	error::LoadError,
	obs::{self, RepositoryOp, RepositorySpan},
	repository::{
		MemoryRepository, OAuthServerRepository, RepositoryFuture, memory::collect_servers,
	},
	server::OAuthServer,
};

/// Marker a directory entry's file name must contain to be treated as a definition.
const DEFINITION_MARKER: &str = ".json";

/// What to do with a definition file that is not a valid OAuth server document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailurePolicy {
	#[default]
	/// Log a warning, skip the file, and keep loading.
	Skip,
	/// Fail the whole load with [`LoadError::Parse`].
	Abort,
}

/// Options controlling how a definition directory is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
	/// Handling of malformed definition files.
	pub parse_failure: ParseFailurePolicy,
}
impl LoadOptions {
	/// Overrides the parse failure policy.
	pub fn with_parse_failure(mut self, policy: ParseFailurePolicy) -> Self {
		self.parse_failure = policy;

		self
	}
}

/// Repository populated from a directory of JSON definition files.
///
/// Only entries directly inside the directory whose name contains `.json` are
/// considered. Files are applied in ascending name order, so when two files declare
/// the same server name the lexically last one wins. After loading, all operations
/// are served from memory.
#[derive(Clone, Debug)]
pub struct FileSystemRepository {
	dir: PathBuf,
	options: LoadOptions,
	servers: MemoryRepository,
}
impl FileSystemRepository {
	/// Loads every definition in `dir` with the default [`LoadOptions`].
	pub fn open(dir: impl Into<PathBuf>) -> Result<Self, LoadError> {
		Self::open_with(dir, LoadOptions::default())
	}

	/// Loads every definition in `dir` using the provided options.
	pub fn open_with(dir: impl Into<PathBuf>, options: LoadOptions) -> Result<Self, LoadError> {
		let dir = dir.into();
		let _span = RepositorySpan::new(RepositoryOp::Load, &dir.display().to_string()).entered();
		let servers = MemoryRepository::default();
		let definitions = load_definitions(&dir, options)?;
		let count = definitions.len();

		for definition in definitions {
			servers.insert_now(definition);
		}

		obs::record_definitions_loaded(count);
		obs::log_definitions_loaded(&dir, count);

		Ok(Self { dir, options, servers })
	}

	/// Re-scans the directory and atomically replaces the stored definitions.
	///
	/// On failure the current definitions are kept. Definitions added in code since
	/// the previous load are discarded on success.
	pub fn reload(&self) -> Result<(), LoadError> {
		let _span =
			RepositorySpan::new(RepositoryOp::Reload, &self.dir.display().to_string()).entered();
		let definitions = load_definitions(&self.dir, self.options)?;
		let count = definitions.len();

		self.servers.replace_all(collect_servers(definitions));

		obs::record_definitions_loaded(count);
		obs::log_definitions_loaded(&self.dir, count);

		Ok(())
	}

	/// Directory the definitions are loaded from.
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// In-memory view shared with this repository.
	pub fn memory(&self) -> &MemoryRepository {
		&self.servers
	}
}
impl OAuthServerRepository for FileSystemRepository {
	fn find_all(&self) -> RepositoryFuture<'_, Vec<Arc<OAuthServer>>> {
		self.servers.find_all()
	}

	fn find_by_name<'a>(&'a self, name: &'a str) -> RepositoryFuture<'a, Arc<OAuthServer>> {
		self.servers.find_by_name(name)
	}

	fn find_by_token_url<'a>(&'a self, url: &'a Url) -> RepositoryFuture<'a, Arc<OAuthServer>> {
		self.servers.find_by_token_url(url)
	}

	fn add(&self, server: OAuthServer) -> RepositoryFuture<'_, ()> {
		self.servers.add(server)
	}

	fn remove<'a>(&'a self, name: &'a str) -> RepositoryFuture<'a, ()> {
		self.servers.remove(name)
	}
}

/// Reads and parses every definition file in `dir`, in ascending file-name order.
pub fn load_definitions(dir: &Path, options: LoadOptions) -> Result<Vec<OAuthServer>, LoadError> {
	let mut definitions = Vec::new();

	for path in definition_paths(dir)? {
		obs::log_definition_loading(&path);

		let bytes = fs::read(&path).map_err(|source| {
			obs::log_definition_unreadable(&path, &source);

			LoadError::ReadFile { path: path.clone(), source }
		})?;

		match parse_definition(&path, &bytes) {
			Ok(definition) => definitions.push(definition),
			Err(e) => match options.parse_failure {
				ParseFailurePolicy::Skip => obs::log_definition_skipped(&path, &e),
				ParseFailurePolicy::Abort => return Err(e),
			},
		}
	}

	Ok(definitions)
}

/// Parses a single definition document, reporting the JSON path of any failure.
pub fn parse_definition(path: &Path, bytes: &[u8]) -> Result<OAuthServer, LoadError> {
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
}

fn definition_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
	let read_dir_error = |source| LoadError::ReadDir { path: dir.to_path_buf(), source };
	let mut paths = Vec::new();

	for entry in fs::read_dir(dir).map_err(read_dir_error)? {
		let entry = entry.map_err(read_dir_error)?;
		let path = entry.path();

		if entry.file_name().to_string_lossy().contains(DEFINITION_MARKER) && !path.is_dir() {
			paths.push(path);
		}
	}

	paths.sort();

	Ok(paths)
}
