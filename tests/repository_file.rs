// std
use std::{
	collections::HashSet,
	env, fs,
	path::{Path, PathBuf},
	process,
};
// crates.io
use time::OffsetDateTime;
// self
use oauth_server_repository::{
	FileSystemRepository, LoadError, LoadOptions, OAuthServerRepository, ParseFailurePolicy,
	url::Url,
};

struct DefinitionDir(PathBuf);
impl DefinitionDir {
	fn new(label: &str) -> Self {
		let unique = format!(
			"oauth_server_repository_{label}_{}_{}",
			process::id(),
			OffsetDateTime::now_utc().unix_timestamp_nanos(),
		);
		let dir = env::temp_dir().join(unique);

		fs::create_dir_all(&dir).unwrap_or_else(|e| {
			panic!("Failed to create temporary definition directory {}: {e}", dir.display())
		});

		Self(dir)
	}

	fn path(&self) -> &Path {
		&self.0
	}

	fn write(&self, file: &str, contents: &str) -> &Self {
		fs::write(self.0.join(file), contents)
			.unwrap_or_else(|e| panic!("Failed to write definition fixture {file}: {e}"));

		self
	}

	#[cfg(unix)]
	fn dangling_link(&self, file: &str) -> &Self {
		std::os::unix::fs::symlink(self.0.join("missing-target"), self.0.join(file))
			.unwrap_or_else(|e| panic!("Failed to create dangling link {file}: {e}"));

		self
	}

	fn remove(&self, file: &str) {
		fs::remove_file(self.0.join(file))
			.unwrap_or_else(|e| panic!("Failed to remove definition fixture {file}: {e}"));
	}
}
impl Drop for DefinitionDir {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.0);
	}
}

fn definition(name: &str, token_url: &str) -> String {
	format!(
		r#"{{
	"name": "{name}",
	"oauth_endpoints": {{
		"token": {{
			"listen_path": "/auth/{name}/token",
			"upstream_url": "{token_url}",
			"methods": ["POST"]
		}}
	}}
}}"#
	)
}

async fn loaded_names(repository: &FileSystemRepository) -> HashSet<String> {
	repository
		.find_all()
		.await
		.expect("Listing loaded definitions should succeed.")
		.iter()
		.map(|server| server.name.to_string())
		.collect()
}

#[tokio::test]
async fn loads_every_json_file() {
	let dir = DefinitionDir::new("loads_every_json_file");

	dir.write("a.json", &definition("users", "https://users.example.com/oauth/token"))
		.write("b.json", &definition("billing", "https://billing.example.com/oauth/token"));

	let repository =
		FileSystemRepository::open(dir.path()).expect("Loading definitions should succeed.");

	assert_eq!(loaded_names(&repository).await, HashSet::from(["users".into(), "billing".into()]));

	let token_url = Url::parse("https://billing.example.com/oauth/token")
		.expect("Failed to parse token URL fixture.");
	let found = repository
		.find_by_token_url(&token_url)
		.await
		.expect("Loaded definition should be found by its token URL.");

	assert_eq!(found.name.as_ref(), "billing");
	assert_eq!(
		found.endpoints.token.as_ref().map(|token| token.listen_path.as_str()),
		Some("/auth/billing/token")
	);
}

#[tokio::test]
async fn non_json_files_are_ignored() {
	let dir = DefinitionDir::new("non_json_files_are_ignored");

	dir.write("users.json", &definition("users", "https://users.example.com/token"))
		.write("readme.txt", "this is not a definition");

	let repository =
		FileSystemRepository::open(dir.path()).expect("Loading definitions should succeed.");

	assert_eq!(loaded_names(&repository).await, HashSet::from(["users".into()]));
}

#[tokio::test]
async fn empty_directory_loads_an_empty_repository() {
	let dir = DefinitionDir::new("empty_directory");
	let repository = FileSystemRepository::open(dir.path())
		.expect("Loading an empty directory should succeed.");

	assert!(loaded_names(&repository).await.is_empty());
	assert_eq!(repository.dir(), dir.path());
}

#[test]
fn missing_directory_fails_to_load() {
	let dir = DefinitionDir::new("missing_directory");
	let missing = dir.path().join("does-not-exist");
	let err = FileSystemRepository::open(&missing)
		.expect_err("Loading a directory that does not exist should fail.");

	assert!(matches!(err, LoadError::ReadDir { ref path, .. } if path == &missing));
}

#[tokio::test]
async fn duplicate_names_resolve_to_the_last_file() {
	let dir = DefinitionDir::new("duplicate_names");

	dir.write("01-users.json", &definition("users", "https://first.example.com/token"))
		.write("02-users.json", &definition("users", "https://second.example.com/token"));

	let repository =
		FileSystemRepository::open(dir.path()).expect("Loading definitions should succeed.");
	let found =
		repository.find_by_name("users").await.expect("Duplicate name should be loaded once.");

	assert_eq!(found.token_upstream_url(), Some("https://second.example.com/token"));
	assert_eq!(repository.memory().len(), 1);
}

#[tokio::test]
async fn malformed_files_are_skipped_by_default() {
	let dir = DefinitionDir::new("malformed_skipped");

	dir.write("broken.json", "{ \"name\": ")
		.write("nameless.json", r#"{"oauth_endpoints": {}}"#)
		.write("empty-name.json", r#"{"name": ""}"#)
		.write("users.json", &definition("users", "https://users.example.com/token"));

	let repository = FileSystemRepository::open(dir.path())
		.expect("Malformed definitions should not abort the default load.");

	assert_eq!(loaded_names(&repository).await, HashSet::from(["users".into()]));
	assert!(!repository.memory().contains(""));
}

#[cfg(unix)]
#[test]
fn unreadable_file_aborts_open() {
	let dir = DefinitionDir::new("unreadable_open");

	dir.write("users.json", &definition("users", "https://users.example.com/token"))
		.dangling_link("ghost.json");

	let err = FileSystemRepository::open(dir.path())
		.expect_err("A definition file that cannot be read should abort the load.");

	let ghost = dir.path().join("ghost.json");

	assert!(matches!(err, LoadError::ReadFile { ref path, .. } if path == &ghost), "{err}");
}

#[cfg(unix)]
#[tokio::test]
async fn unreadable_file_on_reload_keeps_previous_definitions() {
	let dir = DefinitionDir::new("unreadable_reload");

	dir.write("users.json", &definition("users", "https://users.example.com/token"));

	let repository = FileSystemRepository::open(dir.path()).expect("Initial load should succeed.");

	dir.write("billing.json", &definition("billing", "https://billing.example.com/token"))
		.dangling_link("ghost.json");

	let err = repository.reload().expect_err("Reloading an unreadable file should fail.");

	assert!(matches!(err, LoadError::ReadFile { .. }));
	assert_eq!(loaded_names(&repository).await, HashSet::from(["users".into()]));
}

#[test]
fn malformed_files_abort_when_configured() {
	let dir = DefinitionDir::new("malformed_abort");

	dir.write("broken.json", r#"{"name": "users", "secrets": ["not", "a", "map"]}"#);

	let options = LoadOptions::default().with_parse_failure(ParseFailurePolicy::Abort);
	let err = FileSystemRepository::open_with(dir.path(), options)
		.expect_err("Malformed definitions should abort the load when configured.");

	assert!(matches!(err, LoadError::Parse { .. }));
	assert_eq!(err.path(), dir.path().join("broken.json"));
	assert!(err.to_string().contains("secrets"), "{err}");
}

#[test]
fn load_options_deserialize_with_defaults() {
	let defaults: LoadOptions =
		serde_json::from_str("{}").expect("Empty load options should deserialize.");
	let abort: LoadOptions = serde_json::from_str(r#"{"parse_failure":"abort"}"#)
		.expect("Abort policy should deserialize.");

	assert_eq!(defaults.parse_failure, ParseFailurePolicy::Skip);
	assert_eq!(abort.parse_failure, ParseFailurePolicy::Abort);
}

#[tokio::test]
async fn reload_picks_up_directory_changes() {
	let dir = DefinitionDir::new("reload");

	dir.write("users.json", &definition("users", "https://users.example.com/token"))
		.write("billing.json", &definition("billing", "https://billing.example.com/token"));

	let repository = FileSystemRepository::open(dir.path()).expect("Initial load should succeed.");
	let shared = repository.clone();

	repository
		.add(
			serde_json::from_str(&definition("adhoc", "https://adhoc.example.com/token"))
				.expect("Ad hoc definition should deserialize."),
		)
		.await
		.expect("Adding a definition should succeed.");
	dir.remove("billing.json");
	dir.write("search.json", &definition("search", "https://search.example.com/token"));
	repository.reload().expect("Reloading definitions should succeed.");

	assert_eq!(loaded_names(&shared).await, HashSet::from(["users".into(), "search".into()]));
}
