//! Repository-level error types shared by the loader and the lookup operations.

// std
use std::{io, path::PathBuf};
// self
use crate::_prelude::*;

/// Repository-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical repository error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Loading definitions from disk failed.
	#[error(transparent)]
	Load(#[from] LoadError),

	/// No stored definition matched the lookup.
	#[error("OAuth server not found by {lookup}.")]
	OAuthServerNotFound {
		/// Key that missed.
		lookup: Lookup,
	},
}
impl Error {
	/// Returns true when the error is a lookup miss rather than a systemic failure.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::OAuthServerNotFound { .. })
	}
}

/// Key used by a failed lookup, carried by [`Error::OAuthServerNotFound`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
	/// Lookup by server name.
	Name(String),
	/// Lookup by upstream token endpoint URL.
	TokenUrl(String),
}
impl Display for Lookup {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Name(name) => write!(f, "name `{name}`"),
			Self::TokenUrl(url) => write!(f, "token URL `{url}`"),
		}
	}
}

/// Failures raised while populating a repository from a definition directory.
#[derive(Debug, ThisError)]
pub enum LoadError {
	/// The definition directory could not be listed.
	#[error("Failed to list definition directory {}.", path.display())]
	ReadDir {
		/// Directory that was scanned.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: io::Error,
	},
	/// A definition file could not be read.
	#[error("Failed to read definition file {}.", path.display())]
	ReadFile {
		/// File that failed to read.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: io::Error,
	},
	/// A definition file is not a valid OAuth server document.
	#[error("Failed to parse definition file {} at `{}`.", path.display(), source.path())]
	Parse {
		/// File that failed to parse.
		path: PathBuf,
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl LoadError {
	/// Returns the file or directory the failure refers to.
	pub fn path(&self) -> &std::path::Path {
		match self {
			Self::ReadDir { path, .. } | Self::ReadFile { path, .. } | Self::Parse { path, .. } =>
				path,
		}
	}
}
