//! Optional observability helpers for repository operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit spans named `oauth_server_repository.op` with an `op`
//!   field, plus structured events while definition files are loaded.
//! - Enable `metrics` to increment `oauth_server_repository_lookup_total` for every lookup,
//!   labeled by `op` + `outcome`, and `oauth_server_repository_loaded_total` for every
//!   definition loaded from disk.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Repository operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepositoryOp {
	/// Bulk load from a definition directory.
	Load,
	/// Re-scan of a definition directory.
	Reload,
	/// Lookup by server name.
	FindByName,
	/// Lookup by upstream token URL.
	FindByTokenUrl,
}
impl RepositoryOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RepositoryOp::Load => "load",
			RepositoryOp::Reload => "reload",
			RepositoryOp::FindByName => "find_by_name",
			RepositoryOp::FindByTokenUrl => "find_by_token_url",
		}
	}
}
impl Display for RepositoryOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupOutcome {
	/// A definition matched.
	Hit,
	/// Nothing matched.
	Miss,
}
impl LookupOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			LookupOutcome::Hit => "hit",
			LookupOutcome::Miss => "miss",
		}
	}
}
impl Display for LookupOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
