// std
use std::path::Path;
// self
use crate::{_prelude::*, obs::RepositoryOp};

/// A span builder used by repository operations.
#[derive(Clone, Debug)]
pub struct RepositorySpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RepositorySpan {
	/// Creates a new span tagged with the provided operation and subject (path or key).
	pub fn new(op: RepositoryOp, subject: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth_server_repository.op", op = op.as_str(), subject);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (op, subject);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> RepositorySpanGuard {
		#[cfg(feature = "tracing")]
		{
			RepositorySpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			RepositorySpanGuard {}
		}
	}
}

/// RAII guard returned by [`RepositorySpan::entered`].
pub struct RepositorySpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for RepositorySpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("RepositorySpanGuard(..)")
	}
}

/// Emits an event before a definition file is read.
pub fn log_definition_loading(path: &Path) {
	#[cfg(feature = "tracing")]
	tracing::info!(path = %path.display(), "Loading OAuth server definition from file.");

	#[cfg(not(feature = "tracing"))]
	let _ = path;
}

/// Emits an event when a definition file could not be read.
pub fn log_definition_unreadable(path: &Path, error: &dyn StdError) {
	#[cfg(feature = "tracing")]
	tracing::error!(
		path = %path.display(),
		error = %error,
		"Couldn't read OAuth server definition file."
	);

	#[cfg(not(feature = "tracing"))]
	let _ = (path, error);
}

/// Emits an event when a malformed definition file is skipped.
pub fn log_definition_skipped(path: &Path, error: &dyn StdError) {
	#[cfg(feature = "tracing")]
	tracing::warn!(
		path = %path.display(),
		error = %error,
		"Skipping malformed OAuth server definition file."
	);

	#[cfg(not(feature = "tracing"))]
	let _ = (path, error);
}

/// Emits an event once a directory has been fully loaded.
pub fn log_definitions_loaded(dir: &Path, count: usize) {
	#[cfg(feature = "tracing")]
	tracing::info!(dir = %dir.display(), count, "Loaded OAuth server definitions.");

	#[cfg(not(feature = "tracing"))]
	let _ = (dir, count);
}
