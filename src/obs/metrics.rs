// self
use crate::obs::{LookupOutcome, RepositoryOp};

/// Records a lookup outcome via the global metrics recorder (when enabled).
pub fn record_lookup(op: RepositoryOp, outcome: LookupOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth_server_repository_lookup_total",
			"op" => op.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (op, outcome);
	}
}

/// Records the number of definitions loaded from disk (when enabled).
pub fn record_definitions_loaded(count: usize) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oauth_server_repository_loaded_total").increment(count as u64);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = count;
	}
}
