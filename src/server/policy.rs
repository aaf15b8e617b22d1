// self
use crate::_prelude::*;

/// CORS settings applied to the proxied OAuth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsMeta {
	/// Enables CORS handling.
	pub enabled: bool,
	/// Allowed origins.
	pub domains: Vec<String>,
	/// Allowed methods.
	pub methods: Vec<String>,
	/// Allowed request headers.
	pub request_headers: Vec<String>,
	/// Headers exposed to the browser.
	pub exposed_headers: Vec<String>,
	/// Passes preflight requests through to the upstream.
	pub options_passthrough: bool,
}

/// Rate limit applied to the proxied OAuth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitMeta {
	/// Enables rate limiting.
	pub enabled: bool,
	/// Limit expression, e.g. `100-M`.
	pub limit: String,
}

/// Strategy used to validate tokens issued by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenStrategy {
	/// Strategy identifier, e.g. `jwt` or `introspection`.
	pub name: String,
	/// Strategy-specific settings, kept as raw JSON.
	pub settings: Value,
	/// Clock skew tolerance in seconds.
	pub leeway: i64,
}

/// Predicate/action pair evaluated against incoming requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessRule {
	/// Predicate expression.
	pub predicate: String,
	/// Action applied when the predicate matches.
	pub action: String,
}
