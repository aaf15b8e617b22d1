//! OAuth server definitions held by the repository.
//!
//! An [`OAuthServer`] mirrors one JSON definition file. The repository only
//! interprets two fields: [`OAuthServer::name`], the primary key, and the upstream
//! URL of the token endpoint, the secondary lookup key. Everything else is
//! configuration handed to the gateway untouched, including unknown JSON keys,
//! which are preserved in [`OAuthServer::extra`].

/// Builder API for assembling definitions in code.
pub mod builder;
/// Endpoint proxy definitions.
pub mod endpoint;
/// Validated server names.
pub mod name;
/// CORS, rate limit, token strategy, and access rule settings.
pub mod policy;

pub use builder::*;
pub use endpoint::*;
pub use name::*;
pub use policy::*;

// self
use crate::_prelude::*;

/// A named OAuth authorization server known to the gateway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OAuthServer {
	/// Unique name; primary key in the repository.
	pub name: ServerName,
	/// OAuth protocol endpoints.
	#[serde(rename = "oauth_endpoints", default)]
	pub endpoints: OAuthEndpoints,
	/// Client management endpoints.
	#[serde(rename = "oauth_client_endpoints", default)]
	pub client_endpoints: ClientEndpoints,
	/// Access request types the server accepts.
	#[serde(default)]
	pub allowed_access_types: Vec<String>,
	/// Authorize request types the server accepts.
	#[serde(default)]
	pub allowed_authorize_types: Vec<String>,
	/// Redirect used when the authorize endpoint requires a login.
	#[serde(rename = "auth_login_redirect", default)]
	pub authorize_login_redirect: String,
	/// Named secrets, e.g. client credentials per client id.
	#[serde(default)]
	pub secrets: BTreeMap<String, String>,
	/// CORS settings.
	#[serde(default)]
	pub cors_meta: CorsMeta,
	/// Rate limit settings.
	#[serde(default)]
	pub rate_limit: RateLimitMeta,
	/// Token validation strategy.
	#[serde(default)]
	pub token_strategy: TokenStrategy,
	/// Access rules evaluated by the gateway.
	#[serde(default)]
	pub access_rules: Vec<AccessRule>,
	/// Keys this crate does not model, passed through unmodified.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl OAuthServer {
	/// Creates a new builder for the provided name.
	pub fn builder(name: ServerName) -> OAuthServerBuilder {
		OAuthServerBuilder::new(name)
	}

	/// Returns the upstream URL of the token endpoint, if one is configured.
	pub fn token_upstream_url(&self) -> Option<&str> {
		self.endpoints.token_upstream_url()
	}

	/// Returns true when the token endpoint proxies to `url`.
	pub fn proxies_token_to(&self, url: &Url) -> bool {
		self.endpoints.token_upstream_matches(url)
	}
}
