// self
use crate::_prelude::*;

/// Routing rule that proxies a gateway listen path to an upstream endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyDefinition {
	/// Upstream URL requests are forwarded to, kept verbatim as configured.
	pub upstream_url: String,
	/// Path the gateway listens on.
	pub listen_path: String,
	/// HTTP methods routed through this definition.
	pub methods: Vec<String>,
	/// Host names routed through this definition.
	pub hosts: Vec<String>,
	/// Strips the listen path before forwarding.
	pub strip_path: bool,
	/// Appends the request path to the upstream URL.
	pub append_path: bool,
	/// Forwards the original `Host` header upstream.
	pub preserve_host: bool,
	/// Skips TLS certificate verification for the upstream.
	pub insecure_skip_verify: bool,
}
impl ProxyDefinition {
	/// Creates a definition pointing at the provided upstream URL.
	pub fn new(upstream_url: impl Into<String>) -> Self {
		Self { upstream_url: upstream_url.into(), ..Default::default() }
	}

	/// Sets the listen path.
	pub fn with_listen_path(mut self, listen_path: impl Into<String>) -> Self {
		self.listen_path = listen_path.into();

		self
	}

	/// Sets the routed HTTP methods.
	pub fn with_methods<I, S>(mut self, methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.methods = methods.into_iter().map(Into::into).collect();

		self
	}
}

/// OAuth protocol endpoints proxied by the gateway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthEndpoints {
	/// Authorization endpoint.
	pub authorize: Option<ProxyDefinition>,
	/// Token endpoint; its upstream URL is the secondary lookup key.
	pub token: Option<ProxyDefinition>,
	/// Token introspection endpoint.
	pub introspect: Option<ProxyDefinition>,
	/// Token revocation endpoint.
	pub revoke: Option<ProxyDefinition>,
}
impl OAuthEndpoints {
	/// Returns the upstream URL of the token endpoint, if one is configured.
	pub fn token_upstream_url(&self) -> Option<&str> {
		self.token.as_ref().map(|token| token.upstream_url.as_str())
	}

	/// Returns true when the token endpoint proxies to `url`.
	///
	/// The configured upstream URL is parsed so both sides compare in normalized form
	/// (lowercased host, trailing `/` on a bare origin); values that do not parse are
	/// compared verbatim.
	pub fn token_upstream_matches(&self, url: &Url) -> bool {
		self.token_upstream_url().is_some_and(|stored| {
			stored == url.as_str() || Url::parse(stored).is_ok_and(|parsed| &parsed == url)
		})
	}
}

/// Client management endpoints proxied by the gateway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientEndpoints {
	/// Client registration endpoint.
	pub create: Option<ProxyDefinition>,
	/// Client removal endpoint.
	pub remove: Option<ProxyDefinition>,
}
