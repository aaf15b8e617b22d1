// self
use crate::{
	_prelude::*,
	server::{
		AccessRule, ClientEndpoints, CorsMeta, OAuthEndpoints, OAuthServer, ProxyDefinition,
		RateLimitMeta, ServerName, TokenStrategy,
	},
};

/// Builder for [`OAuthServer`] values.
#[derive(Debug)]
pub struct OAuthServerBuilder {
	server: OAuthServer,
}
impl OAuthServerBuilder {
	/// Creates a new builder seeded with the provided name and default settings.
	pub fn new(name: ServerName) -> Self {
		Self {
			server: OAuthServer {
				name,
				endpoints: OAuthEndpoints::default(),
				client_endpoints: ClientEndpoints::default(),
				allowed_access_types: Vec::new(),
				allowed_authorize_types: Vec::new(),
				authorize_login_redirect: String::new(),
				secrets: BTreeMap::new(),
				cors_meta: CorsMeta::default(),
				rate_limit: RateLimitMeta::default(),
				token_strategy: TokenStrategy::default(),
				access_rules: Vec::new(),
				extra: Map::new(),
			},
		}
	}

	/// Sets the authorize endpoint.
	pub fn authorize(mut self, definition: ProxyDefinition) -> Self {
		self.server.endpoints.authorize = Some(definition);

		self
	}

	/// Sets the token endpoint.
	pub fn token(mut self, definition: ProxyDefinition) -> Self {
		self.server.endpoints.token = Some(definition);

		self
	}

	/// Shorthand for a token endpoint that only declares its upstream URL.
	pub fn token_upstream_url(self, url: &Url) -> Self {
		self.token(ProxyDefinition::new(url.as_str()))
	}

	/// Sets the introspection endpoint.
	pub fn introspect(mut self, definition: ProxyDefinition) -> Self {
		self.server.endpoints.introspect = Some(definition);

		self
	}

	/// Sets the revocation endpoint.
	pub fn revoke(mut self, definition: ProxyDefinition) -> Self {
		self.server.endpoints.revoke = Some(definition);

		self
	}

	/// Overrides the client management endpoints.
	pub fn client_endpoints(mut self, endpoints: ClientEndpoints) -> Self {
		self.server.client_endpoints = endpoints;

		self
	}

	/// Adds a named secret.
	pub fn secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.server.secrets.insert(key.into(), value.into());

		self
	}

	/// Overrides the CORS settings.
	pub fn cors_meta(mut self, cors_meta: CorsMeta) -> Self {
		self.server.cors_meta = cors_meta;

		self
	}

	/// Overrides the rate limit settings.
	pub fn rate_limit(mut self, rate_limit: RateLimitMeta) -> Self {
		self.server.rate_limit = rate_limit;

		self
	}

	/// Overrides the token strategy.
	pub fn token_strategy(mut self, token_strategy: TokenStrategy) -> Self {
		self.server.token_strategy = token_strategy;

		self
	}

	/// Appends an access rule.
	pub fn access_rule(mut self, rule: AccessRule) -> Self {
		self.server.access_rules.push(rule);

		self
	}

	/// Consumes the builder.
	pub fn build(self) -> OAuthServer {
		self.server
	}
}
