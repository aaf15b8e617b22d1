//! Validated primary key for OAuth server definitions.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Error returned when a server name fails validation.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ServerNameError {
	/// The name was empty.
	#[error("OAuth server name cannot be empty.")]
	Empty,
}

/// Unique, non-empty name identifying an OAuth server definition.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerName(String);
impl ServerName {
	/// Creates a new name after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, ServerNameError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for ServerName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ServerName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for ServerName {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<ServerName> for String {
	fn from(value: ServerName) -> Self {
		value.0
	}
}
impl TryFrom<String> for ServerName {
	type Error = ServerNameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl FromStr for ServerName {
	type Err = ServerNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for ServerName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ServerName({})", self.0)
	}
}
impl Display for ServerName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

fn validate_view(view: &str) -> Result<(), ServerNameError> {
	if view.is_empty() {
		return Err(ServerNameError::Empty);
	}

	Ok(())
}
