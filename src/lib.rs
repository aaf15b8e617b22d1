//! In-memory repository of OAuth authorization-server definitions for API gateways: load once
//! from a directory of JSON files, then resolve definitions by name or by upstream token URL.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod obs;
pub mod repository;
pub mod server;

pub use error::{Error, LoadError, Lookup, Result};
pub use repository::{
	FileSystemRepository, LoadOptions, MemoryRepository, OAuthServerRepository, ParseFailurePolicy,
};
pub use server::{OAuthServer, ServerName};

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
