/* src/extra/format/mod.rs */

use crate::SourceError;
use serde_json::Value;

mod json;
pub use json::Json;

#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "toml")]
pub use self::toml::Toml;

#[cfg(feature = "yaml")]
mod yaml;
#[cfg(feature = "yaml")]
pub use yaml::Yaml;

/// Abstract format parser that converts bytes into a generic value tree.
pub trait Format: Send + Sync {
	/// List of supported extensions or identifiers.
	fn extensions(&self) -> &'static [&'static str];

	/// Parse the raw bytes into a value.
	fn parse(&self, input: &[u8]) -> Result<Value, SourceError>;
}

/// An enum wrapper for all compiled-in formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyFormat {
	Json,
	#[cfg(feature = "toml")]
	Toml,
	#[cfg(feature = "yaml")]
	Yaml,
}

impl AnyFormat {
	/// Every format enabled in this build, in lookup order.
	pub const ALL: &'static [AnyFormat] = &[
		Self::Json,
		#[cfg(feature = "toml")]
		Self::Toml,
		#[cfg(feature = "yaml")]
		Self::Yaml,
	];

	/// Selects the format handling `ext` (without the leading dot).
	pub fn from_extension(ext: &str) -> Option<Self> {
		Self::ALL
			.iter()
			.copied()
			.find(|format| format.extensions().contains(&ext))
	}
}

impl Format for AnyFormat {
	fn extensions(&self) -> &'static [&'static str] {
		match self {
			Self::Json => Json.extensions(),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.extensions(),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.extensions(),
		}
	}

	fn parse(&self, input: &[u8]) -> Result<Value, SourceError> {
		match self {
			Self::Json => Json.parse(input),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.parse(input),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.parse(input),
		}
	}
}
