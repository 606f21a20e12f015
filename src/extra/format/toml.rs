/* src/extra/format/toml.rs */

use super::Format;
use crate::SourceError;
use serde_json::Value;

/// TOML format parser using `toml`.
pub struct Toml;

impl Format for Toml {
	fn extensions(&self) -> &'static [&'static str] {
		&["toml"]
	}

	fn parse(&self, input: &[u8]) -> Result<Value, SourceError> {
		let s = std::str::from_utf8(input).map_err(|e| SourceError::Parse(e.to_string()))?;
		toml::from_str(s).map_err(|e| SourceError::Parse(e.to_string()))
	}
}
