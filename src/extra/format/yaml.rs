/* src/extra/format/yaml.rs */

use super::Format;
use crate::SourceError;
use serde_json::Value;

/// YAML format parser using `serde_yaml`.
pub struct Yaml;

impl Format for Yaml {
	fn extensions(&self) -> &'static [&'static str] {
		&["yaml", "yml"]
	}

	fn parse(&self, input: &[u8]) -> Result<Value, SourceError> {
		serde_yaml::from_slice(input).map_err(|e| SourceError::Parse(e.to_string()))
	}
}
