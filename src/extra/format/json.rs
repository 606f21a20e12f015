/* src/extra/format/json.rs */

use super::Format;
use crate::SourceError;
use serde_json::Value;

/// JSON format parser using `serde_json`.
pub struct Json;

impl Format for Json {
	fn extensions(&self) -> &'static [&'static str] {
		&["json"]
	}

	fn parse(&self, input: &[u8]) -> Result<Value, SourceError> {
		serde_json::from_slice(input).map_err(|e| SourceError::Parse(e.to_string()))
	}
}
