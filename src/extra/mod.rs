/* src/extra/mod.rs */

//!
//! The host-supplied extra configuration that namespace blocks live in.

pub mod format;

pub use format::{AnyFormat, Format};

use crate::SourceError;
use crate::source::Source;
use serde_json::{Map, Value};

/// Generic string-keyed configuration map supplied by the host application.
pub type ExtraConfig = Map<String, Value>;

/// Parses a whole document into an [`ExtraConfig`].
///
/// The document's top level must be a mapping.
pub fn parse_document(format: &impl Format, input: &[u8]) -> Result<ExtraConfig, SourceError> {
	match format.parse(input)? {
		Value::Object(map) => Ok(map),
		other => Err(SourceError::Parse(format!(
			"expected a mapping at the top level, found {}",
			kind_of(&other)
		))),
	}
}

/// Reads `key` from `source`, selecting the parser by extension.
pub fn load_document<S>(source: &S, key: &str) -> Result<ExtraConfig, SourceError>
where
	S: Source + ?Sized,
{
	let ext = match key.rfind('.') {
		Some(idx) => &key[idx + 1..],
		None => {
			return Err(SourceError::UnsupportedFormat(
				"missing extension".to_string(),
			));
		}
	};
	let format = AnyFormat::from_extension(ext)
		.ok_or_else(|| SourceError::UnsupportedFormat(ext.to_string()))?;
	let bytes = source.read(key)?;
	parse_document(&format, &bytes)
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "a mapping",
	}
}
