/* src/error.rs */

/// Errors returned while resolving a script namespace.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
	/// The namespace key is not present in the extra configuration.
	#[error("no extra config")]
	NoExtraConfig,

	/// The namespace value is not a string-keyed mapping.
	#[error("wrong extra config")]
	WrongExtraConfig,

	/// An `md5` entry holds something other than a string.
	#[error("lua: wrong checksum type for source {0}")]
	WrongChecksumType(String),

	/// The resolved content does not hash to the certified digest.
	#[error("lua: wrong checksum for source {script}. have: {actual}, want: {expected}")]
	WrongChecksum {
		script: String,
		actual: String,
		expected: String,
	},

	/// A required source was never resolved by the active loader.
	#[error("lua: unable to load required source {0}")]
	UnknownSource(String),
}

/// Errors raised by sources and extra-config documents.
///
/// These never escape the loaders: preload failures are logged and dropped,
/// live lookups report them as absent content.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	/// Resource not found.
	#[error("not found")]
	NotFound,

	/// IO error from the backing storage.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// Path escapes the root of a sandboxed file source.
	#[error("sandbox violation")]
	SandboxViolation,

	/// Parsing error from a document format.
	#[error("parse error: {0}")]
	Parse(String),

	/// No registered format handles the given extension.
	#[error("unsupported format: {0}")]
	UnsupportedFormat(String),
}
