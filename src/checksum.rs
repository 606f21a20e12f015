/* src/checksum.rs */

//!
//! MD5 content digests rendered as lowercase hex.

use serde_json::{Map, Value};

use crate::ScriptError;
use crate::loader::SnapshotLoader;

/// MD5 of `content` as 32 lowercase hex characters.
pub fn md5_hex(content: &[u8]) -> String {
	format!("{:x}", md5::compute(content))
}

/// Checks every `(source, digest)` pair of an `md5` block against `snapshot`.
///
/// The raw captured bytes are hashed; a source missing from the snapshot is
/// hashed as empty content. The first non-string digest or mismatch aborts
/// the check.
pub(crate) fn verify(
	snapshot: &SnapshotLoader,
	checksums: &Map<String, Value>,
) -> Result<(), ScriptError> {
	for (script, expected) in checksums {
		let Some(expected) = expected.as_str() else {
			return Err(ScriptError::WrongChecksumType(script.clone()));
		};
		let actual = md5_hex(snapshot.bytes(script).unwrap_or_default());
		if actual != expected {
			return Err(ScriptError::WrongChecksum {
				script: script.clone(),
				actual,
				expected: expected.to_string(),
			});
		}
	}
	Ok(())
}
