/* src/config.rs */

//!
//! Resolution of a namespace block into a ready-to-run script configuration.

use std::fmt;

use serde_json::{Map, Value};

use crate::ScriptError;
use crate::checksum;
use crate::extra::ExtraConfig;
use crate::loader::{LiveLoader, Loader, SnapshotLoader};
use crate::source::{FileSource, Source};

/// Script configuration resolved from one namespace block.
///
/// The loader variant is chosen once by [`ScriptConfig::parse`] and never
/// changes afterwards.
pub struct ScriptConfig {
	/// Declared source identifiers, in declaration order.
	pub sources: Vec<String>,
	/// Inline script run before the sources.
	pub pre_code: Option<String>,
	/// Inline script run after the sources.
	pub post_code: Option<String>,
	/// Set only by a literal `true` under `skip_next`.
	pub skip_next: bool,
	/// Set only by a literal `true` under `allow_open_libs`.
	pub allow_open_libs: bool,
	loader: Box<dyn Loader>,
	live: bool,
}

impl ScriptConfig {
	/// Resolves `namespace` from `extra`, reading sources from the file system.
	pub fn parse(extra: &ExtraConfig, namespace: &str) -> Result<Self, ScriptError> {
		Self::parse_with(extra, namespace, FileSource::new())
	}

	/// Resolves `namespace` from `extra`, reading sources through `source`.
	///
	/// In live mode `source` is kept by the loader and consulted on every
	/// lookup; otherwise it is used once to build the snapshot.
	pub fn parse_with<S>(
		extra: &ExtraConfig,
		namespace: &str,
		source: S,
	) -> Result<Self, ScriptError>
	where
		S: Source + 'static,
	{
		let block = match extra.get(namespace) {
			Some(Value::Object(block)) => block,
			Some(_) => return Err(ScriptError::WrongExtraConfig),
			None => return Err(ScriptError::NoExtraConfig),
		};

		let sources = string_list(block, "sources");
		let pre_code = string_opt(block, "pre");
		let post_code = string_opt(block, "post");
		let skip_next = flag(block, "skip_next");
		let allow_open_libs = flag(block, "allow_open_libs");

		// Checksums are never verified in live mode.
		if flag(block, "live") {
			return Ok(Self {
				sources,
				pre_code,
				post_code,
				skip_next,
				allow_open_libs,
				loader: Box::new(LiveLoader::new(source)),
				live: true,
			});
		}

		let snapshot = SnapshotLoader::preload(&source, &sources);

		if let Some(Value::Object(checksums)) = block.get("md5") {
			checksum::verify(&snapshot, checksums)?;
		}

		Ok(Self {
			sources,
			pre_code,
			post_code,
			skip_next,
			allow_open_libs,
			loader: Box::new(snapshot),
			live: false,
		})
	}

	/// Current content of `id`, or `None` if the loader cannot resolve it.
	pub fn get(&self, id: &str) -> Option<String> {
		self.loader.get(id)
	}

	/// Like [`get`](Self::get), but an unresolved source is an error.
	pub fn require(&self, id: &str) -> Result<String, ScriptError> {
		self.get(id).ok_or_else(|| ScriptError::UnknownSource(id.to_string()))
	}

	/// Whether lookups re-read storage instead of serving a snapshot.
	pub fn is_live(&self) -> bool {
		self.live
	}

	pub fn loader(&self) -> &dyn Loader {
		self.loader.as_ref()
	}
}

impl Loader for ScriptConfig {
	fn get(&self, id: &str) -> Option<String> {
		self.loader.get(id)
	}
}

impl fmt::Debug for ScriptConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScriptConfig")
			.field("sources", &self.sources)
			.field("pre_code", &self.pre_code)
			.field("post_code", &self.post_code)
			.field("skip_next", &self.skip_next)
			.field("allow_open_libs", &self.allow_open_libs)
			.field("live", &self.live)
			.finish_non_exhaustive()
	}
}

fn string_opt(block: &Map<String, Value>, key: &str) -> Option<String> {
	block.get(key).and_then(Value::as_str).map(str::to_string)
}

fn flag(block: &Map<String, Value>, key: &str) -> bool {
	matches!(block.get(key), Some(Value::Bool(true)))
}

fn string_list(block: &Map<String, Value>, key: &str) -> Vec<String> {
	match block.get(key) {
		Some(Value::Array(items)) => items
			.iter()
			.filter_map(Value::as_str)
			.map(str::to_string)
			.collect(),
		_ => Vec::new(),
	}
}
