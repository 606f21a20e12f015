/* tests/loader_tests.rs */

use scriptload::{
	ExtraConfig, Loader, MemorySource, ScriptConfig, ScriptError, Source, SourceError,
};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts reads so tests can observe how often storage is hit.
struct CountingSource {
	inner: MemorySource,
	reads: AtomicUsize,
}

impl CountingSource {
	fn new(inner: MemorySource) -> Self {
		Self {
			inner,
			reads: AtomicUsize::new(0),
		}
	}

	fn reads(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}
}

impl Source for CountingSource {
	fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		self.inner.read(key)
	}

	fn exists(&self, key: &str) -> bool {
		self.inner.exists(key)
	}
}

fn lua_block(block: serde_json::Value) -> ExtraConfig {
	let mut extra = ExtraConfig::new();
	extra.insert("lua".to_string(), block);
	extra
}

#[test]
fn test_snapshot_reads_each_source_once() {
	let source = Arc::new(CountingSource::new(
		MemorySource::new().with("a.lua", "x").with("b.lua", "y"),
	));
	let extra = lua_block(json!({ "sources": ["a.lua", "b.lua", "c.lua"] }));

	let config = ScriptConfig::parse_with(&extra, "lua", source.clone()).unwrap();
	assert_eq!(source.reads(), 3);

	for _ in 0..5 {
		assert_eq!(config.get("a.lua").as_deref(), Some("x"));
		assert_eq!(config.get("c.lua"), None);
	}
	assert_eq!(source.reads(), 3);
}

#[test]
fn test_live_reads_on_every_get() {
	let source = Arc::new(CountingSource::new(MemorySource::new().with("a.lua", "x")));
	let extra = lua_block(json!({ "live": true, "sources": ["a.lua"] }));

	let config = ScriptConfig::parse_with(&extra, "lua", source.clone()).unwrap();
	assert_eq!(source.reads(), 0);

	config.get("a.lua");
	config.get("a.lua");
	config.get("missing.lua");
	assert_eq!(source.reads(), 3);
}

#[test]
fn test_config_is_a_loader() {
	fn first_source(loader: &dyn Loader, id: &str) -> Option<String> {
		loader.get(id)
	}

	let extra = lua_block(json!({ "sources": ["a.lua"] }));
	let source = MemorySource::new().with("a.lua", "x");
	let config = ScriptConfig::parse_with(&extra, "lua", source).unwrap();
	assert_eq!(first_source(&config, "a.lua").as_deref(), Some("x"));
	assert_eq!(first_source(config.loader(), "a.lua").as_deref(), Some("x"));
}

#[test]
fn test_checksum_over_injected_source() {
	let extra = lua_block(json!({
		"sources": ["a.lua"],
		"md5": { "a.lua": "5d41402abc4b2a76b9719d911017c592" }
	}));
	let source = MemorySource::new().with("a.lua", "hello");
	assert!(ScriptConfig::parse_with(&extra, "lua", source).is_ok());

	let source = MemorySource::new().with("a.lua", "hello!");
	let config = ScriptConfig::parse_with(&extra, "lua", source);
	assert!(matches!(config, Err(ScriptError::WrongChecksum { .. })));
}

#[test]
fn test_checksum_over_non_utf8_bytes() {
	let raw = b"-- caf\xe9\nprint(1)".to_vec();
	let extra = lua_block(json!({
		"sources": ["s.lua"],
		"md5": { "s.lua": "1d2998f1ef3314e4ae2a15ec9b17432e" }
	}));

	let config =
		ScriptConfig::parse_with(&extra, "lua", MemorySource::new().with("s.lua", raw)).unwrap();
	assert_eq!(config.get("s.lua").as_deref(), Some("-- caf\u{fffd}\nprint(1)"));
}

#[test]
fn test_live_get_over_non_utf8_bytes() {
	let extra = lua_block(json!({ "live": true, "sources": ["s.lua"] }));
	let source = MemorySource::new().with("s.lua", b"caf\xe9".to_vec());

	let config = ScriptConfig::parse_with(&extra, "lua", source).unwrap();
	assert_eq!(config.get("s.lua").as_deref(), Some("caf\u{fffd}"));
}

#[test]
fn test_config_shared_across_threads() {
	let extra = lua_block(json!({ "sources": ["a.lua"] }));
	let config = Arc::new(
		ScriptConfig::parse_with(&extra, "lua", MemorySource::new().with("a.lua", "x")).unwrap(),
	);

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let config = config.clone();
			std::thread::spawn(move || config.get("a.lua"))
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap().as_deref(), Some("x"));
	}
}
