/* src/lib.rs */

//!
//! Script source loading for a namespace-scoped configuration block.
//!
//! The crate integrates four components:
//!
//! - **source**: Raw byte retrieval by key (`FileSource`, `MemorySource`).
//! - **loader**: Content lookup by identifier, either from a snapshot taken at
//!   parse time (`SnapshotLoader`) or re-read on every call (`LiveLoader`).
//! - **extra**: The host's generic extra configuration and document parsing.
//! - **config**: `ScriptConfig`, which resolves a namespace block, picks a
//!   loader and verifies declared MD5 checksums.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `logging`: Reports failed source preloads through `log` (default).
//! - `toml`, `yaml`: Extra-config document formats. JSON is always available.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use scriptload::{ScriptConfig, extra};
//! use scriptload::source::FileSource;
//!
//! let extra = extra::load_document(&FileSource::new(), "app.json")?;
//! let config = ScriptConfig::parse(&extra, "lua")?;
//! for id in &config.sources {
//! 	let _code = config.require(id)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod checksum;
pub mod config;
pub mod error;
pub mod extra;
pub mod loader;
pub mod source;

pub use config::ScriptConfig;
pub use error::{ScriptError, SourceError};
pub use extra::ExtraConfig;
pub use loader::{LiveLoader, Loader, SnapshotLoader};
pub use source::{FileSource, MemorySource, Source};
