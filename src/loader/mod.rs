/* src/loader/mod.rs */

mod live;
mod snapshot;

pub use live::LiveLoader;
pub use snapshot::SnapshotLoader;

/// Resolves script text by source identifier.
///
/// Every failure (never resolved, unreadable) is reported the same way, as
/// `None`. Bytes that are not valid UTF-8 are decoded lossily.
pub trait Loader: Send + Sync {
	/// Fetch the current content for `id`.
	fn get(&self, id: &str) -> Option<String>;
}
