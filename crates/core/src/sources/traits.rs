use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction over where the two tables come from.
///
/// The registry export usually sits behind HTTP next to the frontend
/// assets, but tests and embedders can supply their own source. Fetching
/// is the only asynchronous boundary in the crate; everything after the
/// tables are in memory is synchronous.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch one named table resource as delimited text with a header row.
    async fn fetch_table(&self, resource: &str) -> Result<String, CoreError>;
}
