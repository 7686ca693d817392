//! The seam between the graph builder and the database.

use async_trait::async_trait;
use movies_core::TraversalRecord;
use movies_graph::GraphClient;

use crate::error::TraversalError;

/// Source of neighbourhood traversals.
///
/// Implementations return typed records; any driver-specific unwrapping
/// happens inside the implementation.
#[async_trait]
pub trait GraphQueryExecutor: Send + Sync {
    /// All `(start, relationship, related)` tuples incident to `anchor_id`.
    /// An unknown anchor yields an empty sequence.
    async fn traverse(&self, anchor_id: i64) -> Result<Vec<TraversalRecord>, TraversalError>;
}

#[async_trait]
impl GraphQueryExecutor for GraphClient {
    async fn traverse(&self, anchor_id: i64) -> Result<Vec<TraversalRecord>, TraversalError> {
        Ok(self.neighbourhood(anchor_id).await?)
    }
}
