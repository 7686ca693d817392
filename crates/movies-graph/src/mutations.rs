//! Write operations against the movie graph.

use neo4rs::query;

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Add one vote to every movie with the given title.
    ///
    /// Returns the number of properties set, which is the number of matched
    /// movies (0 when the title is unknown).
    pub async fn vote_by_title(&self, title: &str) -> Result<i64, GraphError> {
        let q = query(
            "MATCH (m:Movie {title: $title})
             SET m.votes = coalesce(m.votes, 0) + 1
             RETURN count(m) AS updated",
        )
        .param("title", title.to_string());

        let updated = match self.query_one(q).await? {
            Some(row) => row.get::<i64>("updated").unwrap_or(0),
            None => 0,
        };

        tracing::info!(title, updated, "Recorded vote");
        Ok(updated)
    }
}
