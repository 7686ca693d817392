//! Error types for the movies-related crate.

use thiserror::Error;

/// Failure raised by a [`GraphQueryExecutor`](crate::executor::GraphQueryExecutor).
#[derive(Error, Debug)]
pub enum TraversalError {
    #[error("Graph error: {0}")]
    Graph(#[from] movies_graph::GraphError),
}

#[derive(Error, Debug)]
pub enum RelatedError {
    #[error("Traversal failed: {0}")]
    Traversal(#[from] TraversalError),

    #[error(
        "Malformed traversal result: relationship {relationship_id} references node {missing_node_id} absent from its record"
    )]
    MalformedTraversalResult {
        relationship_id: i64,
        missing_node_id: i64,
    },
}

pub type Result<T> = std::result::Result<T, RelatedError>;
