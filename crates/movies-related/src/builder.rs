//! Consolidates neighbourhood traversals into a de-duplicated node/edge graph.

use std::collections::HashSet;

use movies_core::{GraphEntity, RelatedGraph, TraversalRecord};

use crate::error::{RelatedError, Result};
use crate::executor::GraphQueryExecutor;

/// Answers "what is connected to entity X".
pub struct RelatedEntityGraphBuilder<E> {
    executor: E,
}

impl<E: GraphQueryExecutor> RelatedEntityGraphBuilder<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Fetch the neighbourhood of `anchor_id` and consolidate it.
    ///
    /// An unknown anchor gives an empty graph. Executor failures are returned
    /// unchanged as [`RelatedError::Traversal`].
    pub async fn build(&self, anchor_id: i64) -> Result<RelatedGraph> {
        let records = self.executor.traverse(anchor_id).await?;
        let graph = consolidate(records)?;

        tracing::debug!(
            anchor_id,
            nodes = graph.nodes.len(),
            relationships = graph.relationships.len(),
            "Built related graph"
        );
        Ok(graph)
    }
}

/// Assemble traversal records into a [`RelatedGraph`].
///
/// Nodes keep their first occurrence and first-insertion order; every
/// record contributes exactly one relationship, in arrival order.
pub fn consolidate<I>(records: I) -> Result<RelatedGraph>
where
    I: IntoIterator<Item = TraversalRecord>,
{
    let mut seen = HashSet::new();
    let mut graph = RelatedGraph::default();

    for TraversalRecord {
        start,
        relationship,
        related,
    } in records
    {
        for endpoint in [relationship.start_node_id, relationship.end_node_id] {
            if endpoint != start.id && endpoint != related.id {
                return Err(RelatedError::MalformedTraversalResult {
                    relationship_id: relationship.id,
                    missing_node_id: endpoint,
                });
            }
        }

        add_if_absent(&mut graph.nodes, &mut seen, start);
        add_if_absent(&mut graph.nodes, &mut seen, related);
        graph.relationships.push(relationship);
    }

    Ok(graph)
}

fn add_if_absent(nodes: &mut Vec<GraphEntity>, seen: &mut HashSet<i64>, entity: GraphEntity) {
    if seen.insert(entity.id) {
        nodes.push(entity);
    }
}
