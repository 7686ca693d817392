//! Read operations against the movie graph.

use neo4rs::query;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use movies_core::{
    CastGraph, CastMember, GraphEntity, GraphRelationship, Movie, Properties, TraversalRecord,
};

use crate::client::{GraphClient, GraphError};

/// One entry of the collected cast map. OPTIONAL MATCH produces a single
/// entry with null fields for a movie without cast.
#[derive(Debug, Deserialize)]
struct CastRow {
    name: Option<String>,
    job: Option<String>,
    role: Option<String>,
}

impl GraphClient {
    // ── Movie Lookups ────────────────────────────────────────────

    /// Get a movie and its cast by exact title.
    ///
    /// Fails with `NotFound` when no movie has the title and with `Ambiguous`
    /// when several do.
    pub async fn find_by_title(&self, title: &str) -> Result<Movie, GraphError> {
        let q = query(
            "MATCH (movie:Movie {title: $title})
             OPTIONAL MATCH (movie)<-[r]-(person:Person)
             WITH movie, collect({
                 name: person.name,
                 job: head(split(toLower(type(r)), '_')),
                 role: reduce(acc = '', role IN r.roles |
                       acc + CASE WHEN acc = '' THEN '' ELSE ', ' END + role)
             }) AS cast
             RETURN movie.title AS title,
                    movie.released AS released,
                    movie.tagline AS tagline,
                    movie.votes AS votes,
                    cast
             LIMIT 2",
        )
        .param("title", title.to_string());

        let rows = self.query_rows(q).await?;
        let row = match rows.as_slice() {
            [row] => row,
            [] => {
                return Err(GraphError::NotFound {
                    label: "Movie".to_string(),
                    key: "title".to_string(),
                    value: title.to_string(),
                })
            }
            _ => {
                return Err(GraphError::Ambiguous {
                    label: "Movie".to_string(),
                    key: "title".to_string(),
                    value: title.to_string(),
                    count: rows.len(),
                })
            }
        };

        let mut movie = movie_from_row(row)?;
        let cast: Vec<CastRow> = row
            .get("cast")
            .map_err(|e| GraphError::Serialization(format!("Failed to deserialize cast: {e}")))?;
        movie.cast = map_cast(cast);

        tracing::debug!(title, cast = movie.cast.len(), "Found movie");
        Ok(movie)
    }

    /// Case-insensitive substring search over movie titles.
    pub async fn search(&self, term: &str) -> Result<Vec<Movie>, GraphError> {
        let q = query(
            "MATCH (movie:Movie)
             WHERE toLower(movie.title) CONTAINS toLower($title)
             RETURN movie.title AS title,
                    movie.released AS released,
                    movie.tagline AS tagline,
                    movie.votes AS votes",
        )
        .param("title", term.to_string());

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(movie_from_row(&row)?);
        }
        tracing::debug!(term, matches = results.len(), "Searched movies");
        Ok(results)
    }

    // ── Graph Views ──────────────────────────────────────────────

    /// Movies and their actors, at most `limit` movies.
    pub async fn fetch_cast_graph(&self, limit: u32) -> Result<CastGraph, GraphError> {
        let q = query(
            "MATCH (m:Movie)<-[:ACTED_IN]-(p:Person)
             WITH m, p
             ORDER BY m.title, p.name
             RETURN m.title AS title, collect(p.name) AS cast
             LIMIT $limit",
        )
        .param("limit", i64::from(limit));

        let rows = self.query_rows(q).await?;
        let mut pairs = Vec::with_capacity(rows.len());
        for row in rows {
            let title: String = row.get("title").map_err(|e| {
                GraphError::Serialization(format!("Failed to deserialize title: {e}"))
            })?;
            let cast: Vec<String> = row.get("cast").map_err(|e| {
                GraphError::Serialization(format!("Failed to deserialize cast: {e}"))
            })?;
            pairs.push((title, cast));
        }

        let graph = CastGraph::from_rows(pairs);
        tracing::debug!(
            limit,
            nodes = graph.nodes.len(),
            links = graph.links.len(),
            "Fetched cast graph"
        );
        Ok(graph)
    }

    /// Every relationship incident to `anchor_id`, in either direction, with
    /// both endpoints.
    ///
    /// An unknown anchor yields no records.
    pub async fn neighbourhood(&self, anchor_id: i64) -> Result<Vec<TraversalRecord>, GraphError> {
        let q = query(
            "MATCH (startNode)-[relationship]-(relatedNode)
             WHERE id(startNode) = $id
             RETURN startNode, relationship, relatedNode",
        )
        .param("id", anchor_id);

        let rows = self.query_rows(q).await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let start: neo4rs::Node = row.get("startNode").map_err(|e| {
                GraphError::Serialization(format!("Failed to get start node: {e}"))
            })?;
            let relation: neo4rs::Relation = row.get("relationship").map_err(|e| {
                GraphError::Serialization(format!("Failed to get relationship: {e}"))
            })?;
            let related: neo4rs::Node = row.get("relatedNode").map_err(|e| {
                GraphError::Serialization(format!("Failed to get related node: {e}"))
            })?;

            records.push(TraversalRecord {
                start: neo4j_node_to_entity(&start)?,
                relationship: neo4j_relation_to_relationship(&relation)?,
                related: neo4j_node_to_entity(&related)?,
            });
        }

        tracing::debug!(anchor_id, records = records.len(), "Traversed neighbourhood");
        Ok(records)
    }
}

fn movie_from_row(row: &neo4rs::Row) -> Result<Movie, GraphError> {
    let title: String = row
        .get("title")
        .map_err(|e| GraphError::Serialization(format!("Failed to deserialize title: {e}")))?;

    Ok(Movie {
        title,
        released: optional(row, "released")?,
        tagline: optional(row, "tagline")?,
        votes: optional(row, "votes")?,
        cast: Vec::new(),
    })
}

/// Read a nullable column. Null maps to `None`; a value of the wrong type is an error.
fn optional<T: DeserializeOwned>(row: &neo4rs::Row, key: &str) -> Result<Option<T>, GraphError> {
    row.get(key)
        .map_err(|e| GraphError::Serialization(format!("Failed to deserialize {key}: {e}")))
}

fn map_cast(rows: Vec<CastRow>) -> Vec<CastMember> {
    rows.into_iter()
        .filter_map(|r| {
            Some(CastMember {
                name: r.name?,
                job: r.job.unwrap_or_default(),
                role: r.role.unwrap_or_default(),
            })
        })
        .collect()
}

/// Convert a neo4rs::Node to a GraphEntity, keeping every property.
fn neo4j_node_to_entity(node: &neo4rs::Node) -> Result<GraphEntity, GraphError> {
    let mut properties = Properties::new();
    for key in node.keys() {
        let value: serde_json::Value = node.get(key).map_err(|e| {
            GraphError::Serialization(format!("Failed to read node property {key}: {e}"))
        })?;
        properties.insert(key.to_string(), value);
    }

    Ok(GraphEntity {
        id: node.id(),
        labels: node.labels().into_iter().map(str::to_string).collect(),
        properties,
    })
}

/// Convert a neo4rs::Relation to a GraphRelationship, keeping every property.
fn neo4j_relation_to_relationship(
    relation: &neo4rs::Relation,
) -> Result<GraphRelationship, GraphError> {
    let mut properties = Properties::new();
    for key in relation.keys() {
        let value: serde_json::Value = relation.get(key).map_err(|e| {
            GraphError::Serialization(format!("Failed to read relationship property {key}: {e}"))
        })?;
        properties.insert(key.to_string(), value);
    }

    Ok(GraphRelationship {
        id: relation.id(),
        rel_type: relation.typ().to_string(),
        start_node_id: relation.start_node_id(),
        end_node_id: relation.end_node_id(),
        properties,
    })
}
