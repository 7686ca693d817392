//! Core domain types for the movie catalog.
//!
//! Two families live here: catalog records (movies, cast members, the
//! movie/actor cast graph) and the generic node/edge values used to answer
//! neighbourhood queries against arbitrary graph entities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Property bag carried by graph entities and relationships.
pub type Properties = serde_json::Map<String, serde_json::Value>;

// ── Catalog ───────────────────────────────────────────────────────

/// A movie with its (possibly empty) cast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub released: Option<i64>,
    pub tagline: Option<String>,
    pub votes: Option<i64>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// A person linked to a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastMember {
    pub name: String,
    /// First word of the lower-cased relationship type ("acted", "directed", ...).
    pub job: String,
    /// Roles played, joined with ", ". Empty for non-acting jobs.
    pub role: String,
}

// ── Cast Graph ────────────────────────────────────────────────────

/// Kind of a cast graph node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CastNodeKind {
    Movie,
    Actor,
}

/// A node of the force-layout cast graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastNode {
    pub title: String,
    pub label: CastNodeKind,
}

/// An actor → movie link, by index into [`CastGraph::nodes`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastLink {
    pub source: usize,
    pub target: usize,
}

/// Movies and the actors who appeared in them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastGraph {
    pub nodes: Vec<CastNode>,
    pub links: Vec<CastLink>,
}

impl CastGraph {
    /// Assemble a cast graph from `(movie title, actor names)` rows.
    ///
    /// Every row adds one movie node. An actor seen in an earlier row reuses
    /// its node, so each actor appears once however many movies they are in.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut graph = Self::default();
        let mut actor_index: HashMap<String, usize> = HashMap::new();

        for (title, cast) in rows {
            let movie_idx = graph.nodes.len();
            graph.nodes.push(CastNode {
                title,
                label: CastNodeKind::Movie,
            });

            for name in cast {
                let actor_idx = match actor_index.get(&name) {
                    Some(&idx) => idx,
                    None => {
                        let idx = graph.nodes.len();
                        actor_index.insert(name.clone(), idx);
                        graph.nodes.push(CastNode {
                            title: name,
                            label: CastNodeKind::Actor,
                        });
                        idx
                    }
                };
                graph.links.push(CastLink {
                    source: actor_idx,
                    target: movie_idx,
                });
            }
        }

        graph
    }
}

// ── Generic Graph ─────────────────────────────────────────────────

/// A graph database vertex.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphEntity {
    pub id: i64,
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: Properties,
}

/// A directed, typed edge between two [`GraphEntity`] values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphRelationship {
    pub id: i64,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub start_node_id: i64,
    pub end_node_id: i64,
    #[serde(default)]
    pub properties: Properties,
}

/// One `(start, relationship, related)` tuple from a neighbourhood traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalRecord {
    pub start: GraphEntity,
    pub relationship: GraphRelationship,
    pub related: GraphEntity,
}

/// Entities connected to an anchor, and the edges connecting them.
///
/// Node ids are unique and every relationship endpoint refers to a node in
/// `nodes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RelatedGraph {
    pub nodes: Vec<GraphEntity>,
    pub relationships: Vec<GraphRelationship>,
}

impl RelatedGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relationships.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: i64) -> Option<&GraphEntity> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        data.iter()
            .map(|(title, cast)| {
                (
                    (*title).to_string(),
                    cast.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn cast_graph_reuses_actor_nodes() {
        let graph = CastGraph::from_rows(rows(&[
            ("The Matrix", &["Keanu Reeves", "Carrie-Anne Moss"]),
            ("Johnny Mnemonic", &["Keanu Reeves"]),
        ]));

        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.links.len(), 3);
        assert_eq!(graph.nodes[0].label, CastNodeKind::Movie);
        assert_eq!(graph.nodes[1].title, "Keanu Reeves");
        assert_eq!(graph.nodes[3].title, "Johnny Mnemonic");

        // Keanu's second link points at the node created for the first movie.
        assert_eq!(graph.links[2], CastLink { source: 1, target: 3 });
    }

    #[test]
    fn cast_graph_links_are_in_range() {
        let graph = CastGraph::from_rows(rows(&[
            ("A", &["x", "y"]),
            ("B", &["y", "z"]),
            ("C", &[]),
        ]));

        for link in &graph.links {
            assert_eq!(graph.nodes[link.source].label, CastNodeKind::Actor);
            assert_eq!(graph.nodes[link.target].label, CastNodeKind::Movie);
        }
        assert_eq!(graph.nodes.len(), 6);
    }

    #[test]
    fn actor_sharing_a_movie_title_gets_own_node() {
        let graph = CastGraph::from_rows(rows(&[("Cher", &["Cher"])]));
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.links[0], CastLink { source: 1, target: 0 });
    }

    #[test]
    fn cast_graph_json_shape() {
        let graph = CastGraph::from_rows(rows(&[("Top Gun", &["Tom Cruise"])]));
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [
                    {"title": "Top Gun", "label": "movie"},
                    {"title": "Tom Cruise", "label": "actor"}
                ],
                "links": [{"source": 1, "target": 0}]
            })
        );
    }

    #[test]
    fn relationship_serializes_camel_case() {
        let rel = GraphRelationship {
            id: 10,
            rel_type: "ACTED_IN".to_string(),
            start_node_id: 1,
            end_node_id: 2,
            properties: Properties::new(),
        };

        let json = serde_json::to_value(&rel).unwrap();
        assert_eq!(json["type"], "ACTED_IN");
        assert_eq!(json["startNodeId"], 1);
        assert_eq!(json["endNodeId"], 2);
    }

    #[test]
    fn movie_without_cast_deserializes() {
        let movie: Movie =
            serde_json::from_str(r#"{"title":"Cloud Atlas","released":2012,"tagline":null,"votes":null}"#)
                .unwrap();
        assert_eq!(movie.released, Some(2012));
        assert!(movie.cast.is_empty());
    }
}
