//! Integration tests for the related-graph builder against a live Neo4j instance.
//!
//! Run with: cargo test --package movies-related --test integration -- --ignored
//!
//! Skipped automatically if Neo4j is not available.

use std::collections::HashSet;

use movies_graph::{GraphClient, GraphConfig};
use movies_related::RelatedEntityGraphBuilder;

async fn connect_or_skip() -> Option<GraphClient> {
    let config = GraphConfig::default();
    match GraphClient::connect(&config).await {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not available): {e}");
            None
        }
    }
}

/// Seeds a movie with two actors and a director, all tagged with `tag`.
/// Returns the movie's internal node id.
async fn seed_movie(client: &GraphClient, tag: &str) -> i64 {
    let q = neo4rs::query(
        "CREATE (m:Movie {title: $title, fixture: $tag})
         CREATE (:Person {name: 'Actor A', fixture: $tag})-[:ACTED_IN {roles: ['Neo']}]->(m)
         CREATE (:Person {name: 'Actor B', fixture: $tag})-[:ACTED_IN {roles: ['Trinity']}]->(m)
         CREATE (:Person {name: 'Director', fixture: $tag})-[:DIRECTED]->(m)
         RETURN id(m) AS id",
    )
    .param("title", format!("Fixture {tag}"))
    .param("tag", tag.to_string());

    let row = client.query_one(q).await.unwrap().unwrap();
    row.get("id").unwrap()
}

async fn cleanup(client: &GraphClient, tag: &str) {
    let q = neo4rs::query("MATCH (n {fixture: $tag}) DETACH DELETE n").param("tag", tag.to_string());
    let _ = client.run(q).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_build_from_seeded_movie() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let tag = uuid::Uuid::new_v4().to_string();
    let movie_id = seed_movie(&client, &tag).await;

    let builder = RelatedEntityGraphBuilder::new(client.clone());
    let graph = builder.build(movie_id).await.unwrap();

    assert_eq!(graph.nodes.len(), 4);
    assert_eq!(graph.relationships.len(), 3);
    assert_eq!(graph.nodes[0].id, movie_id);
    assert_eq!(graph.nodes.iter().filter(|n| n.id == movie_id).count(), 1);

    let ids: HashSet<i64> = graph.nodes.iter().map(|n| n.id).collect();
    for rel in &graph.relationships {
        assert!(ids.contains(&rel.start_node_id));
        assert_eq!(rel.end_node_id, movie_id);
    }

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_build_unknown_anchor_is_empty() {
    let Some(client) = connect_or_skip().await else {
        return;
    };

    let builder = RelatedEntityGraphBuilder::new(client);
    let graph = builder.build(i64::MAX).await.unwrap();
    assert!(graph.is_empty());
}
