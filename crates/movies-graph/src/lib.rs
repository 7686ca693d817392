//! Movies Graph — Neo4j client for the movie catalog.
//!
//! All catalog reads and writes flow through [`GraphClient`]. Driver values
//! are converted to the typed records of `movies-core` here, so callers never
//! see `neo4rs` rows.

pub mod client;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
