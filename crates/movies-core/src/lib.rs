//! movies-core: Shared types, configuration, and error handling for the movie catalog.
//!
//! - Catalog types (Movie, CastMember, CastGraph)
//! - Generic graph types (GraphEntity, GraphRelationship, RelatedGraph)
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{MoviesConfig, Neo4jSettings};
pub use error::MoviesError;
pub use types::{
    CastGraph, CastLink, CastMember, CastNode, CastNodeKind, GraphEntity, GraphRelationship,
    Movie, Properties, RelatedGraph, TraversalRecord,
};
