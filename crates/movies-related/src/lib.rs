//! movies-related: neighbourhood graphs for the movie catalog.
//!
//! Asks a [`GraphQueryExecutor`] for every relationship incident to an anchor
//! entity and consolidates the answer into a [`RelatedGraph`] with each node
//! listed once, ready to be serialized for a graph visualisation.

pub mod builder;
pub mod error;
pub mod executor;

pub use builder::{consolidate, RelatedEntityGraphBuilder};
pub use error::{RelatedError, TraversalError};
pub use executor::GraphQueryExecutor;
pub use movies_core::RelatedGraph;
