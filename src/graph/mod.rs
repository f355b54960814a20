//! Graph storage built on intrusive index chains.
//!
//! The module is split by concern:
//! - `index`: strongly-typed node/edge indices, the chain sentinel, and
//!   the two enumeration directions
//! - `chain_graph`: the arena-backed multigraph itself
//! - `build`: bulk construction from edge lists with automatic node
//!   materialization

pub mod build;
pub mod chain_graph;
pub mod index;

// Re-export commonly used types from submodules
pub use build::IntoEdgeTriple;
pub use chain_graph::{ChainGraph, Edge, Edges, Neighbors, Node};
pub use index::{Direction, EdgeIx, NodeIx, DIRECTIONS};
