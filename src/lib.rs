//! # `weft` - Intrusive Chain Multigraph
//!
//! A generic, mutable, directed multigraph whose adjacency structure is
//! woven through two dense arenas with intrusive chains of integer indices.
//! Nodes and edges each carry an arbitrary caller-supplied value.
//!
//! ## Representation
//!
//! - **Node arena**: append-only `Vec` of node records. Each record holds
//!   the node value plus two chain heads, one per [`Direction`].
//! - **Edge arena**: append-only `Vec` of edge records. Each record holds
//!   the edge value, its two endpoint node indices, and two chain links
//!   that splice it into its endpoints' adjacency chains.
//! - **No side tables**: direction-scoped adjacency is encoded entirely in
//!   the two arenas. "Pointers" are plain array indices, and a reserved
//!   sentinel ([`EdgeIx::INVALID`]) terminates every chain.
//!
//! Because nothing is ever removed, indices are dense, never invalidated,
//! and never reused. New edges are prepended to their chains, so neighbor
//! enumeration yields the most recently inserted edge first.
//!
//! ## What it does not do
//!
//! There is no node or edge removal, no traversal algorithms beyond direct
//! neighbor enumeration, no serialization, and no internal synchronization.
//! A graph is a single exclusively-owned value; mutation takes `&mut self`.
//!
//! ## Example
//!
//! ```rust
//! use weft::{ChainGraph, Direction};
//!
//! let mut graph = ChainGraph::new();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//!
//! graph.add_edge(a, b, 1.0);
//! graph.add_edge(a, c, 2.0);
//!
//! // Chains enumerate in reverse insertion order.
//! let out: Vec<_> = graph.neighbors(a, Direction::Outgoing).collect();
//! assert_eq!(out, vec![c, b]);
//! assert_eq!(graph[b], "b");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{ChainGraph, Direction, EdgeIx, IntoEdgeTriple, NodeIx, DIRECTIONS};
